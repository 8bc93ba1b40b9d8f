//! # Discord 时间戳生成器 — 应用入口
//!
//! 本文件仅负责日志初始化、参数解析与依赖装配。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::io;
use std::process::ExitCode;

use clap::Parser;
use discord_timestamp::cli::{self, Cli, Command};
use discord_timestamp::clipboard::{ClipboardEmitter, SystemClipboard};
use discord_timestamp::error::AppResult;
use discord_timestamp::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("运行失败: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> AppResult<()> {
    let settings = Settings::load(args.settings.as_deref())?;
    let emitter = ClipboardEmitter::new(SystemClipboard::new(settings.clipboard_hold()));
    let command = args.command.unwrap_or(Command::Form);

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    cli::run(command, &settings, &emitter, &mut input, &mut out).await
}
