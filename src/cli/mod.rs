//! 终端前端
//!
//! # 设计思路
//!
//! 前端只负责收集三个原始输入、展示推导结果、触发复制并提示用户；
//! 推导逻辑全部在 `input` / `timestamp` / `format` 中完成。
//!
//! - `generate`：一次性生成，可选 `--copy` 与 `--json`
//! - `styles`：列出样式目录
//! - `form`（默认）：交互式表单
//!
//! 只有时间戳和标签都存在时才提供复制。

pub mod form;
pub mod view;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::clipboard::{ClipboardEmitter, ClipboardWriter, CopyKind};
use crate::error::{AppError, AppResult};
use crate::input::InputState;
use crate::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "discord-timestamp")]
#[command(about = "Generate Discord timestamp tags from a local date and time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file, defaults to <config_dir>/discord-timestamp/settings.json
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the timestamp and tag for a date and time
    Generate {
        /// Date as YYYY-MM-DD
        #[arg(long, default_value = "")]
        date: String,

        /// Time as HH:MM or HH:MM:SS, midnight when omitted
        #[arg(long, default_value = "")]
        time: String,

        /// Style code (t, T, d, D, f, F, R); defaults to the default style
        #[arg(long)]
        style: Option<String>,

        /// Copy the raw timestamp or the formatted tag to the clipboard
        #[arg(long, value_enum)]
        copy: Option<CopyKind>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available styles
    Styles,

    /// Fill in the form interactively
    Form,
}

/// `generate --json` 的输出结构。
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    timestamp: Option<i64>,
    formatted: Option<String>,
    copied: Option<CopyKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a AppError>,
}

/// 执行一条命令。
///
/// 读写对象与剪贴板实现均由调用方注入。
pub async fn run<W, R, O>(
    command: Command,
    settings: &Settings,
    emitter: &ClipboardEmitter<W>,
    input: &mut R,
    out: &mut O,
) -> AppResult<()>
where
    W: ClipboardWriter,
    R: BufRead,
    O: Write,
{
    match command {
        Command::Generate {
            date,
            time,
            style,
            copy,
            json,
        } => {
            let mut state = InputState::new();
            state.set_date(date);
            state.set_time(time);
            if let Some(style) = style {
                state.select_style(style);
            }

            if json {
                generate_json(&state, copy, emitter, out).await
            } else {
                view::render_panel(out, &state)?;
                match copy {
                    Some(kind) => copy_and_notify(&state, kind, settings, emitter, out).await,
                    None => Ok(()),
                }
            }
        }

        Command::Styles => {
            let state = InputState::new();
            view::render_styles(out, state.catalog())?;
            Ok(())
        }

        Command::Form => {
            let mut state = InputState::new();
            match form::run_form(input, out, &mut state)? {
                Some(kind) => copy_and_notify(&state, kind, settings, emitter, out).await,
                None => Ok(()),
            }
        }
    }
}

async fn generate_json<W, O>(
    state: &InputState,
    copy: Option<CopyKind>,
    emitter: &ClipboardEmitter<W>,
    out: &mut O,
) -> AppResult<()>
where
    W: ClipboardWriter,
    O: Write,
{
    let copy_result = match copy {
        Some(kind) if state.payload(kind).is_some() => {
            Some((kind, emitter.copy(state, kind).await))
        }
        Some(kind) => {
            log::warn!("没有可复制的内容（{:?}），已跳过", kind);
            None
        }
        None => None,
    };

    let report = JsonReport {
        timestamp: state.timestamp(),
        formatted: state.formatted(),
        copied: match &copy_result {
            Some((kind, Ok(()))) => Some(*kind),
            _ => None,
        },
        error: match &copy_result {
            Some((_, Err(err))) => Some(err),
            _ => None,
        },
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| AppError::Output(e.to_string()))?;
    writeln!(out, "{json}")?;

    match copy_result {
        Some((_, Err(err))) => Err(err),
        _ => Ok(()),
    }
}

async fn copy_and_notify<W, O>(
    state: &InputState,
    kind: CopyKind,
    settings: &Settings,
    emitter: &ClipboardEmitter<W>,
    out: &mut O,
) -> AppResult<()>
where
    W: ClipboardWriter,
    O: Write,
{
    if state.payload(kind).is_none() {
        log::warn!("没有可复制的内容（{:?}），已跳过", kind);
        return Ok(());
    }

    emitter.copy(state, kind).await?;
    if settings.notify {
        writeln!(out, "{}", kind.success_message())?;
    }
    Ok(())
}
