//! 剪贴板复制模块
//!
//! # 设计思路
//!
//! 根据用户选择复制“原始时间戳”或“格式化标签”：
//! - **前置条件**：时间戳或标签任一缺失时什么都不做，不访问剪贴板，也不报错。
//! - **异步写入**：系统剪贴板访问可能阻塞，写入放到阻塞线程执行，
//!   调用方 `await` 完成后再提示用户。
//! - **错误透传**：平台拒绝写入（权限、无显示服务等）以 `AppError::Clipboard`
//!   返回，本模块不重试、不吞掉错误，如何提示由调用方决定。
//!
//! # 实现思路
//!
//! - 平台能力抽象为 `ClipboardWriter` trait，生产环境使用 `SystemClipboard`
//!   （`arboard`），测试注入记录型实现。
//! - 复制内容取自调用时的 `InputState` 快照，两次复制之间没有共享可变状态。

mod writer;

use std::sync::Arc;

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::input::InputState;

pub use writer::{ClipboardWriter, SystemClipboard};

/// 复制内容的类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CopyKind {
    /// 纪元秒的十进制字符串
    #[value(alias = "timestamp")]
    Raw,
    /// `<t:...>` 标签
    Formatted,
}

impl CopyKind {
    /// 复制成功后展示给用户的提示。
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Raw => "Timestamp has been copied to your clipboard successfully.",
            Self::Formatted => "Format has been copied to your clipboard successfully.",
        }
    }
}

/// 剪贴板复制器，持有平台写入实现。
pub struct ClipboardEmitter<W = SystemClipboard> {
    writer: Arc<W>,
}

impl<W> ClipboardEmitter<W>
where
    W: ClipboardWriter,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Arc::new(writer),
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// 将当前输入推导出的内容写入剪贴板。
    ///
    /// 无可复制内容时直接返回 `Ok(())`，不会调用写入实现。
    pub async fn copy(&self, state: &InputState, kind: CopyKind) -> AppResult<()> {
        let Some(text) = state.payload(kind) else {
            return Ok(());
        };

        let writer = Arc::clone(&self.writer);
        tokio::task::spawn_blocking(move || writer.write_text(&text))
            .await
            .map_err(|e| AppError::Clipboard(format!("线程执行失败：{}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingWriter {
        written: Mutex<Vec<String>>,
    }

    impl ClipboardWriter for RecordingWriter {
        fn write_text(&self, text: &str) -> AppResult<()> {
            self.written
                .lock()
                .map_err(|e| AppError::Clipboard(e.to_string()))?
                .push(text.to_string());
            Ok(())
        }
    }

    struct DenyingWriter;

    impl ClipboardWriter for DenyingWriter {
        fn write_text(&self, _text: &str) -> AppResult<()> {
            Err(AppError::Clipboard("permission denied".to_string()))
        }
    }

    fn written(emitter: &ClipboardEmitter<RecordingWriter>) -> Vec<String> {
        emitter.writer().written.lock().expect("lock").clone()
    }

    fn filled_state(style: &str) -> InputState {
        let mut state = InputState::new();
        state.set_date("2021-04-20");
        state.set_time("16:20");
        state.select_style(style);
        state
    }

    #[tokio::test]
    async fn absent_values_never_touch_clipboard() {
        let emitter = ClipboardEmitter::new(RecordingWriter::default());
        let mut state = InputState::new();
        state.set_time("16:20");

        emitter.copy(&state, CopyKind::Raw).await.expect("no-op copy");
        emitter.copy(&state, CopyKind::Formatted).await.expect("no-op copy");

        assert!(written(&emitter).is_empty());
    }

    #[tokio::test]
    async fn absent_values_skip_even_a_failing_writer() {
        let emitter = ClipboardEmitter::new(DenyingWriter);
        let state = InputState::new();

        assert!(emitter.copy(&state, CopyKind::Formatted).await.is_ok());
    }

    #[tokio::test]
    async fn raw_copy_writes_epoch_digits() {
        let emitter = ClipboardEmitter::new(RecordingWriter::default());
        let state = filled_state("f");
        let epoch = state.timestamp().expect("timestamp");

        emitter.copy(&state, CopyKind::Raw).await.expect("copy");

        assert_eq!(written(&emitter), vec![epoch.to_string()]);
    }

    #[tokio::test]
    async fn formatted_copy_writes_tag() {
        let emitter = ClipboardEmitter::new(RecordingWriter::default());
        let state = filled_state("D");
        let epoch = state.timestamp().expect("timestamp");

        emitter.copy(&state, CopyKind::Formatted).await.expect("copy");
        emitter.copy(&state, CopyKind::Formatted).await.expect("copy");

        let expected = format!("<t:{epoch}:D>");
        assert_eq!(written(&emitter), vec![expected.clone(), expected]);
    }

    #[tokio::test]
    async fn rejected_write_is_returned_to_caller() {
        let emitter = ClipboardEmitter::new(DenyingWriter);
        let state = filled_state("f");

        let err = emitter
            .copy(&state, CopyKind::Raw)
            .await
            .expect_err("write should be rejected");
        assert!(matches!(err, AppError::Clipboard(msg) if msg == "permission denied"));
    }

    #[test]
    fn success_messages_match_copy_kind() {
        assert!(CopyKind::Raw.success_message().starts_with("Timestamp"));
        assert!(CopyKind::Formatted.success_message().starts_with("Format"));
    }
}
