//! 系统剪贴板写入实现。

use std::time::Duration;

use crate::error::{AppError, AppResult};

/// 纯文本剪贴板写入能力。
///
/// 实现在阻塞线程中调用，可以同步等待平台返回。
pub trait ClipboardWriter: Send + Sync + 'static {
    fn write_text(&self, text: &str) -> AppResult<()>;
}

/// 基于 `arboard` 的系统剪贴板。
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    /// Linux 下写入后保持剪贴板所有权的最长时间。
    ///
    /// X11/Wayland 的剪贴板内容由写入进程持有，进程退出即丢失；
    /// 其他程序（如剪贴板管理器）接管后会提前结束等待。
    hold: Duration,
}

impl SystemClipboard {
    pub fn new(hold: Duration) -> Self {
        Self { hold }
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    #[cfg(target_os = "linux")]
    fn set_text(
        &self,
        clipboard: &mut arboard::Clipboard,
        text: &str,
    ) -> Result<(), arboard::Error> {
        use arboard::SetExtLinux;

        if self.hold.is_zero() {
            return clipboard.set_text(text);
        }

        log::debug!("📋 保持剪贴板所有权最多 {}ms", self.hold.as_millis());
        clipboard
            .set()
            .wait_until(std::time::Instant::now() + self.hold)
            .text(text)
    }

    #[cfg(not(target_os = "linux"))]
    fn set_text(
        &self,
        clipboard: &mut arboard::Clipboard,
        text: &str,
    ) -> Result<(), arboard::Error> {
        clipboard.set_text(text)
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> AppResult<()> {
        log::debug!("📋 准备复制到剪贴板 - {} 字符", text.len());

        let mut clipboard = arboard::Clipboard::new().map_err(|e| {
            log::warn!("❌ 无法访问剪贴板: {}", e);
            AppError::Clipboard(format!("无法访问剪贴板：{}", e))
        })?;

        self.set_text(&mut clipboard, text).map_err(|e| {
            log::warn!("❌ 写入剪贴板失败: {}", e);
            AppError::Clipboard(format!("复制失败：{}", e))
        })?;

        log::info!("✅ 复制成功");
        Ok(())
    }
}
