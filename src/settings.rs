//! 前端设置模块
//!
//! # 设计思路
//!
//! 设置只影响终端前端的行为（是否提示、剪贴板保持时间），不包含样式目录，
//! 也不保存任何转换历史。文件不存在时使用默认值。
//!
//! # 实现思路
//!
//! - 默认路径为 `<配置目录>/discord-timestamp/settings.json`（`dirs`），
//!   可通过 `--settings` 指定其他文件。
//! - 使用 `serde_json` 解析；缺失字段回退到默认值，格式错误返回 `AppError::Settings`。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const SETTINGS_DIR_NAME: &str = "discord-timestamp";
const SETTINGS_FILE_NAME: &str = "settings.json";
const DEFAULT_CLIPBOARD_HOLD_MS: u64 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// 复制成功后是否打印提示。
    pub notify: bool,
    /// Linux 下写入后保持剪贴板所有权的毫秒数，0 表示不等待。
    pub clipboard_hold_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notify: true,
            clipboard_hold_ms: DEFAULT_CLIPBOARD_HOLD_MS,
        }
    }
}

impl Settings {
    pub fn clipboard_hold(&self) -> Duration {
        Duration::from_millis(self.clipboard_hold_ms)
    }

    /// 加载设置：优先使用显式路径，否则使用默认路径。
    pub fn load(explicit: Option<&Path>) -> AppResult<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => match default_settings_path() {
                Some(path) => Self::load_from_path(&path),
                None => {
                    log::debug!("未找到配置目录，使用默认设置");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from_path(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("设置文件不存在，使用默认设置: {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Settings(format!("读取设置文件 '{}' 失败: {}", path.display(), e))
        })?;
        let settings = serde_json::from_str::<Self>(&content).map_err(|e| {
            AppError::Settings(format!("解析设置文件 '{}' 失败: {}", path.display(), e))
        })?;

        log::debug!("已加载设置: {} -> {:?}", path.display(), settings);
        Ok(settings)
    }
}

/// 默认设置文件路径；平台没有配置目录时返回 `None`。
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
