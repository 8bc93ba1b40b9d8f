//! 输入状态模块
//!
//! # 设计思路
//!
//! `InputState` 只保存表单的三个原始值：日期文本、时间文本、所选样式代码。
//! 时间戳与标签不缓存，每次访问都从当前输入重新推导，保证展示结果与
//! 输入始终一致。
//!
//! # 实现思路
//!
//! 字段私有，仅前端（表单层）通过 setter 修改；推导结果以 `Option`
//! 组合传递：`timestamp()` → `formatted()` → `payload()`。

use crate::clipboard::CopyKind;
use crate::format::{default_style_code, format_tag, StyleDescriptor, TIMESTAMP_STYLES};
use crate::timestamp::derive_timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    date_text: String,
    time_text: String,
    selected_style: String,
    catalog: &'static [StyleDescriptor],
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_catalog(&TIMESTAMP_STYLES)
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以指定目录初始化，所选样式为该目录的默认样式（无默认项时为空串）。
    pub fn with_catalog(catalog: &'static [StyleDescriptor]) -> Self {
        Self {
            date_text: String::new(),
            time_text: String::new(),
            selected_style: default_style_code(catalog).to_string(),
            catalog,
        }
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn selected_style(&self) -> &str {
        &self.selected_style
    }

    pub fn catalog(&self) -> &'static [StyleDescriptor] {
        self.catalog
    }

    pub fn set_date(&mut self, date_text: impl Into<String>) {
        self.date_text = date_text.into();
    }

    pub fn set_time(&mut self, time_text: impl Into<String>) {
        self.time_text = time_text.into();
    }

    /// 选择样式。代码不做校验，目录外的代码按“非默认”处理。
    pub fn select_style(&mut self, style_code: impl Into<String>) {
        self.selected_style = style_code.into();
    }

    /// 当前输入对应的纪元秒。
    pub fn timestamp(&self) -> Option<i64> {
        derive_timestamp(&self.date_text, &self.time_text)
    }

    /// 当前输入对应的时间戳标签。
    pub fn formatted(&self) -> Option<String> {
        format_tag(self.timestamp(), &self.selected_style, self.catalog)
    }

    /// 复制内容：时间戳和标签都存在时才有值。
    pub fn payload(&self, kind: CopyKind) -> Option<String> {
        let timestamp = self.timestamp()?;
        let formatted = self.formatted()?;
        Some(match kind {
            CopyKind::Raw => timestamp.to_string(),
            CopyKind::Formatted => formatted,
        })
    }
}
