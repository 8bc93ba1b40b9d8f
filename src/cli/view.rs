//! 输出面板与样式列表的终端渲染。

use std::io::{self, Write};

use crate::format::{option_label, StyleDescriptor, DEFAULT_FIELD_HINT};
use crate::input::InputState;

pub const NO_TIMESTAMP: &str = "No timestamp generated";
pub const NO_FORMAT: &str = "No format";

/// 渲染结果面板：时间戳与格式化标签，缺失时显示占位文本。
pub fn render_panel<W: Write>(out: &mut W, state: &InputState) -> io::Result<()> {
    let timestamp = state
        .timestamp()
        .map(|epoch| epoch.to_string())
        .unwrap_or_else(|| NO_TIMESTAMP.to_string());
    let formatted = state.formatted().unwrap_or_else(|| NO_FORMAT.to_string());

    writeln!(out, "Unix Timestamp")?;
    writeln!(out, "    {timestamp}")?;
    writeln!(out, "Formatted Message")?;
    writeln!(out, "    {formatted}")?;
    Ok(())
}

/// 渲染样式选项列表，编号从 1 开始，末尾附默认项说明。
pub fn render_styles<W: Write>(out: &mut W, catalog: &[StyleDescriptor]) -> io::Result<()> {
    for (index, style) in catalog.iter().enumerate() {
        writeln!(
            out,
            "{:>3}) {}  {}",
            index + 1,
            style.code,
            option_label(style).trim_end()
        )?;
    }
    writeln!(out, "{DEFAULT_FIELD_HINT}")?;
    Ok(())
}
