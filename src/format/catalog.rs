//! 样式目录：代码、名称、示例与默认标记。

/// 单个时间戳显示样式的描述。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    /// 单字符样式代码，出现在标签的 `:` 之后。
    pub code: &'static str,
    pub label: &'static str,
    /// Discord 渲染效果示例（以 2021-04-20 16:20:30 为例）。
    pub example: &'static str,
    pub is_default: bool,
}

impl StyleDescriptor {
    const fn new(code: &'static str, label: &'static str, example: &'static str) -> Self {
        Self {
            code,
            label,
            example,
            is_default: false,
        }
    }

    const fn as_default(self) -> Self {
        Self {
            is_default: true,
            ..self
        }
    }
}

/// Discord 支持的全部样式，顺序即下拉选项顺序。
pub static TIMESTAMP_STYLES: [StyleDescriptor; 7] = [
    StyleDescriptor::new("t", "Short Time", "16:20"),
    StyleDescriptor::new("T", "Long Time", "16:20:30"),
    StyleDescriptor::new("d", "Short Date", "20/04/2021"),
    StyleDescriptor::new("D", "Long Date", "20 April 2021"),
    StyleDescriptor::new("f", "Short Date / Time", "20 April 2021 16:20").as_default(),
    StyleDescriptor::new("F", "Long Date / Time", "Tuesday, 20 April 2021 16:20"),
    StyleDescriptor::new("R", "Relative Time", "2 months ago"),
];

/// 选项列表下方的默认项说明。
pub const DEFAULT_FIELD_HINT: &str = "* Default field";

/// 目录中的默认样式；目录没有默认项时返回 `None`。
pub fn default_style(catalog: &[StyleDescriptor]) -> Option<&StyleDescriptor> {
    catalog.iter().find(|style| style.is_default)
}

/// 默认样式代码，目录没有默认项时为空串。
pub fn default_style_code(catalog: &[StyleDescriptor]) -> &'static str {
    default_style(catalog).map(|style| style.code).unwrap_or("")
}

pub fn find_style<'a>(catalog: &'a [StyleDescriptor], code: &str) -> Option<&'a StyleDescriptor> {
    catalog.iter().find(|style| style.code == code)
}

/// 判断样式代码是否为默认样式。
///
/// 目录里找不到的代码一律视为“非默认”，不做拒绝。
pub fn is_default_style(catalog: &[StyleDescriptor], code: &str) -> bool {
    find_style(catalog, code).is_some_and(|style| style.is_default)
}

/// 下拉选项文本，例如 `Short Date / Time (20 April 2021 16:20) *`。
pub fn option_label(style: &StyleDescriptor) -> String {
    format!(
        "{} ({}) {}",
        style.label,
        style.example,
        if style.is_default { "*" } else { "" }
    )
}
