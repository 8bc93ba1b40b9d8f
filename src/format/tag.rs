use super::{is_default_style, StyleDescriptor};

/// 生成 Discord 时间戳标签。
///
/// - `epoch_seconds` 为 `None` 时返回 `None`。
/// - 默认样式：`<t:1618935600>`；其他样式（包括目录外的代码）：`<t:1618935600:D>`。
///
/// # 示例
/// ```rust
/// use discord_timestamp::format::{format_tag, TIMESTAMP_STYLES};
///
/// assert_eq!(format_tag(Some(1618935600), "f", &TIMESTAMP_STYLES).as_deref(), Some("<t:1618935600>"));
/// assert_eq!(format_tag(Some(1618935600), "R", &TIMESTAMP_STYLES).as_deref(), Some("<t:1618935600:R>"));
/// assert_eq!(format_tag(None, "R", &TIMESTAMP_STYLES), None);
/// ```
pub fn format_tag(
    epoch_seconds: Option<i64>,
    style_code: &str,
    catalog: &[StyleDescriptor],
) -> Option<String> {
    let epoch = epoch_seconds?;
    if is_default_style(catalog, style_code) {
        Some(format!("<t:{epoch}>"))
    } else {
        Some(format!("<t:{epoch}:{style_code}>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::TIMESTAMP_STYLES;

    #[test]
    fn default_style_omits_suffix() {
        assert_eq!(
            format_tag(Some(1618935600), "f", &TIMESTAMP_STYLES).as_deref(),
            Some("<t:1618935600>")
        );
    }

    #[test]
    fn every_non_default_style_gets_suffix() {
        for style in TIMESTAMP_STYLES.iter().filter(|s| !s.is_default) {
            let tag = format_tag(Some(42), style.code, &TIMESTAMP_STYLES).expect("tag");
            assert_eq!(tag, format!("<t:42:{}>", style.code));
        }
    }

    #[test]
    fn absent_epoch_stays_absent() {
        for style in &TIMESTAMP_STYLES {
            assert_eq!(format_tag(None, style.code, &TIMESTAMP_STYLES), None);
        }
    }

    #[test]
    fn unknown_code_is_emitted_verbatim() {
        assert_eq!(
            format_tag(Some(7), "x", &TIMESTAMP_STYLES).as_deref(),
            Some("<t:7:x>")
        );
        assert_eq!(format_tag(Some(7), "", &TIMESTAMP_STYLES).as_deref(), Some("<t:7:>"));
    }

    #[test]
    fn zero_and_negative_epochs_are_real_values() {
        assert_eq!(format_tag(Some(0), "f", &TIMESTAMP_STYLES).as_deref(), Some("<t:0>"));
        assert_eq!(
            format_tag(Some(-3600), "t", &TIMESTAMP_STYLES).as_deref(),
            Some("<t:-3600:t>")
        );
    }

    #[test]
    fn catalog_without_default_always_suffixes() {
        let catalog = [StyleDescriptor {
            code: "f",
            label: "Short Date / Time",
            example: "20 April 2021 16:20",
            is_default: false,
        }];
        assert_eq!(format_tag(Some(1), "f", &catalog).as_deref(), Some("<t:1:f>"));
    }
}
