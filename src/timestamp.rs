//! 时间戳推导模块
//!
//! # 设计思路
//!
//! 把日期输入框与时间输入框的原始文本拼接为 `"日期 时间"`，按本地时区
//! 解析为时刻，返回 Unix 纪元秒。任何无法解析的输入都得到 `None`，
//! 不抛错、不 panic，“无值”是唯一的失败信号。
//!
//! # 实现思路
//!
//! - 日期为空时直接返回 `None`，不读取时间。
//! - 时间为空时拼接结果末尾只剩一个空格，去掉尾部空白后按纯日期解析，
//!   得到当天本地零点。
//! - 解析使用 `chrono` 的格式串逐个尝试；时区由调用方给出，
//!   `derive_timestamp` 固定使用 `chrono::Local`。
//! - 本地时刻有歧义（夏令时回拨）取较早者；落入夏令时跳变空档时
//!   顺延一小时，与浏览器 `Date` 的处理方式一致。

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

/// 日期 + 时间的组合格式（日期控件输出 `YYYY-MM-DD`，时间控件输出 `HH:MM[:SS[.fff]]`）。
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
];

/// 仅日期的格式，时间缺省为零点。
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// 按本地时区推导纪元秒。
///
/// # 示例
/// ```rust
/// use discord_timestamp::timestamp::derive_timestamp;
///
/// assert_eq!(derive_timestamp("", "16:20"), None);
/// assert!(derive_timestamp("2021-04-20", "16:20").is_some());
/// assert_eq!(derive_timestamp("not a date", ""), None);
/// ```
pub fn derive_timestamp(date_text: &str, time_text: &str) -> Option<i64> {
    derive_timestamp_in(date_text, time_text, &Local)
}

/// 按指定时区推导纪元秒，便于在固定时区下校验结果。
pub fn derive_timestamp_in<Tz: TimeZone>(
    date_text: &str,
    time_text: &str,
    tz: &Tz,
) -> Option<i64> {
    if date_text.is_empty() {
        return None;
    }

    let combined = format!("{date_text} {time_text}");
    let naive = parse_naive(combined.trim_end())?;
    resolve_local(&naive, tz).map(|instant| instant.timestamp())
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn resolve_local<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Some(instant) = earlier_instant(tz.from_local_datetime(naive)) {
        return Some(instant);
    }

    // 夏令时空档内的本地时间不存在，顺延一小时
    let shifted = naive.checked_add_signed(Duration::hours(1))?;
    earlier_instant(tz.from_local_datetime(&shifted))
}

/// 歧义时取较早的时刻。`Local` 返回的歧义对并不保证按时间先后排列。
fn earlier_instant<Tz: TimeZone>(result: LocalResult<DateTime<Tz>>) -> Option<DateTime<Tz>> {
    match result {
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(a, b) => Some(if b.timestamp() < a.timestamp() { b } else { a }),
        LocalResult::None => None,
    }
}
