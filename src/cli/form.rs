//! 交互式表单
//!
//! 依次询问日期、时间、样式，渲染结果面板；时间戳与标签都存在时
//! 再询问是否复制。读写对象由调用方传入，便于用内存缓冲测试。
//! 输入结束（EOF）按空回答处理。

use std::io::{BufRead, Write};

use super::view;
use crate::clipboard::CopyKind;
use crate::error::AppResult;
use crate::input::InputState;

/// 运行一次表单，返回用户选择的复制类型。
pub fn run_form<R, W>(
    input: &mut R,
    out: &mut W,
    state: &mut InputState,
) -> AppResult<Option<CopyKind>>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Generate Timestamp")?;

    let date = prompt(input, out, "Date (YYYY-MM-DD): ")?;
    state.set_date(date);

    let time = prompt(input, out, "Time (HH:MM, optional): ")?;
    state.set_time(time);

    writeln!(out, "Format")?;
    view::render_styles(out, state.catalog())?;
    let answer = prompt(input, out, &format!("Format [{}]: ", state.selected_style()))?;
    if let Some(code) = resolve_style_answer(state, &answer) {
        state.select_style(code);
    }

    writeln!(out)?;
    view::render_panel(out, state)?;

    if state.timestamp().is_none() || state.formatted().is_none() {
        return Ok(None);
    }

    let answer = prompt(input, out, "Copy [t]imestamp / [f]ormatted (Enter to skip): ")?;
    Ok(parse_copy_answer(&answer))
}

fn prompt<R, W>(input: &mut R, out: &mut W, label: &str) -> AppResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// 样式回答：空串保留当前选择；数字按列表序号选择；其余原样作为样式代码。
fn resolve_style_answer(state: &InputState, answer: &str) -> Option<String> {
    if answer.is_empty() {
        return None;
    }

    if let Ok(index) = answer.parse::<usize>() {
        if let Some(style) = index.checked_sub(1).and_then(|i| state.catalog().get(i)) {
            return Some(style.code.to_string());
        }
    }

    Some(answer.to_string())
}

fn parse_copy_answer(answer: &str) -> Option<CopyKind> {
    match answer.to_ascii_lowercase().as_str() {
        "t" | "timestamp" | "raw" => Some(CopyKind::Raw),
        "f" | "formatted" | "format" => Some(CopyKind::Formatted),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(script: &str) -> (Option<CopyKind>, InputState, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut state = InputState::new();
        let choice = run_form(&mut input, &mut out, &mut state).expect("form");
        (choice, state, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn default_style_is_kept_on_enter() {
        let (choice, state, text) = run("2021-04-20\n16:20\n\nf\n");
        let epoch = state.timestamp().expect("timestamp");

        assert_eq!(state.selected_style(), "f");
        assert_eq!(choice, Some(CopyKind::Formatted));
        assert!(text.contains(&format!("<t:{epoch}>")));
        assert!(text.contains("Format [f]: "));
    }

    #[test]
    fn style_can_be_picked_by_number_or_code() {
        let (_, by_number, _) = run("2021-04-20\n\n4\n\n");
        assert_eq!(by_number.selected_style(), "D");

        let (_, by_code, _) = run("2021-04-20\n\nR\n\n");
        assert_eq!(by_code.selected_style(), "R");
    }

    #[test]
    fn out_of_range_number_is_taken_as_code() {
        let (_, state, _) = run("2021-04-20\n\n9\n\n");
        assert_eq!(state.selected_style(), "9");
    }

    #[test]
    fn missing_date_shows_placeholders_and_skips_copy_prompt() {
        let (choice, state, text) = run("\n16:20\n\nt\n");

        assert_eq!(choice, None);
        assert_eq!(state.time_text(), "16:20");
        assert!(text.contains(view::NO_TIMESTAMP));
        assert!(text.contains(view::NO_FORMAT));
        assert!(!text.contains("Copy [t]imestamp"));
    }

    #[test]
    fn eof_counts_as_empty_answers() {
        let (choice, state, _) = run("2021-04-20\n");
        assert_eq!(state.time_text(), "");
        assert_eq!(state.selected_style(), "f");
        assert_eq!(choice, None);
    }

    #[test]
    fn copy_answers_are_case_insensitive() {
        assert_eq!(parse_copy_answer("T"), Some(CopyKind::Raw));
        assert_eq!(parse_copy_answer("Formatted"), Some(CopyKind::Formatted));
        assert_eq!(parse_copy_answer(""), None);
        assert_eq!(parse_copy_answer("nope"), None);
    }
}
