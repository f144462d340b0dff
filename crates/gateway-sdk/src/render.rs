//! Rendering of gateway replies for display.
//!
//! [`render_markdown`] handles the small markdown subset the chat page
//! supports. Output is not escaped, so it must not be treated as sanitized
//! HTML.

use gateway_core::ErrorCode;
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));

#[allow(clippy::expect_used)]
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("valid regex"));

#[allow(clippy::expect_used)]
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\.|[-*])\s+(.+)$").expect("valid regex"));

const LIST_ITEM_HTML: &str = r#"<li style="margin-left: 20px;">$1</li>"#;

/// Render reply text to HTML.
///
/// Each line goes through bold, italic and list-item substitution in that
/// order; lines are then joined with `<br>`.
///
/// ```
/// use gateway_sdk::render_markdown;
///
/// assert_eq!(
///     render_markdown("**bold** and *italic*\n- item"),
///     r#"<strong>bold</strong> and <em>italic</em><br><li style="margin-left: 20px;">item</li>"#
/// );
/// ```
pub fn render_markdown(text: &str) -> String {
    text.split('\n')
        .map(render_line)
        .collect::<Vec<_>>()
        .join("<br>")
}

fn render_line(line: &str) -> String {
    let line = BOLD.replace_all(line, "<strong>$1</strong>");
    let line = ITALIC.replace_all(&line, "<em>$1</em>");
    LIST_ITEM.replace(&line, LIST_ITEM_HTML).into_owned()
}

/// Text to show for a failure.
///
/// Messages for recognized provider failures are shown as sent. Anything
/// else gets an `Error` label, with the HTTP status when one is known.
pub fn format_error_message(error_code: &str, message: &str, status: Option<u16>) -> String {
    let recognized = error_code
        .parse::<ErrorCode>()
        .is_ok_and(ErrorCode::is_provider_failure);

    if recognized {
        return message.to_string();
    }

    match status {
        Some(status) => format!("Error {status} - {message}"),
        None => format!("Error - {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_before_italic() {
        assert_eq!(
            render_markdown("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_line_break_then_list_item() {
        assert_eq!(
            render_markdown("**bold** and *italic*\n- item"),
            r#"<strong>bold</strong> and <em>italic</em><br><li style="margin-left: 20px;">item</li>"#
        );
    }

    #[test]
    fn test_numbered_and_star_items() {
        assert_eq!(
            render_markdown("1. first\n* second\n10.  tenth"),
            concat!(
                r#"<li style="margin-left: 20px;">first</li><br>"#,
                r#"<li style="margin-left: 20px;">second</li><br>"#,
                r#"<li style="margin-left: 20px;">tenth</li>"#
            )
        );
    }

    #[test]
    fn test_non_greedy_spans() {
        assert_eq!(
            render_markdown("**a** x **b**"),
            "<strong>a</strong> x <strong>b</strong>"
        );
        assert_eq!(render_markdown("*a* *b*"), "<em>a</em> <em>b</em>");
    }

    #[test]
    fn test_spans_do_not_cross_lines() {
        assert_eq!(render_markdown("**open\nclose**"), "**open<br>close**");
    }

    #[test]
    fn test_list_marker_needs_space() {
        assert_eq!(render_markdown("-not a list"), "-not a list");
        assert_eq!(render_markdown("3.14 is pi"), "3.14 is pi");
    }

    #[test]
    fn test_html_is_not_escaped() {
        assert_eq!(render_markdown("<b>x</b>"), "<b>x</b>");
    }

    #[test]
    fn test_plain_text_and_empty_lines() {
        assert_eq!(render_markdown("hello"), "hello");
        assert_eq!(render_markdown("a\n\nb"), "a<br><br>b");
        assert_eq!(render_markdown(""), "");
    }

    #[test]
    fn test_provider_messages_verbatim() {
        for code in ErrorCode::ALL.into_iter().filter(|c| c.is_provider_failure()) {
            assert_eq!(
                format_error_message(code.as_str(), "exact words", Some(500)),
                "exact words"
            );
        }
    }

    #[test]
    fn test_other_codes_labelled() {
        assert_eq!(
            format_error_message("UNKNOWN_ERROR", "Something broke", Some(500)),
            "Error 500 - Something broke"
        );
        assert_eq!(
            format_error_message("EMPTY_MESSAGE", "Say something", Some(400)),
            "Error 400 - Say something"
        );
        assert_eq!(
            format_error_message("NOT_A_CODE", "odd", None),
            "Error - odd"
        );
    }
}
