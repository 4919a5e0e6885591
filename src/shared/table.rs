//! Width-aware text helpers for terminal card output.
//!
//! Widths are display widths (CJK characters count as 2), not byte or char counts.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string to fit within the specified display width.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Pads or truncates a string to exactly the specified display width.
///
/// Longer strings are cut and end in "..." when there is room for it.
pub fn pad_or_truncate(s: &str, width: usize) -> String {
    let display_width = s.width();

    if display_width <= width {
        format!("{}{}", s, " ".repeat(width - display_width))
    } else if width < 3 {
        truncate_to_width(s, width)
    } else {
        let truncated = truncate_to_width(s, width - 3);
        // CJK chars may leave a one-column gap
        let padding = width.saturating_sub(truncated.width()).saturating_sub(3);
        format!("{}...{}", truncated, " ".repeat(padding))
    }
}

/// Greedy word wrap. Words wider than `width` are placed on their own line
/// and truncated.
pub fn wrap_to_width(s: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let word = if word.width() > width {
            truncate_to_width(word, width)
        } else {
            word.to_string()
        };

        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::ascii_short("hello", 10, "hello")]
    #[case::ascii_truncate("hello world", 5, "hello")]
    #[case::zero_width("hello", 0, "")]
    #[case::cjk_truncate("日本語", 4, "日本")]
    #[case::cjk_odd_width("日本語", 5, "日本")]
    fn test_truncate_to_width(
        #[case] input: &str,
        #[case] max_width: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(truncate_to_width(input, max_width), expected);
    }

    #[rstest]
    #[case::short("Rust", 8, "Rust    ")]
    #[case::exact("Rust", 4, "Rust")]
    #[case::truncate("Multiple languages", 8, "Multi...")]
    #[case::max_len_2("hello", 2, "he")]
    #[case::cjk_truncate("日本語テスト", 8, "日本... ")]
    fn test_pad_or_truncate(#[case] input: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(pad_or_truncate(input, width), expected);
    }

    #[rstest]
    #[case::fits("short text", 20, vec!["short text"])]
    #[case::wraps("one two three four", 9, vec!["one two", "three", "four"])]
    #[case::collapses_whitespace("  a   b  ", 10, vec!["a b"])]
    #[case::long_word("abcdefghij xy", 4, vec!["abcd", "xy"])]
    #[case::empty("", 10, vec![])]
    fn test_wrap_to_width(#[case] input: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(wrap_to_width(input, width), expected);
    }
}
