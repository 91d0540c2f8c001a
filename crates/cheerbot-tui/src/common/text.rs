//! Text utilities for TUI rendering.
//!
//! All widths are terminal columns (unicode-width), so emoji and CJK count
//! as two columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` columns.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Word-wraps `text` into lines no wider than `max_width` columns.
///
/// Words wider than the limit are split by character. Explicit newlines
/// start a new line. Always returns at least one line.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(!current.is_empty());

            if current_width + gap + word_width <= max_width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            // Hard-split an over-long word.
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > max_width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_long() {
        assert_eq!(truncate_with_ellipsis("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        let out = truncate_with_ellipsis("🎉🎉🎉", 4);
        assert_eq!(out, "🎉…");
        assert!(out.width() <= 4);
    }

    #[test]
    fn test_wrap_words_basic() {
        assert_eq!(
            wrap_words("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_words_fits_on_one_line() {
        assert_eq!(wrap_words("hi there", 20), vec!["hi there"]);
    }

    #[test]
    fn test_wrap_words_splits_long_word() {
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_words_respects_emoji_width() {
        let lines = wrap_words("vibes 🎉 only", 7);
        assert_eq!(lines, vec!["vibes", "🎉 only"]);
        assert!(lines.iter().all(|l| l.width() <= 7));
    }

    #[test]
    fn test_wrap_words_empty_text_yields_one_line() {
        assert_eq!(wrap_words("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_words_keeps_newlines() {
        assert_eq!(wrap_words("a\nb", 10), vec!["a", "b"]);
    }
}
