//! # TUI Components
//!
//! Both components are stateless, props-based panels that size themselves
//! to their content:
//!
//! - `WordCard`: the term, its definition and a footer line
//! - `ErrorPanel`: shown when no word could be picked
//!
//! `CardHitbox` is the one piece of state that survives between frames: the
//! screen rows the term was last drawn on, for click-to-pronounce.

use unicode_width::UnicodeWidthStr;

pub mod error_panel;
pub mod word_card;

pub use error_panel::ErrorPanel;
pub use word_card::{CardEvent, CardHitbox, Footer, WordCard};

/// Columns taken by the border (1 + 1) and horizontal padding (1 + 1).
pub(crate) const CHROME_WIDTH: u16 = 4;
/// Rows taken by the top and bottom border.
pub(crate) const CHROME_HEIGHT: u16 = 2;

/// Wrap `text` to `width` columns. Always yields at least one line so empty
/// text still occupies a row.
pub(crate) fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let lines: Vec<String> = textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Clamp a line or column count to what a terminal can address.
pub(crate) fn to_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Display width of the widest line.
pub(crate) fn content_width<'a>(lines: impl Iterator<Item = &'a String>) -> usize {
    lines.map(|l| l.as_str().width()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_lines_breaks_on_words() {
        assert_eq!(
            wrap_lines("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_lines_empty_text() {
        assert_eq!(wrap_lines("", 10), vec![String::new()]);
    }

    #[test]
    fn test_content_width_counts_columns() {
        let lines = vec!["abc".to_string(), "日本語".to_string()];
        // CJK characters are two columns wide
        assert_eq!(content_width(lines.iter()), 6);
    }

    #[test]
    fn test_to_cells_saturates() {
        assert_eq!(to_cells(12), 12);
        assert_eq!(to_cells(70_000), u16::MAX);
    }
}
