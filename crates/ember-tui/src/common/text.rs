//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Character drawn for each password character.
pub const MASK_CHAR: char = '•';

/// Truncates from the start so the end of the text stays visible
/// (unicode-aware). The cursor sits at the end of an input, so that is the
/// part worth keeping.
///
/// Returns the original string if it fits, or `…` followed by the tail.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut tail: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        tail.push(ch);
    }

    let mut truncated = String::from('…');
    truncated.extend(tail.into_iter().rev());
    truncated
}

/// Masks a secret for display, one mask glyph per character.
pub fn mask(secret: &str) -> String {
    std::iter::repeat_n(MASK_CHAR, secret.chars().count()).collect()
}
