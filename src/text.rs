//! Column padding by terminal display width
//!
//! `format!("{:<30}")` counts chars, which misaligns names with wide or
//! combining characters. These helpers count display columns instead.

use unicode_width::UnicodeWidthStr;

/// Left-align `text` in a column of `width` display columns
pub fn pad_end(text: &str, width: usize) -> String {
    let used = text.width();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(used));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Right-align `text` in a column of `width` display columns
pub fn pad_start(text: &str, width: usize) -> String {
    let used = text.width();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(used));
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out.push_str(text);
    out
}

/// A line of `ch` repeated `width` times
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}
