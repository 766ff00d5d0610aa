//! Pure text helpers and dimensional constants for the InputBox.
//!
//! Byte offsets are always on char boundaries; widths are terminal columns
//! as measured by `unicode-width` (Hangul syllables take two).

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Border (2) + padding (2) consumed horizontally by the bordered field
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from area edge to content (border + padding)
pub(super) const CONTENT_OFFSET: u16 = 2;

/// Content width of a field drawn `field_width` columns wide.
pub(super) fn inner_width(field_width: u16) -> u16 {
    field_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Display width of `text[..pos]`, saturating at `u16::MAX`.
pub(super) fn width_before(text: &str, pos: usize) -> u16 {
    u16::try_from(text[..pos].width()).unwrap_or(u16::MAX)
}

/// The first column at or after `col` where a character of `text` starts.
///
/// Columns past the end of the text snap to its total width.
pub(super) fn snap_to_char_start(text: &str, col: u16) -> u16 {
    let target = usize::from(col);
    let mut start = 0usize;
    for c in text.chars() {
        if start >= target {
            break;
        }
        start += c.width().unwrap_or(0);
    }
    u16::try_from(start).unwrap_or(u16::MAX)
}

/// The part of `text` that fits in `width` columns after skipping `skip` columns.
///
/// A wide character straddling either edge is left out rather than cut.
pub(super) fn visible_slice(text: &str, skip: u16, width: u16) -> &str {
    let (skip, width) = (skip as usize, width as usize);
    let mut col = 0;
    let mut start = text.len();
    let mut end = text.len();

    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if start == text.len() && col >= skip {
            start = i;
        }
        if start != text.len() && col + w > skip + width {
            end = i;
            break;
        }
        col += w;
    }

    if start > end { "" } else { &text[start..end] }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte offset of the previous word start before `pos` (readline `backward-word`).
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let trimmed = text[..pos].trim_end_matches(|c: char| !is_word_char(c));
    trimmed
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_word_char(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

/// Byte offset just past the next word after `pos` (readline `forward-word`).
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let after = &text[pos..];
    let word_start = after
        .char_indices()
        .find(|&(_, c)| is_word_char(c))
        .map(|(i, _)| i)
        .unwrap_or(after.len());
    after[word_start..]
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map(|(i, _)| pos + word_start + i)
        .unwrap_or(text.len())
}
