//! Line segmentation for rules text.
//!
//! Rules text arrives with every line break encoded as a single [`LINE_BREAK`]
//! character. Lines are borrowed slices of the input; nothing is copied or
//! normalized here, so byte offsets stay valid for the layout that consumes
//! the italic spans.

use std::borrow::Cow;

/// Reserved line separator in rules text.
pub const LINE_BREAK: char = '\r';

/// Leading glyph of a mode-list entry.
pub const BULLET: char = '•';

/// One logical line of rules text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    index: usize,
    offset: usize,
    raw: &'a str,
}

impl<'a> Line<'a> {
    /// Zero-based position of this line in the text.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of the first character of this line in the full text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Line content exactly as it appears between separators.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn trimmed(&self) -> &'a str {
        self.raw.trim()
    }

    /// Whether this line is an entry of a bulleted mode list.
    pub fn is_bullet(&self) -> bool {
        self.raw.starts_with(BULLET)
    }

    /// Text following the bullet glyph, or `None` for non-bullet lines.
    pub fn bullet_body(&self) -> Option<&'a str> {
        self.raw
            .strip_prefix(BULLET)
            .map(|body| body.trim_start())
    }
}

/// Split rules text into lines.
///
/// Empty text yields no lines. Empty lines between separators are kept so
/// that line indices always match the source.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut offset = 0usize;
    for (index, raw) in text.split(LINE_BREAK).enumerate() {
        lines.push(Line { index, offset, raw });
        offset += raw.len() + LINE_BREAK.len_utf8();
    }
    lines
}

/// Convert `\r\n` and `\n` line endings to [`LINE_BREAK`].
///
/// Callers must run exported text through this (or an equivalent) before
/// classification; header detection is anchored to line starts.
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains('\n') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\r").replace('\n', "\r"))
}

/// Line at `index`, if the text has that many lines.
pub fn line_at(text: &str, index: usize) -> Option<&str> {
    if text.is_empty() {
        return None;
    }
    text.split(LINE_BREAK).nth(index)
}

/// Drop the first `count` lines, returning the remainder as a slice.
pub fn strip_lines(text: &str, count: usize) -> &str {
    let mut rest = text;
    for _ in 0..count {
        match rest.find(LINE_BREAK) {
            Some(idx) => rest = &rest[idx + LINE_BREAK.len_utf8()..],
            None => return "",
        }
    }
    rest
}
