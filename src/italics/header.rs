//! `Phrase — ` headers at the start of a line.

use std::ops::Range;

use crate::lines::Line;
use crate::registry::AbilityWordRegistry;

/// Separator between a header phrase and the ability it labels.
pub const HEADER_SEPARATOR: &str = " — ";

/// Phrase of a `Phrase — ` header that starts exactly at the beginning of `text`.
///
/// The phrase runs up to the first separator. It must be non-empty, must not
/// start or end with whitespace, and must look like a label rather than prose:
/// no sentence period, parentheses, or quotes.
pub fn header_phrase(text: &str) -> Option<&str> {
    let idx = text.find(HEADER_SEPARATOR)?;
    let phrase = &text[..idx];
    if phrase.is_empty() || phrase.trim() != phrase {
        return None;
    }
    if phrase.contains(['.', '(', ')', '"', '“', '”']) {
        return None;
    }
    Some(phrase)
}

/// Range of the ability word heading `line`, if it is a registered one.
///
/// Bullet lines are left to the mode-title matcher.
pub fn ability_word(line: &Line<'_>, registry: &AbilityWordRegistry) -> Option<Range<usize>> {
    if line.is_bullet() {
        return None;
    }
    let phrase = header_phrase(line.raw())?;
    if !registry.contains(phrase) {
        tracing::trace!(phrase, line = line.index(), "header is not an ability word");
        return None;
    }
    Some(0..phrase.len())
}
