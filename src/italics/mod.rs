//! Italic span detection for rules text.
//!
//! Three matchers run over each line of the text:
//!
//! - [`reminder`]: parenthesized reminder text, anywhere on a line.
//! - [`header`]: a registered ability word heading a line (`Landfall — ...`).
//! - [`modes`]: the title of a bullet in a mode list (`• Khans — ...`).
//!
//! Lines are visited in order. Within a line, reminder spans come first, left
//! to right, then the header or title. [`ItalicCollector`] drops repeated
//! text, so the result lists each italic string once, in first-seen order.
//!
//! Text must use `'\r'` line breaks (see [`crate::lines::normalize_line_breaks`]).
//! Text with no separators is one line, so headers past its start go unseen.

pub mod collector;
pub mod header;
pub mod modes;
pub mod reminder;

use std::ops::Range;

pub use collector::ItalicCollector;

use crate::lines::{Line, split_lines};
use crate::registry::AbilityWordRegistry;
use modes::ModeListTracker;

/// Why a span is italicized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum ItalicReason {
    Reminder,
    AbilityWord,
    ModeTitle,
}

impl ItalicReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ItalicReason::Reminder => "reminder",
            ItalicReason::AbilityWord => "ability_word",
            ItalicReason::ModeTitle => "mode_title",
        }
    }
}

/// A substring of the input to be rendered in italics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct ItalicSpan<'a> {
    pub text: &'a str,
    /// Byte offset of `text` in the full input.
    pub offset: usize,
    pub reason: ItalicReason,
}

impl<'a> ItalicSpan<'a> {
    fn from_line(line: &Line<'a>, range: Range<usize>, reason: ItalicReason) -> Self {
        Self {
            offset: line.offset() + range.start,
            text: &line.raw()[range],
            reason,
        }
    }
}

/// Classifier bound to one ability word registry.
///
/// Holds only a shared borrow, so a single engine can serve any number of
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct ItalicsEngine<'r> {
    registry: &'r AbilityWordRegistry,
}

impl ItalicsEngine<'static> {
    /// Engine over the bundled ability word list.
    pub fn bundled() -> Self {
        Self::new(AbilityWordRegistry::bundled())
    }
}

impl<'r> ItalicsEngine<'r> {
    pub fn new(registry: &'r AbilityWordRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r AbilityWordRegistry {
        self.registry
    }

    /// Italic spans of `text`, tagged and deduplicated.
    pub fn spans<'t>(&self, text: &'t str) -> Vec<ItalicSpan<'t>> {
        self.collect(text).into_spans()
    }

    /// Strings of `text` to italicize, in first-occurrence order.
    pub fn italics(&self, text: &str) -> Vec<String> {
        self.collect(text).into_strings()
    }

    fn collect<'t>(&self, text: &'t str) -> ItalicCollector<'t> {
        let lines = split_lines(text);
        let mut collector = ItalicCollector::new();
        let mut mode_lists = ModeListTracker::new();

        for line in &lines {
            for range in reminder::reminder_ranges(line.raw()) {
                collector.push(ItalicSpan::from_line(line, range, ItalicReason::Reminder));
            }

            let heading = match mode_lists.advance(line) {
                Some(options) => modes::mode_title(line, options)
                    .map(|range| (range, ItalicReason::ModeTitle)),
                None => header::ability_word(line, self.registry)
                    .map(|range| (range, ItalicReason::AbilityWord)),
            };
            if let Some((range, reason)) = heading {
                let span = ItalicSpan::from_line(line, range, reason);
                tracing::trace!(
                    text = span.text,
                    line = line.index(),
                    reason = reason.as_str(),
                    "heading span"
                );
                collector.push(span);
            }
        }

        tracing::debug!(lines = lines.len(), spans = collector.len(), "classified rules text");
        collector
    }
}

/// Strings of `text` to italicize, using `registry` for ability words.
pub fn generate_italics(text: &str, registry: &AbilityWordRegistry) -> Vec<String> {
    ItalicsEngine::new(registry).italics(text)
}
