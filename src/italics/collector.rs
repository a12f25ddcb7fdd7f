use std::collections::HashSet;

use super::ItalicSpan;

/// Accumulates spans in discovery order, dropping repeated text.
#[derive(Debug, Default)]
pub struct ItalicCollector<'a> {
    spans: Vec<ItalicSpan<'a>>,
    seen: HashSet<&'a str>,
}

impl<'a> ItalicCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `span` unless identical text was already collected.
    ///
    /// Dedup is by text alone; the reason of the first occurrence wins.
    pub fn push(&mut self, span: ItalicSpan<'a>) -> bool {
        if !self.seen.insert(span.text) {
            tracing::trace!(
                text = span.text,
                reason = span.reason.as_str(),
                "duplicate span dropped"
            );
            return false;
        }
        self.spans.push(span);
        true
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn into_spans(self) -> Vec<ItalicSpan<'a>> {
        self.spans
    }

    /// Owned span texts, with reasons erased.
    pub fn into_strings(self) -> Vec<String> {
        self.spans
            .into_iter()
            .map(|span| span.text.to_string())
            .collect()
    }
}
