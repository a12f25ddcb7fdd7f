//! Titles of bulleted mode lists.
//!
//! A run of consecutive bullet lines forms one block. The block is a mode list
//! only when the non-bullet line just above the run introduces one: it either
//! ends in an em-dash (`Choose one —`) or contains a `choose` that names the
//! options itself (`..., choose Mirran or Phyrexian.`). Inside a mode list, a
//! bullet that opens with `Title — ` gets its title italicized, unless the
//! title is one of the options the introducing line already named in plain
//! text. Bullets outside a mode list get no title.

use std::ops::Range;

use crate::italics::header::header_phrase;
use crate::lines::Line;

const CHOOSE: &str = "choose ";

const EM_DASH: char = '—';

/// Byte offsets just past each word-bounded `choose ` in `text`.
fn chooser_ends(text: &str) -> Vec<usize> {
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    let mut ends = Vec::new();
    let mut search_from = 0usize;

    while let Some(found) = lower[search_from..].find(CHOOSE) {
        let start = search_from + found;
        search_from = start + CHOOSE.len();
        if !lower[..start]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric)
        {
            ends.push(search_from);
        }
    }

    ends
}

/// Whether `line` opens a mode list for the bullets below it.
pub fn introduces_mode_list(line: &Line<'_>) -> bool {
    !line.is_bullet()
        && (line.trimmed().ends_with(EM_DASH) || !chooser_ends(line.raw()).is_empty())
}

/// Options enumerated after each `choose` in `text`.
///
/// `"choose Khans or Dragons."` yields `["Khans", "Dragons"]`. The list ends at
/// sentence punctuation, a dash, or a parenthesis.
pub fn chooser_options(text: &str) -> Vec<&str> {
    let mut options = Vec::new();

    for end in chooser_ends(text) {
        let rest = &text[end..];
        let end = rest
            .find(['.', ';', ':', EM_DASH, '('])
            .unwrap_or(rest.len());
        for part in rest[..end].split(',') {
            for option in part.split(" or ").flat_map(|chunk| chunk.split(" and ")) {
                let option = option.trim();
                let option = option
                    .strip_prefix("or ")
                    .or_else(|| option.strip_prefix("and "))
                    .unwrap_or(option)
                    .trim();
                if !option.is_empty() && !options.contains(&option) {
                    options.push(option);
                }
            }
        }
    }

    options
}

/// Range of the mode title opening a bullet line, relative to the line.
///
/// Titles that restate one of `options` are plain text and yield `None`.
pub fn mode_title(line: &Line<'_>, options: &[&str]) -> Option<Range<usize>> {
    let body = line.bullet_body()?;
    let phrase = header_phrase(body)?;
    if options.contains(&phrase) {
        tracing::trace!(phrase, line = line.index(), "bullet restates a chooser option");
        return None;
    }
    let start = line.raw().len() - body.len();
    Some(start..start + phrase.len())
}

#[derive(Debug, Default)]
enum Block<'a> {
    #[default]
    Closed,
    ModeList(Vec<&'a str>),
    /// Bullets with no introducing line.
    Plain,
}

/// Follows bullet blocks while lines are visited in order.
#[derive(Debug, Default)]
pub struct ModeListTracker<'a> {
    previous: Option<Line<'a>>,
    block: Block<'a>,
}

impl<'a> ModeListTracker<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit the next line. For a bullet line inside a mode list, returns the
    /// chooser options of that list. Any other line yields `None`; a
    /// non-bullet line also closes the current block.
    pub fn advance(&mut self, line: &Line<'a>) -> Option<&[&'a str]> {
        let previous = self.previous.replace(*line);
        if !line.is_bullet() {
            self.block = Block::Closed;
            return None;
        }

        if matches!(self.block, Block::Closed) {
            self.block = match previous {
                Some(intro) if introduces_mode_list(&intro) => {
                    Block::ModeList(chooser_options(intro.raw()))
                }
                _ => {
                    tracing::trace!(line = line.index(), "bullets without a mode list intro");
                    Block::Plain
                }
            };
        }

        match &self.block {
            Block::ModeList(options) => Some(options.as_slice()),
            Block::Closed | Block::Plain => None,
        }
    }
}
