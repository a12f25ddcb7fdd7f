//! Reminder-text utilities built on the reminder matcher.

use crate::italics::reminder::reminder_ranges;
use crate::lines::{LINE_BREAK, split_lines};

/// Remove reminder text from `text`.
///
/// Doubled spaces left behind are collapsed, and lines that held nothing but
/// reminder text are dropped. If nothing would remain, `text` is returned as
/// is: a card whose rules text is only reminder text keeps it.
pub fn strip_reminder_text(text: &str) -> String {
    if !text.contains('(') {
        return text.to_string();
    }

    let mut kept: Vec<String> = Vec::new();
    for line in split_lines(text) {
        let raw = line.raw();
        let ranges = reminder_ranges(raw);
        if ranges.is_empty() {
            kept.push(raw.to_string());
            continue;
        }

        let mut stripped = String::with_capacity(raw.len());
        let mut cursor = 0usize;
        for range in ranges {
            stripped.push_str(&raw[cursor..range.start]);
            cursor = range.end;
        }
        stripped.push_str(&raw[cursor..]);

        let collapsed = collapse_spaces(&stripped);
        if !collapsed.is_empty() {
            kept.push(collapsed);
        }
    }

    let separator = LINE_BREAK.to_string();
    let joined = kept.join(separator.as_str());
    if joined.trim().is_empty() {
        text.to_string()
    } else {
        joined
    }
}

fn collapse_spaces(line: &str) -> String {
    line.split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reminder span that ends `text`, ignoring trailing whitespace.
pub fn trailing_reminder(text: &str) -> Option<&str> {
    let trimmed = text.trim_end();
    let last_line = trimmed.rsplit(LINE_BREAK).next()?;
    reminder_ranges(last_line)
        .into_iter()
        .rev()
        .find(|range| range.end == last_line.len())
        .map(|range| &last_line[range])
}

/// Reminder text shared by the end of every face of a multi-face card.
///
/// Split and fuse cards print one reminder across both halves; it is `None`
/// unless every face ends with the identical parenthetical.
pub fn shared_trailing_reminder<'a>(faces: &[&'a str]) -> Option<&'a str> {
    let mut shared: Option<&'a str> = None;
    for &face in faces {
        let current = trailing_reminder(face)?;
        match shared {
            Some(previous) if previous != current => return None,
            _ => shared = Some(current),
        }
    }
    shared
}

/// `text` with a trailing `reminder` removed, if it ends with one.
pub fn strip_trailing_reminder<'a>(text: &'a str, reminder: &str) -> &'a str {
    text.trim_end()
        .strip_suffix(reminder)
        .map(str::trim_end)
        .unwrap_or(text)
}

/// Faces of a multi-face card with their shared trailing reminder lifted out.
///
/// The reminder is printed once for the whole card, so each returned face ends
/// before it. A single face, or faces that disagree, come back unchanged.
pub fn split_shared_reminder<'a>(faces: &[&'a str]) -> (Vec<&'a str>, Option<&'a str>) {
    let shared = match faces {
        [_, _, ..] => shared_trailing_reminder(faces),
        _ => None,
    };
    let faces = match shared {
        Some(reminder) => faces
            .iter()
            .map(|&face| strip_trailing_reminder(face, reminder))
            .collect(),
        None => faces.to_vec(),
    };
    (faces, shared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_reminders_is_unchanged() {
        assert_eq!(strip_reminder_text("Flying\rVigilance"), "Flying\rVigilance");
    }

    #[test]
    fn strips_inline_and_whole_line_reminders() {
        let text = "Flying\rWard {2} (Whenever this becomes the target, counter it unless its controller pays {2}.)\r(This is a reminder line.)\rDraw a card.";
        assert_eq!(strip_reminder_text(text), "Flying\rWard {2}\rDraw a card.");
    }

    #[test]
    fn collapses_spaces_left_mid_line() {
        assert_eq!(
            strip_reminder_text("Cycling {2} (Discard it.) and more"),
            "Cycling {2} and more"
        );
    }

    #[test]
    fn reminder_only_text_is_kept() {
        let text = "({T}: Add {G}.)";
        assert_eq!(strip_reminder_text(text), text);
    }

    #[test]
    fn unbalanced_parenthesis_is_left_alone() {
        assert_eq!(strip_reminder_text("Draw (oops"), "Draw (oops");
    }

    #[test]
    fn trailing_reminder_requires_span_at_end() {
        assert_eq!(
            trailing_reminder("Deal 2 damage.\rFuse (You may cast one or both halves.)\r"),
            Some("(You may cast one or both halves.)")
        );
        assert_eq!(trailing_reminder("(Early.) Then draw."), None);
        assert_eq!(trailing_reminder(""), None);
    }

    #[test]
    fn shared_reminder_across_faces() {
        let fuse = "(You may cast one or both halves of this card from your hand.)";
        let left = format!("Target creature gets +2/+2.\r{fuse}");
        let right = format!("Draw a card.\r{fuse}");
        assert_eq!(shared_trailing_reminder(&[left.as_str(), right.as_str()]), Some(fuse));
        assert_eq!(strip_trailing_reminder(&left, fuse), "Target creature gets +2/+2.");
    }

    #[test]
    fn shared_reminder_requires_agreement() {
        assert_eq!(shared_trailing_reminder(&["A (x)", "B (y)"]), None);
        assert_eq!(shared_trailing_reminder(&["A (x)", "B"]), None);
        assert_eq!(shared_trailing_reminder(&[]), None);
    }

    #[test]
    fn strip_trailing_reminder_without_match_is_identity() {
        assert_eq!(strip_trailing_reminder("Draw a card.", "(x)"), "Draw a card.");
    }

    #[test]
    fn split_shared_reminder_lifts_fuse_text() {
        let fuse = "(You may cast one or both halves of this card from your hand.)";
        let left = format!("Target creature gets +2/+2.\r{fuse}");
        let right = format!("Draw a card.\r{fuse}");
        let (faces, shared) = split_shared_reminder(&[left.as_str(), right.as_str()]);
        assert_eq!(shared, Some(fuse));
        assert_eq!(faces, vec!["Target creature gets +2/+2.", "Draw a card."]);
    }

    #[test]
    fn split_shared_reminder_keeps_single_face() {
        let face = "Flash (You may cast this spell any time you could cast an instant.)";
        let (faces, shared) = split_shared_reminder(&[face]);
        assert_eq!(shared, None);
        assert_eq!(faces, vec![face]);
    }

    #[test]
    fn split_shared_reminder_keeps_disagreeing_faces() {
        let (faces, shared) = split_shared_reminder(&["A (x)", "B (y)"]);
        assert_eq!(shared, None);
        assert_eq!(faces, vec!["A (x)", "B (y)"]);
    }
}
