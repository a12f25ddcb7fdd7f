//! Parenthesized reminder text.

use std::ops::Range;

struct OpenParen {
    start: usize,
    closed_inside: Vec<Range<usize>>,
}

/// Byte ranges of the parenthesized spans in `text`, left to right.
///
/// Each range includes its parentheses. Only the outermost span of a nested
/// group is reported. A `(` that never closes yields nothing itself, but the
/// balanced pairs inside it are still reported; a stray `)` is skipped.
pub fn reminder_ranges(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut open: Vec<OpenParen> = Vec::new();

    for (idx, byte) in text.bytes().enumerate() {
        match byte {
            b'(' => open.push(OpenParen {
                start: idx,
                closed_inside: Vec::new(),
            }),
            b')' => {
                let Some(paren) = open.pop() else {
                    continue;
                };
                let range = paren.start..idx + 1;
                match open.last_mut() {
                    Some(parent) => parent.closed_inside.push(range),
                    None => spans.push(range),
                }
            }
            _ => {}
        }
    }

    // Unclosed parentheses: fall back to the balanced pairs they contain.
    let mut orphans: Vec<Range<usize>> = open
        .into_iter()
        .flat_map(|paren| paren.closed_inside)
        .collect();
    orphans.sort_by_key(|range| range.start);
    spans.extend(orphans);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<&str> {
        reminder_ranges(text)
            .into_iter()
            .map(|range| &text[range])
            .collect()
    }

    #[test]
    fn no_parentheses_no_spans() {
        assert!(spans("Flying, vigilance").is_empty());
        assert!(spans("").is_empty());
    }

    #[test]
    fn multiple_spans_on_one_line_in_order() {
        assert_eq!(
            spans("Ward {2} (Counter it.) and Prowess (Whenever you cast.)"),
            vec!["(Counter it.)", "(Whenever you cast.)"]
        );
    }

    #[test]
    fn quotes_inside_reminder_are_verbatim() {
        let text = "Create a Food token. (It's an artifact with \"{2}, {T}, Sacrifice this artifact: You gain 3 life.\")";
        assert_eq!(
            spans(text),
            vec!["(It's an artifact with \"{2}, {T}, Sacrifice this artifact: You gain 3 life.\")"]
        );
    }

    #[test]
    fn typographic_quotes_have_no_meaning() {
        assert_eq!(
            spans("(It has “{T}: Add {C}.”)"),
            vec!["(It has “{T}: Add {C}.”)"]
        );
    }

    #[test]
    fn unclosed_parenthesis_yields_nothing() {
        assert!(spans("Draw a card. (Unfinished reminder").is_empty());
        assert_eq!(spans("(Done.) then (open"), vec!["(Done.)"]);
    }

    #[test]
    fn stray_closing_parenthesis_is_skipped() {
        assert_eq!(spans("oops) (Fine.)"), vec!["(Fine.)"]);
    }

    #[test]
    fn nested_group_reports_outermost_span() {
        assert_eq!(spans("(Outer (inner) tail)"), vec!["(Outer (inner) tail)"]);
    }

    #[test]
    fn pairs_inside_unclosed_parenthesis_survive() {
        assert_eq!(spans("(Open (a) and (b) never closes"), vec!["(a)", "(b)"]);
    }
}
