//! Property-based tests for literal escaping and grouping
//!
//! These tests ensure that any literal text, once escaped and compiled,
//! matches exactly itself, and that quantifiers group exactly when the body
//! is not a single unit.

use proptest::prelude::*;
use regblock::{Atom, Options, escape_literal, one_or_more, regex, repeat};

/// Text drawn from printable ASCII with a heavy share of metacharacters
fn literal_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(vec![
                '-', '/', '\\', '^', '$', '*', '+', '?', '.', '(', ')', '|', '[', ']', '{', '}',
            ]),
            prop::char::range(' ', '~'),
        ],
        0..16,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn escaped_literal_matches_only_itself(text in literal_text()) {
        let re = regex![Atom::raw("^"), text.as_str(), Atom::raw("$")];
        let compiled = re.build().unwrap();

        prop_assert!(compiled.is_match(&text));
        let extended = format!("{}x", text);
        prop_assert!(!compiled.is_match(&extended));
    }

    #[test]
    fn escaping_only_adds_backslashes(text in literal_text()) {
        let escaped = escape_literal(&text);
        let unescaped: String = {
            let mut out = String::new();
            let mut chars = escaped.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    out.extend(chars.next());
                } else {
                    out.push(c);
                }
            }
            out
        };
        prop_assert_eq!(unescaped, text);
    }

    #[test]
    fn quantifier_groups_unless_single_char(text in literal_text()) {
        let rendered = one_or_more![text.as_str()].render();
        let escaped = escape_literal(&text);

        if text.chars().count() == 1 {
            prop_assert_eq!(rendered, format!("{}+", escaped));
        } else {
            prop_assert_eq!(rendered, format!("(?:{})+", escaped));
        }
    }

    #[test]
    fn repeat_accepts_ordered_bounds(from in 0u32..50, span in 0u32..50) {
        let to = from + span;
        let block = repeat![Options::new().from(from).to(to), "a"].unwrap();
        prop_assert_eq!(block.render(), format!("a{{{},{}}}", from, to));
    }

    #[test]
    fn repeat_rejects_inverted_bounds(to in 0u32..50, gap in 1u32..50) {
        let from = to + gap;
        prop_assert!(repeat![Options::new().from(from).to(to), "a"].is_err());
    }
}
