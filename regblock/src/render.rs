//! Serialization of a component tree into pattern text
//!
//! Each child is turned into a fragment (literals escaped, atoms embedded
//! verbatim, blocks rendered recursively) and the fragments are joined
//! according to the parent's kind.

use crate::ast::{Block, BlockKind, Node, Quantifier, QuantifierKind, RepeatBounds};
use crate::escape::escape_literal;

impl Node {
    /// Render this node as pattern text
    pub fn render(&self) -> String {
        match self {
            Node::Constant(c) => c.as_str().to_string(),
            Node::Literal(text) => escape_literal(text),
            Node::Atom(atom) => atom.as_str().to_string(),
            Node::Block(block) => block.render(),
        }
    }
}

impl Block {
    /// Rendered children, in order
    pub fn fragments(&self) -> Vec<String> {
        self.children.iter().map(Node::render).collect()
    }

    /// Render this block as pattern text
    pub fn render(&self) -> String {
        let fragments = self.fragments();
        match &self.kind {
            BlockKind::Regex | BlockKind::One => fragments.concat(),
            BlockKind::ChoiceOf => fragments.join("|"),
            BlockKind::Capture { name: Some(name) } => {
                format!("(?<{}>{})", name, fragments.concat())
            }
            BlockKind::Capture { name: None } => format!("({})", fragments.concat()),
            BlockKind::Quantifier(q) => {
                format!("{}{}", self.wrap(&fragments.concat()), q.suffix())
            }
        }
    }
}

impl Quantifier {
    /// The operator text appended after the body
    pub fn suffix(&self) -> String {
        let mut out = match self.kind {
            QuantifierKind::OneOrMore => "+".to_string(),
            QuantifierKind::ZeroOrMore => "*".to_string(),
            QuantifierKind::Optionally => "?".to_string(),
            QuantifierKind::Repeat(RepeatBounds::Count(n)) => format!("{{{}}}", n),
            QuantifierKind::Repeat(RepeatBounds::Range { from, to: Some(to) }) => {
                format!("{{{},{}}}", from, to)
            }
            QuantifierKind::Repeat(RepeatBounds::Range { from, to: None }) => {
                format!("{{{},}}", from)
            }
        };
        if self.lazy {
            out.push('?');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Atom, Constant};

    fn quantified(kind: QuantifierKind, lazy: bool, children: Vec<Node>) -> Block {
        Block::new(BlockKind::Quantifier(Quantifier { kind, lazy }), children)
    }

    #[test]
    fn test_render_sequence() {
        let block = Block::new(
            BlockKind::Regex,
            vec!["a".into(), Constant::Digit.into(), "b".into()],
        );
        assert_eq!(block.render(), "a\\db");
    }

    #[test]
    fn test_render_empty_sequence() {
        assert_eq!(Block::new(BlockKind::One, vec![]).render(), "");
    }

    #[test]
    fn test_render_choice() {
        let block = Block::new(BlockKind::ChoiceOf, vec!["CREDIT".into(), "DEBIT".into()]);
        assert_eq!(block.render(), "CREDIT|DEBIT");
    }

    #[test]
    fn test_render_capture() {
        let named = Block::new(
            BlockKind::Capture {
                name: Some("x".to_string()),
            },
            vec!["a".into()],
        );
        assert_eq!(named.render(), "(?<x>a)");

        let unnamed = Block::new(BlockKind::Capture { name: None }, vec!["a".into()]);
        assert_eq!(unnamed.render(), "(a)");
    }

    #[test]
    fn test_render_escapes_literals() {
        let block = Block::new(BlockKind::Regex, vec!["a.b".into(), "(c)".into()]);
        assert_eq!(block.render(), "a\\.b\\(c\\)");
    }

    #[test]
    fn test_render_atom_verbatim() {
        let block = Block::new(BlockKind::Regex, vec![Atom::from_delimited("/[\\w.]/").into()]);
        assert_eq!(block.render(), "[\\w.]");
    }

    #[test]
    fn test_quantifier_suffixes() {
        let digit = || vec![Node::from(Constant::Digit)];
        assert_eq!(
            quantified(QuantifierKind::OneOrMore, false, digit()).render(),
            "\\d+"
        );
        assert_eq!(
            quantified(QuantifierKind::ZeroOrMore, false, digit()).render(),
            "\\d*"
        );
        assert_eq!(
            quantified(QuantifierKind::Optionally, false, digit()).render(),
            "\\d?"
        );
        assert_eq!(
            quantified(QuantifierKind::Repeat(RepeatBounds::Count(4)), false, digit()).render(),
            "\\d{4}"
        );
        assert_eq!(
            quantified(
                QuantifierKind::Repeat(RepeatBounds::Range {
                    from: 1,
                    to: Some(3)
                }),
                false,
                digit()
            )
            .render(),
            "\\d{1,3}"
        );
        assert_eq!(
            quantified(
                QuantifierKind::Repeat(RepeatBounds::Range { from: 2, to: None }),
                false,
                digit()
            )
            .render(),
            "\\d{2,}"
        );
    }

    #[test]
    fn test_zero_bounds_render_explicitly() {
        let q = Quantifier {
            kind: QuantifierKind::Repeat(RepeatBounds::Count(0)),
            lazy: false,
        };
        assert_eq!(q.suffix(), "{0}");
        let q = Quantifier {
            kind: QuantifierKind::Repeat(RepeatBounds::Range {
                from: 0,
                to: Some(0),
            }),
            lazy: false,
        };
        assert_eq!(q.suffix(), "{0,0}");
    }

    #[test]
    fn test_lazy_suffix() {
        let block = quantified(QuantifierKind::ZeroOrMore, true, vec![Atom::raw(".").into()]);
        assert_eq!(block.render(), "(?:.)*?");

        let q = Quantifier {
            kind: QuantifierKind::Repeat(RepeatBounds::Range {
                from: 1,
                to: Some(2),
            }),
            lazy: true,
        };
        assert_eq!(q.suffix(), "{1,2}?");
    }

    #[test]
    fn test_quantifier_groups_multi_char_body() {
        let block = quantified(QuantifierKind::OneOrMore, false, vec!["ab".into()]);
        assert_eq!(block.render(), "(?:ab)+");
    }

    #[test]
    fn test_quantifier_keeps_escaped_single_char() {
        let block = quantified(QuantifierKind::OneOrMore, false, vec![".".into()]);
        assert_eq!(block.render(), "\\.+");
    }

    #[test]
    fn test_nested_choice_in_quantifier() {
        let choice = Block::new(BlockKind::ChoiceOf, vec!["a".into(), "b".into()]);
        let block = quantified(QuantifierKind::ZeroOrMore, false, vec![choice.into()]);
        assert_eq!(block.render(), "(?:a|b)*");
    }

    #[test]
    fn test_render_is_repeatable() {
        let block = quantified(QuantifierKind::OneOrMore, false, vec!["ab".into()]);
        assert_eq!(block.render(), block.render());
    }
}
