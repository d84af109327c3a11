//! Component tree for pattern building
//!
//! This module defines the node types a caller assembles into a tree.
//! A tree is made of:
//! - Constants (fixed single-unit escape tokens such as `\d`)
//! - Literal text (escaped on rendering)
//! - Atoms (pre-escaped fragments handed over from the native engine)
//! - Blocks (containers: sequences, choices, captures, quantifiers)
//!
//! Each child belongs to exactly one parent and nodes never change after
//! construction, so rendering the same tree twice yields the same text.

use std::fmt;

use crate::escape::strip_delimiters;

/// A node in the component tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A fixed single-unit escape token
    Constant(Constant),

    /// Literal text, escaped when rendered
    Literal(String),

    /// A pre-escaped fragment embedded verbatim
    Atom(Atom),

    /// A container of further nodes
    Block(Block),
}

/// A fixed-length-1 atomic token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// Any whitespace (`\s`)
    Whitespace,
    /// Any digit (`\d`)
    Digit,
    /// Any word character (`\w`)
    Word,
    /// Any non-whitespace (`\S`)
    NotWhitespace,
    /// Any non-digit (`\D`)
    NotDigit,
    /// Any non-word character (`\W`)
    NotWord,
    /// Any character (`.`)
    AnyChar,
}

impl Constant {
    /// The escape token this constant renders to
    pub fn as_str(&self) -> &'static str {
        match self {
            Constant::Whitespace => "\\s",
            Constant::Digit => "\\d",
            Constant::Word => "\\w",
            Constant::NotWhitespace => "\\S",
            Constant::NotDigit => "\\D",
            Constant::NotWord => "\\W",
            Constant::AnyChar => ".",
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque, already-escaped pattern fragment
///
/// Atoms come from the native engine's own syntax and are embedded without
/// escaping. Their length cannot be measured, so a quantifier applied to an
/// atom always groups it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom(String);

impl Atom {
    /// Create an atom from a fragment used verbatim
    pub fn raw(source: impl Into<String>) -> Self {
        Atom(source.into())
    }

    /// Create an atom from delimited syntax such as `/[a-z]/i`
    ///
    /// One surrounding pair of `/` and any trailing modifier letters are
    /// stripped. Input without a delimiter pair is kept as is.
    pub fn from_delimited(source: &str) -> Self {
        Atom(strip_delimiters(source).to_string())
    }

    /// The fragment as embedded in the pattern
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<regex::Regex> for Atom {
    fn from(re: regex::Regex) -> Self {
        Atom(re.as_str().to_string())
    }
}

impl From<&regex::Regex> for Atom {
    fn from(re: &regex::Regex) -> Self {
        Atom(re.as_str().to_string())
    }
}

/// A container node with ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// What kind of container this is
    pub kind: BlockKind,
    /// Children in concatenation order
    pub children: Vec<Node>,
}

/// The kinds of container nodes
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    /// A regex body (root or nested), children concatenated
    Regex,

    /// A pass-through sequence, children concatenated
    One,

    /// Alternation between children
    ChoiceOf,

    /// A capturing group, optionally named
    Capture {
        /// Group name for `(?<name>...)`
        name: Option<String>,
    },

    /// A quantified body
    Quantifier(Quantifier),
}

/// Repetition applied to a block body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    /// Which repetition
    pub kind: QuantifierKind,
    /// Match as few repetitions as possible
    pub lazy: bool,
}

/// The repetition operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantifierKind {
    /// One or more (`+`)
    OneOrMore,
    /// Zero or more (`*`)
    ZeroOrMore,
    /// Zero or one (`?`)
    Optionally,
    /// Bounded repetition (`{n}`, `{n,m}`, `{n,}`)
    Repeat(RepeatBounds),
}

/// Validated bounds of a repeat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatBounds {
    /// Exactly `n` times
    Count(u32),
    /// Between `from` and `to` times, unbounded above when `to` is absent
    Range {
        /// Lower bound
        from: u32,
        /// Upper bound
        to: Option<u32>,
    },
}

impl Block {
    /// Create a block of the given kind
    pub fn new(kind: BlockKind, children: Vec<Node>) -> Self {
        Block { kind, children }
    }

    /// Syntax overhead this block adds to an enclosing length measure
    ///
    /// Plain containers add nothing, a capture adds one (its parentheses act
    /// as a single unit) and a quantifier adds two.
    pub fn own_length(&self) -> usize {
        match self.kind {
            BlockKind::Regex | BlockKind::One | BlockKind::ChoiceOf => 0,
            BlockKind::Capture { .. } => 1,
            BlockKind::Quantifier(_) => 2,
        }
    }

    /// Whether this block has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Constant> for Node {
    fn from(c: Constant) -> Self {
        Node::Constant(c)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Literal(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Literal(s)
    }
}

impl From<char> for Node {
    fn from(c: char) -> Self {
        Node::Literal(c.to_string())
    }
}

impl From<Atom> for Node {
    fn from(a: Atom) -> Self {
        Node::Atom(a)
    }
}

impl From<regex::Regex> for Node {
    fn from(re: regex::Regex) -> Self {
        Node::Atom(re.into())
    }
}

impl From<&regex::Regex> for Node {
    fn from(re: &regex::Regex) -> Self {
        Node::Atom(re.into())
    }
}

impl From<Block> for Node {
    fn from(b: Block) -> Self {
        Node::Block(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_tokens() {
        assert_eq!(Constant::Whitespace.as_str(), "\\s");
        assert_eq!(Constant::Digit.as_str(), "\\d");
        assert_eq!(Constant::Word.as_str(), "\\w");
        assert_eq!(Constant::NotDigit.to_string(), "\\D");
        assert_eq!(Constant::AnyChar.to_string(), ".");
    }

    #[test]
    fn test_own_length() {
        assert_eq!(Block::new(BlockKind::Regex, vec![]).own_length(), 0);
        assert_eq!(Block::new(BlockKind::One, vec![]).own_length(), 0);
        assert_eq!(Block::new(BlockKind::ChoiceOf, vec![]).own_length(), 0);
        assert_eq!(
            Block::new(BlockKind::Capture { name: None }, vec![]).own_length(),
            1
        );
        let q = Quantifier {
            kind: QuantifierKind::OneOrMore,
            lazy: false,
        };
        assert_eq!(Block::new(BlockKind::Quantifier(q), vec![]).own_length(), 2);
    }

    #[test]
    fn test_atom_from_delimited() {
        assert_eq!(Atom::from_delimited("/[a-z]/i").as_str(), "[a-z]");
        assert_eq!(Atom::from_delimited("/./").as_str(), ".");
        assert_eq!(Atom::from_delimited("[0-9]").as_str(), "[0-9]");
    }

    #[test]
    fn test_atom_from_native() {
        let re = regex::Regex::new(r"[\w.]").unwrap();
        assert_eq!(Atom::from(&re).as_str(), r"[\w.]");
    }

    #[test]
    fn test_node_conversions() {
        assert_eq!(Node::from("ab"), Node::Literal("ab".to_string()));
        assert_eq!(Node::from('x'), Node::Literal("x".to_string()));
        assert_eq!(Node::from(Constant::Digit), Node::Constant(Constant::Digit));
    }
}
