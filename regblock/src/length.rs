//! Length measure used to decide grouping
//!
//! A quantifier suffix binds to the single unit immediately before it, so a
//! block body has to be wrapped in `(?:...)` unless it is exactly one child
//! measuring exactly one unit. The measure is recursive: a nested block
//! contributes its own syntax overhead plus the sum of its children.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::ast::{Block, Node};

/// Measured length of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// A known number of units
    Finite(usize),
    /// Not measurable (native fragments, empty literals)
    Unbounded,
}

impl Length {
    /// Whether this length is exactly one unit
    pub fn is_single(&self) -> bool {
        *self == Length::Finite(1)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        match (self, rhs) {
            (Length::Finite(a), Length::Finite(b)) => Length::Finite(a.saturating_add(b)),
            _ => Length::Unbounded,
        }
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Length {
        iter.fold(Length::Finite(0), Add::add)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Finite(n) => write!(f, "{}", n),
            Length::Unbounded => f.write_str("unbounded"),
        }
    }
}

impl Node {
    /// Total contribution of this node to its parent's body length
    pub fn length(&self) -> Length {
        match self {
            Node::Constant(_) => Length::Finite(1),
            // An empty branch would let a quantifier bind to `|`.
            Node::Literal(text) if text.is_empty() => Length::Unbounded,
            // Measured before escaping: `\.` still stands for one character.
            Node::Literal(text) => Length::Finite(text.chars().count()),
            Node::Atom(_) => Length::Unbounded,
            Node::Block(block) => Length::Finite(block.own_length()) + block.body_length(),
        }
    }
}

impl Block {
    /// Sum of the children's contributions
    pub fn body_length(&self) -> Length {
        self.children.iter().map(Node::length).sum()
    }

    /// Whether the rendered body needs a non-capturing group
    pub fn needs_group(&self) -> bool {
        !(self.children.len() == 1 && self.body_length().is_single())
    }

    /// Wrap `body` in `(?:...)` when [`Block::needs_group`] says so
    pub fn wrap(&self, body: &str) -> String {
        if self.needs_group() {
            format!("(?:{})", body)
        } else {
            body.to_string()
        }
    }
}
