//! Argument normalization for builder calls
//!
//! Builders accept a loose list of arguments so call sites can be written in
//! whichever shape reads best:
//! - `[children]`
//! - `options, [children]`
//! - `options, child, child, ...`
//! - `child, child, ...`
//!
//! [`parse_args`] resolves the list into an options record and an ordered
//! child list. The first matching shape wins:
//! 1. leading options followed by a child list: options and that list
//! 2. leading options: options and every remaining argument as a child
//! 3. leading child list: that list, default options
//! 4. anything else: default options, every argument as a child
//!
//! Under shapes 1 and 3 arguments after the list are ignored. Under shapes 2
//! and 4 child lists are spliced in place and an options record in any
//! position other than the first contributes nothing.

use crate::ast::{Atom, Block, Constant, Node};

/// Per-call options record
///
/// Which fields matter depends on the builder: `name` for captures, `lazy`
/// for quantifiers, `count`/`from`/`to` for repeats. Bounds are kept as
/// plain numbers so that [`crate::builder::repeat`] can reject negative or
/// fractional input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Capture group name
    pub name: Option<String>,
    /// Reluctant matching for quantifiers
    pub lazy: bool,
    /// Exact repetition count
    pub count: Option<f64>,
    /// Lower repetition bound
    pub from: Option<f64>,
    /// Upper repetition bound
    pub to: Option<f64>,
}

impl Options {
    /// Create an empty options record
    pub fn new() -> Self {
        Options::default()
    }

    /// Set the capture group name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Make the quantifier reluctant
    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    /// Set the exact repetition count
    pub fn count(mut self, count: impl Into<f64>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Set the lower repetition bound
    pub fn from(mut self, from: impl Into<f64>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the upper repetition bound
    pub fn to(mut self, to: impl Into<f64>) -> Self {
        self.to = Some(to.into());
        self
    }
}

/// One argument of a builder call
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// An options record
    Options(Options),
    /// An explicit child list
    Children(Vec<Node>),
    /// A single child
    Node(Node),
}

/// Result of argument normalization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArgs {
    /// Resolved options (default when none were given)
    pub options: Options,
    /// Resolved children in order
    pub children: Vec<Node>,
}

/// Resolve a builder argument list into options and children
pub fn parse_args(args: Vec<Arg>) -> ParsedArgs {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return ParsedArgs::default();
    };

    match first {
        Arg::Options(options) => match args.next() {
            Some(Arg::Children(children)) => ParsedArgs { options, children },
            second => ParsedArgs {
                options,
                children: splice(second.into_iter().chain(args)),
            },
        },
        Arg::Children(children) => ParsedArgs {
            options: Options::default(),
            children,
        },
        node @ Arg::Node(_) => ParsedArgs {
            options: Options::default(),
            children: splice(std::iter::once(node).chain(args)),
        },
    }
}

fn splice(args: impl Iterator<Item = Arg>) -> Vec<Node> {
    let mut children = Vec::new();
    for arg in args {
        match arg {
            Arg::Node(node) => children.push(node),
            Arg::Children(nodes) => children.extend(nodes),
            Arg::Options(_) => {}
        }
    }
    children
}

impl From<Options> for Arg {
    fn from(options: Options) -> Self {
        Arg::Options(options)
    }
}

impl From<Node> for Arg {
    fn from(node: Node) -> Self {
        Arg::Node(node)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Arg {
    fn from(children: Vec<T>) -> Self {
        Arg::Children(children.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>, const N: usize> From<[T; N]> for Arg {
    fn from(children: [T; N]) -> Self {
        Arg::Children(children.into_iter().map(Into::into).collect())
    }
}

impl From<Block> for Arg {
    fn from(block: Block) -> Self {
        Arg::Node(block.into())
    }
}

impl From<Constant> for Arg {
    fn from(c: Constant) -> Self {
        Arg::Node(c.into())
    }
}

impl From<Atom> for Arg {
    fn from(atom: Atom) -> Self {
        Arg::Node(atom.into())
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Node(s.into())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Node(s.into())
    }
}

impl From<char> for Arg {
    fn from(c: char) -> Self {
        Arg::Node(c.into())
    }
}

impl From<regex::Regex> for Arg {
    fn from(re: regex::Regex) -> Self {
        Arg::Node(re.into())
    }
}

impl From<&regex::Regex> for Arg {
    fn from(re: &regex::Regex) -> Self {
        Arg::Node(re.into())
    }
}
