//! Root node carrying engine flags
//!
//! A [`Regex`] is a sequence block plus an ordered list of flags. Flags are
//! added through chained calls and kept in call order, duplicates included.

use std::fmt;

use crate::args::Arg;
use crate::ast::{Block, BlockKind, Node};
use crate::engine::CompiledRegex;
use crate::error::Result;

/// Engine matching modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Return every match instead of the first (`g`)
    Global,
    /// `^` and `$` match at line boundaries (`m`)
    Multiline,
    /// Case-insensitive matching (`i`)
    IgnoreCase,
    /// `.` also matches `\n` (`s`)
    DotAll,
}

impl Flag {
    /// The single-letter code of this flag
    pub fn code(&self) -> char {
        match self {
            Flag::Global => 'g',
            Flag::Multiline => 'm',
            Flag::IgnoreCase => 'i',
            Flag::DotAll => 's',
        }
    }
}

/// The root of a component tree
#[derive(Debug, Clone, PartialEq)]
pub struct Regex {
    body: Block,
    flags: Vec<Flag>,
}

impl Regex {
    /// Create a root over the given children with no flags
    pub fn new(children: Vec<Node>) -> Self {
        Regex {
            body: Block::new(BlockKind::Regex, children),
            flags: Vec::new(),
        }
    }

    /// The body block
    pub fn body(&self) -> &Block {
        &self.body
    }

    /// Flags in the order they were added
    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// Append a flag
    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    /// Match all occurrences (`g`)
    pub fn returns_all_matches(self) -> Self {
        self.with_flag(Flag::Global)
    }

    /// Make `^` and `$` match at line endings (`m`)
    pub fn anchors_match_line_endings(self) -> Self {
        self.with_flag(Flag::Multiline)
    }

    /// Ignore case (`i`)
    pub fn ignores_case(self) -> Self {
        self.with_flag(Flag::IgnoreCase)
    }

    /// Let `.` match newlines (`s`)
    pub fn dot_matches_newlines(self) -> Self {
        self.with_flag(Flag::DotAll)
    }

    /// The flag codes joined in order, e.g. `"gmi"`
    pub fn flags_string(&self) -> String {
        self.flags.iter().map(Flag::code).collect()
    }

    /// The pattern body
    pub fn to_pattern(&self) -> String {
        self.body.render()
    }

    /// The pattern in `/body/flags` form
    pub fn to_delimited(&self) -> String {
        format!("/{}/{}", self.to_pattern(), self.flags_string())
    }

    /// Compile the pattern with the native engine
    ///
    /// # Errors
    /// Returns [`crate::RegexError::Syntax`] if the engine rejects the
    /// rendered body.
    pub fn build(&self) -> Result<CompiledRegex> {
        CompiledRegex::new(&self.to_pattern(), &self.flags)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pattern())
    }
}

/// A nested root contributes its body only; its flags are dropped
impl From<Regex> for Node {
    fn from(re: Regex) -> Self {
        Node::Block(re.body)
    }
}

impl From<Regex> for Arg {
    fn from(re: Regex) -> Self {
        Arg::Node(re.into())
    }
}
