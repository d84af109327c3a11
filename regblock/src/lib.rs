//! Regblock Core Library
//!
//! A composable builder for regex patterns. Callers assemble a tree of
//! named components (literals, choices, captures, quantifiers, sequences)
//! and the tree is rendered into a minimally-parenthesized pattern plus a
//! set of engine flags. Matching itself is delegated to the `regex` crate.
//!
//! ```
//! use regblock::{Constant, Options, capture, choice_of, one_or_more, optionally, regex};
//!
//! let re = regex![
//!     capture![Options::new().name("kind"), choice_of!["CREDIT", "DEBIT"]],
//!     optionally![one_or_more![Constant::Whitespace]],
//! ]
//! .ignores_case();
//!
//! assert_eq!(re.to_pattern(), "(?<kind>CREDIT|DEBIT)(?:\\s+)?");
//! let compiled = re.build().unwrap();
//! assert!(compiled.is_match("debit"));
//! ```

#[macro_use]
mod macros;

pub mod args;
pub mod ast;
pub mod builder;
pub mod engine;
pub mod error;
pub mod escape;
pub mod length;
pub mod render;
pub mod root;

pub use args::{Arg, Options, ParsedArgs, parse_args};
pub use ast::{Atom, Block, BlockKind, Constant, Node, Quantifier, QuantifierKind, RepeatBounds};
pub use engine::{CompiledRegex, Match, Span};
pub use error::{BuildError, RegexError, Result};
pub use escape::{escape_literal, strip_delimiters};
pub use length::Length;
pub use root::{Flag, Regex};

/// Render a tree and compile it with its flags
///
/// This is the main entry point once a tree has been built.
pub fn compile(re: &Regex) -> Result<CompiledRegex> {
    re.build()
}
