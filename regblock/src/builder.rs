//! Builder functions, one per node kind
//!
//! Every builder takes a loose argument list (see [`crate::args`]) and
//! returns the matching node. Only [`repeat`] validates its options.
//!
//! # Example
//! ```
//! use regblock::{Arg, Constant, Options, builder};
//!
//! let re = builder::regex(vec![
//!     Arg::from(builder::capture(vec![
//!         Options::new().name("kind").into(),
//!         Arg::from(builder::choice_of(vec!["CREDIT".into(), "DEBIT".into()])),
//!     ])),
//!     Arg::from(builder::one_or_more(vec![Constant::Whitespace.into()])),
//! ]);
//! assert_eq!(re.to_pattern(), "(?<kind>CREDIT|DEBIT)\\s+");
//! ```

use crate::args::{Arg, Options, parse_args};
use crate::ast::{Block, BlockKind, Quantifier, QuantifierKind, RepeatBounds};
use crate::error::BuildError;
use crate::root::Regex;

/// Build a root (or nested) regex from a sequence of children
pub fn regex(args: Vec<Arg>) -> Regex {
    Regex::new(parse_args(args).children)
}

/// Build a capturing group, named by `Options::name`
pub fn capture(args: Vec<Arg>) -> Block {
    let parsed = parse_args(args);
    Block::new(
        BlockKind::Capture {
            name: parsed.options.name,
        },
        parsed.children,
    )
}

/// Build an alternation between children
pub fn choice_of(args: Vec<Arg>) -> Block {
    Block::new(BlockKind::ChoiceOf, parse_args(args).children)
}

/// Build a pass-through sequence
pub fn one(args: Vec<Arg>) -> Block {
    Block::new(BlockKind::One, parse_args(args).children)
}

/// Build `body+`
pub fn one_or_more(args: Vec<Arg>) -> Block {
    quantified(QuantifierKind::OneOrMore, args)
}

/// Build `body*`
pub fn zero_or_more(args: Vec<Arg>) -> Block {
    quantified(QuantifierKind::ZeroOrMore, args)
}

/// Build `body?`
pub fn optionally(args: Vec<Arg>) -> Block {
    quantified(QuantifierKind::Optionally, args)
}

/// Build a bounded repetition
///
/// # Errors
/// Fails when `count` is combined with `from`/`to`, when a bound is
/// negative, when `from > to`, when a bound is not an integer, or when a
/// bound does not fit in `u32`.
pub fn repeat(args: Vec<Arg>) -> Result<Block, BuildError> {
    let parsed = parse_args(args);
    let bounds = repeat_bounds(&parsed.options)?;
    let quantifier = Quantifier {
        kind: QuantifierKind::Repeat(bounds),
        lazy: parsed.options.lazy,
    };
    Ok(Block::new(BlockKind::Quantifier(quantifier), parsed.children))
}

fn quantified(kind: QuantifierKind, args: Vec<Arg>) -> Block {
    let parsed = parse_args(args);
    let quantifier = Quantifier {
        kind,
        lazy: parsed.options.lazy,
    };
    Block::new(BlockKind::Quantifier(quantifier), parsed.children)
}

/// Validate repeat options and convert them to bounds
pub fn repeat_bounds(options: &Options) -> Result<RepeatBounds, BuildError> {
    let Options {
        count, from, to, ..
    } = *options;

    if count.is_some() && (from.is_some() || to.is_some()) {
        return Err(BuildError::ConflictingBounds);
    }

    let named = [("count", count), ("from", from), ("to", to)];

    for (name, value) in named {
        if let Some(value) = value.filter(|v| *v < 0.0) {
            return Err(BuildError::NegativeBound { name, value });
        }
    }

    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(BuildError::InvertedBounds { from, to });
        }
    }

    for (name, value) in named {
        if let Some(value) = value.filter(|v| v.fract() != 0.0 || !v.is_finite()) {
            return Err(BuildError::NonIntegralBound { name, value });
        }
    }

    let to_u32 = |name: &'static str, value: f64| -> Result<u32, BuildError> {
        if value > f64::from(u32::MAX) {
            Err(BuildError::BoundOutOfRange { name, value })
        } else {
            Ok(value as u32)
        }
    };

    match count {
        Some(count) => Ok(RepeatBounds::Count(to_u32("count", count)?)),
        None => Ok(RepeatBounds::Range {
            from: to_u32("from", from.unwrap_or(0.0))?,
            to: to.map(|to| to_u32("to", to)).transpose()?,
        }),
    }
}
