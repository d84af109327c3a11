//! Error types for the pattern builder
//!
//! This module provides error handling using the `thiserror` crate.
//! Errors are categorized by their source: tree construction or compilation
//! by the native engine.

use thiserror::Error;

/// The main error type for the pattern builder
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegexError {
    /// Errors raised while constructing a node
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// The rendered pattern was rejected by the native engine
    #[error("syntax error: {0}")]
    Syntax(#[from] regex::Error),
}

/// Construction-time validation errors for repeat bounds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Both `count` and `from`/`to` were supplied
    #[error("repeat cannot have both count and from/to")]
    ConflictingBounds,

    /// A bound was below zero
    #[error("repeat {name} cannot be negative (got {value})")]
    NegativeBound {
        /// Which bound was rejected
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// `from` was greater than `to`
    #[error("repeat from ({from}) cannot be greater than to ({to})")]
    InvertedBounds {
        /// Lower bound
        from: f64,
        /// Upper bound
        to: f64,
    },

    /// A bound had a fractional part
    #[error("repeat {name} must be an integer (got {value})")]
    NonIntegralBound {
        /// Which bound was rejected
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A bound did not fit the repetition range of the engine
    #[error("repeat {name} is out of range (got {value})")]
    BoundOutOfRange {
        /// Which bound was rejected
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, RegexError>;
