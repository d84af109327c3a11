//! Variadic call syntax for the builder functions
//!
//! Each macro converts its arguments with [`crate::Arg::from`] and forwards
//! them to the builder of the same name, so the call shapes documented in
//! [`crate::args`] can be written directly:
//!
//! ```
//! use regblock::{Constant, Options, capture, choice_of, nodes, one_or_more};
//!
//! let a = capture![Options::new().name("x"), nodes!["a", Constant::Digit]];
//! let b = capture![Options::new().name("x"), "a", Constant::Digit];
//! assert_eq!(a, b);
//! assert_eq!(one_or_more![choice_of!["a", "b"]].render(), "(?:a|b)+");
//! ```

#[macro_export]
macro_rules! regex {
    ($($arg:expr),* $(,)?) => {
        $crate::builder::regex(vec![$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! capture {
    ($($arg:expr),* $(,)?) => {
        $crate::builder::capture(vec![$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! choice_of {
    ($($arg:expr),* $(,)?) => {
        $crate::builder::choice_of(vec![$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! one {
    ($($arg:expr),* $(,)?) => {
        $crate::builder::one(vec![$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! one_or_more {
    ($($arg:expr),* $(,)?) => {
        $crate::builder::one_or_more(vec![$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! zero_or_more {
    ($($arg:expr),* $(,)?) => {
        $crate::builder::zero_or_more(vec![$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! optionally {
    ($($arg:expr),* $(,)?) => {
        $crate::builder::optionally(vec![$($crate::Arg::from($arg)),*])
    };
}

/// Expands to a `Result`; use `?` to nest it.
#[macro_export]
macro_rules! repeat {
    ($($arg:expr),* $(,)?) => {
        $crate::builder::repeat(vec![$($crate::Arg::from($arg)),*])
    };
}

/// An explicit child list of mixed node types
#[macro_export]
macro_rules! nodes {
    ($($node:expr),* $(,)?) => {
        vec![$($crate::Node::from($node)),*]
    };
}
