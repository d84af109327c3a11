//! Compiled patterns backed by the native engine
//!
//! Matching is delegated to the `regex` crate. Flag codes map onto
//! [`regex::RegexBuilder`] settings, except `g` which only changes how many
//! results [`CompiledRegex::matches`] returns.

use std::collections::HashMap;

use regex::RegexBuilder;

use crate::error::Result;
use crate::root::Flag;

/// Byte offsets of a match or group within the searched text
pub type Span = (usize, usize);

/// One match reported by the native engine
///
/// Offsets are byte positions into the haystack passed to the search call.
/// Group spans are only filled in by [`CompiledRegex::captures`] and
/// [`CompiledRegex::captures_at`]; a group that did not take part in the
/// match is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Offset of the first matched byte
    pub start: usize,
    /// Offset one past the last matched byte
    pub end: usize,
    /// Participating groups keyed by their 1-based position in the pattern
    pub groups: HashMap<u32, Span>,
    /// Participating groups that were declared with `(?<name>...)`
    pub named_groups: HashMap<String, Span>,
}

impl Match {
    fn from_span(m: regex::Match<'_>) -> Self {
        Match {
            start: m.start(),
            end: m.end(),
            groups: HashMap::new(),
            named_groups: HashMap::new(),
        }
    }

    fn from_captures(re: &regex::Regex, caps: &regex::Captures<'_>) -> Self {
        let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or_default();
        let mut groups = HashMap::new();
        let mut named_groups = HashMap::new();

        for (idx, name) in re.capture_names().enumerate().skip(1) {
            let Some(m) = caps.get(idx) else {
                continue;
            };
            let span = (m.start(), m.end());
            groups.insert(idx as u32, span);
            if let Some(name) = name {
                named_groups.insert(name.to_string(), span);
            }
        }

        Match {
            start: whole.0,
            end: whole.1,
            groups,
            named_groups,
        }
    }

    /// The whole match sliced out of `haystack`
    pub fn text<'h>(&self, haystack: &'h str) -> &'h str {
        &haystack[self.start..self.end]
    }

    /// Span of positional group `n`, if it participated
    pub fn group(&self, n: u32) -> Option<Span> {
        self.groups.get(&n).copied()
    }

    /// Span of the group declared as `(?<name>...)`, if it participated
    pub fn named_group(&self, name: &str) -> Option<Span> {
        self.named_groups.get(name).copied()
    }

    /// Positional group `n` sliced out of `haystack`
    pub fn group_text<'h>(&self, haystack: &'h str, n: u32) -> Option<&'h str> {
        self.group(n).map(|(start, end)| &haystack[start..end])
    }

    /// Named group sliced out of `haystack`
    pub fn named_group_text<'h>(&self, haystack: &'h str, name: &str) -> Option<&'h str> {
        self.named_group(name).map(|(start, end)| &haystack[start..end])
    }
}

/// A pattern compiled together with its flags
#[derive(Debug, Clone)]
pub struct CompiledRegex {
    regex: regex::Regex,
    flags: String,
    global: bool,
}

impl CompiledRegex {
    /// Compile `pattern` with the given flags
    pub fn new(pattern: &str, flags: &[Flag]) -> Result<Self> {
        let mut builder = RegexBuilder::new(pattern);
        let mut global = false;

        for flag in flags {
            match flag {
                Flag::Global => global = true,
                Flag::Multiline => {
                    builder.multi_line(true);
                }
                Flag::IgnoreCase => {
                    builder.case_insensitive(true);
                }
                Flag::DotAll => {
                    builder.dot_matches_new_line(true);
                }
            }
        }

        Ok(CompiledRegex {
            regex: builder.build()?,
            flags: flags.iter().map(Flag::code).collect(),
            global,
        })
    }

    /// The pattern body
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The flag codes this pattern was compiled with
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Whether the `g` flag is set
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// Borrow the native pattern
    pub fn as_regex(&self) -> &regex::Regex {
        &self.regex
    }

    /// Check if the pattern matches anywhere in the input
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Find the first match in the input
    pub fn find(&self, input: &str) -> Option<Match> {
        self.regex.find(input).map(Match::from_span)
    }

    /// Find all non-overlapping matches
    pub fn find_all(&self, input: &str) -> Vec<Match> {
        self.regex.find_iter(input).map(Match::from_span).collect()
    }

    /// Find the first match along with its capture groups
    pub fn captures(&self, input: &str) -> Option<Match> {
        self.captures_at(input, 0)
    }

    /// Like [`CompiledRegex::captures`], starting the search at byte `start`
    ///
    /// The text before `start` is still visible to anchors and word
    /// boundaries, and reported spans are offsets into the whole `input`.
    pub fn captures_at(&self, input: &str, start: usize) -> Option<Match> {
        self.regex
            .captures_at(input, start)
            .map(|caps| Match::from_captures(&self.regex, &caps))
    }

    /// Matched text: every match when global, otherwise at most the first
    pub fn matches<'a>(&self, input: &'a str) -> Vec<&'a str> {
        if self.global {
            self.regex.find_iter(input).map(|m| m.as_str()).collect()
        } else {
            self.regex.find(input).map(|m| m.as_str()).into_iter().collect()
        }
    }
}
