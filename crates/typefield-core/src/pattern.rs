//! Pattern fragment helpers.
//!
//! Converters carry regex fragments that the consuming parser splices into
//! a larger expression. These helpers answer the questions a composer has
//! to answer about a fragment: how many capture groups it contributes, and
//! whether a piece of text matches it as a whole.

use regex_automata::meta::Regex;
use regex_automata::util::captures::Captures;
use regex_automata::util::syntax;

use crate::{ConvertError, ConvertResult};

/// Matching flags shared between the parser and converters that re-match text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOptions {
    /// Match letters regardless of case.
    pub case_insensitive: bool,
}

impl Default for MatchOptions {
    /// Case-insensitive, like the format parsers converters are built for.
    fn default() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-sensitive matching.
    pub fn exact_case() -> Self {
        Self {
            case_insensitive: false,
        }
    }

    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }
}

/// Wrap a fragment so it must match the whole text.
pub fn anchored(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

/// Number of explicit capture groups in a pattern fragment.
///
/// # Examples
/// ```
/// use typefield_core::capture_count;
/// assert_eq!(capture_count(r"\d+").unwrap(), 0);
/// assert_eq!(capture_count(r"(\d+)?(,(\d+))*").unwrap(), 3);
/// assert_eq!(capture_count(r"(?:a|b)").unwrap(), 0);
/// ```
pub fn capture_count(pattern: &str) -> ConvertResult<usize> {
    let hir = regex_syntax::Parser::new()
        .parse(pattern)
        .map_err(|e| invalid_pattern(pattern, e))?;
    Ok(hir.properties().explicit_captures_len())
}

/// Compiled whole-text matcher for a pattern fragment.
#[derive(Clone, Debug)]
pub struct Matcher {
    pattern: String,
    regex: Regex,
}

impl Matcher {
    /// Compile `pattern`, anchored at both ends.
    pub fn new(pattern: &str, options: MatchOptions) -> ConvertResult<Self> {
        let regex = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(options.case_insensitive))
            .build(&anchored(pattern))
            .map_err(|e| invalid_pattern(pattern, e))?;
        Ok(Self {
            pattern: pattern.to_owned(),
            regex,
        })
    }

    /// The fragment this matcher was built from (without anchors).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether `text` matches the fragment as a whole.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Match `text` as a whole and return its capture groups.
    ///
    /// Group 0 is the whole match; explicit groups follow in pattern order.
    pub fn captures(&self, text: &str) -> Option<Captures> {
        let mut caps = self.regex.create_captures();
        self.regex.captures(text, &mut caps);
        caps.is_match().then_some(caps)
    }
}

fn invalid_pattern(pattern: &str, err: impl std::fmt::Display) -> ConvertError {
    ConvertError::InvalidPattern {
        pattern: pattern.to_owned(),
        message: err.to_string(),
    }
}
