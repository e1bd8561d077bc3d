//! Variant converters: several alternative types at one text position.
//!
//! The combined pattern wraps every member pattern in its own group:
//! `(p1)|(p2)|...`. After the parser matched it, the decode step finds
//! the member that accepts the text and delegates to it.

use std::sync::Arc;

use itertools::Itertools;
use log::{debug, trace};
use typefield_core::{ConvertError, ConvertResult, MatchOptions, Matcher, Value, capture_count};

use super::TypeBuilder;
use crate::{Converter, ConverterKind, Error, Result};

/// Options for [`TypeBuilder::make_variant`].
#[derive(Clone, Copy, Debug, Default)]
pub struct VariantOptions {
    pub(crate) match_options: Option<MatchOptions>,
    pub(crate) compiled: bool,
    pub(crate) strict: Option<bool>,
}

impl VariantOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matching flags used to pick the member. Defaults to the builder's.
    pub fn match_options(mut self, value: MatchOptions) -> Self {
        self.match_options = Some(value);
        self
    }

    /// Pick the member with one combined matcher instead of one per member.
    pub fn compiled(mut self, value: bool) -> Self {
        self.compiled = value;
        self
    }

    /// Whether text matching a member only after case folding is an error
    /// (strict) or decodes to [`Value::Null`]. Defaults to the builder's.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = Some(value);
        self
    }
}

/// How the member accepting a text is found.
enum Dispatch {
    /// One matcher per member, tried in order.
    Each(Vec<Matcher>),
    /// One matcher for `(p1)|(p2)|...`, with the group index of each member.
    Combined { matcher: Matcher, groups: Vec<usize> },
}

impl Dispatch {
    fn select(&self, text: &str) -> Option<usize> {
        match self {
            Dispatch::Each(matchers) => matchers.iter().position(|m| m.is_match(text)),
            Dispatch::Combined { matcher, groups } => {
                let caps = matcher.captures(text)?;
                groups.iter().position(|&g| caps.get_group(g).is_some())
            }
        }
    }
}

struct VariantDispatcher {
    members: Vec<Converter>,
    dispatch: Dispatch,
    /// Case-insensitive matchers, present only when dispatch is case-sensitive.
    folded: Option<Vec<Matcher>>,
    strict: bool,
    description: String,
}

impl VariantDispatcher {
    fn convert(&self, text: &str) -> ConvertResult<Value> {
        if let Some(index) = self.dispatch.select(text) {
            trace!("variant {}: '{text}' dispatched to member {index}", self.description);
            return self.members[index].convert(text);
        }

        let folded_match = self
            .folded
            .as_ref()
            .is_some_and(|matchers| matchers.iter().any(|m| m.is_match(text)));
        if !folded_match {
            return Err(ConvertError::NoVariantMatch {
                text: text.to_owned(),
                members: self.description.clone(),
            });
        }
        if self.strict {
            return Err(ConvertError::CaseMismatch {
                text: text.to_owned(),
                members: self.description.clone(),
            });
        }
        Ok(Value::Null)
    }
}

impl TypeBuilder {
    /// Converter accepting any of `converters`, tried in order.
    ///
    /// At most one member may lack an explicit pattern; it is matched by the
    /// builder's default pattern.
    pub fn make_variant(&self, converters: &[Converter], options: VariantOptions) -> Result<Converter> {
        if converters.is_empty() {
            return Err(Error::EmptyVariant);
        }
        let without_pattern = converters.iter().filter(|c| c.pattern().is_none()).count();
        if without_pattern > 1 {
            return Err(Error::AmbiguousVariant {
                count: without_pattern,
            });
        }

        let match_options = options.match_options.unwrap_or(self.match_options);
        let strict = options.strict.unwrap_or(self.strict);
        let patterns: Vec<&str> = converters
            .iter()
            .map(|c| c.effective_pattern(&self.default_pattern))
            .collect();
        let pattern = patterns.iter().map(|p| format!("({p})")).join("|");

        let dispatch = if options.compiled {
            let mut groups = Vec::with_capacity(patterns.len());
            let mut next = 1;
            for p in &patterns {
                groups.push(next);
                next += 1 + capture_count(p)?;
            }
            Dispatch::Combined {
                matcher: Matcher::new(&pattern, match_options)?,
                groups,
            }
        } else {
            Dispatch::Each(compile_each(&patterns, match_options)?)
        };
        let folded = if match_options.case_insensitive {
            None
        } else {
            Some(compile_each(&patterns, match_options.case_insensitive(true))?)
        };

        let description = converters
            .iter()
            .map(|c| c.name().unwrap_or("<unnamed>"))
            .join("|");
        debug!("built variant {description}: {pattern}");

        let dispatcher = VariantDispatcher {
            members: converters.to_vec(),
            dispatch,
            folded,
            strict,
            description,
        };
        let convert = move |text: &str| dispatcher.convert(text);
        let kind = ConverterKind::Variant {
            members: converters.to_vec(),
        };
        Ok(Converter::from_parts(pattern, Arc::new(convert), kind))
    }
}

fn compile_each(patterns: &[&str], options: MatchOptions) -> ConvertResult<Vec<Matcher>> {
    patterns.iter().map(|p| Matcher::new(p, options)).collect()
}
