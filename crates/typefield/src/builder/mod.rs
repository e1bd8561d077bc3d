//! Converter builders.
//!
//! [`TypeBuilder`] derives new converters from existing ones:
//! - cardinality variants (`with_optional`, `with_many`, `with_many0`)
//! - enum and choice converters from literal tables
//! - variant converters trying several alternative types

mod cardinality;
mod choice;
mod variant;

#[cfg(test)]
mod variant_tests;

pub use choice::{ChoiceOptions, EnumType, Transform};
pub use variant::VariantOptions;

use typefield_core::{Cardinality, MatchOptions};

/// Builds converters derived from existing ones.
#[derive(Clone, Debug)]
pub struct TypeBuilder {
    /// Separator between list items.
    pub(crate) separator: String,
    /// Pattern used for converters that have none.
    pub(crate) default_pattern: String,
    /// Whether choice and variant converters reject out-of-set text by default.
    pub(crate) strict: bool,
    /// Matching flags assumed for the consuming parser.
    pub(crate) match_options: MatchOptions,
    /// Maximum list size recorded on list converters.
    pub(crate) max_size: Option<usize>,
}

impl Default for TypeBuilder {
    fn default() -> Self {
        Self {
            separator: Cardinality::DEFAULT_SEPARATOR.to_owned(),
            default_pattern: Self::DEFAULT_PATTERN.to_owned(),
            strict: true,
            match_options: MatchOptions::default(),
            max_size: None,
        }
    }
}

impl TypeBuilder {
    /// Catch-all pattern for converters without an explicit one.
    pub const DEFAULT_PATTERN: &'static str = ".+?";

    /// Create a new TypeBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list separator.
    pub fn separator(mut self, value: impl Into<String>) -> Self {
        self.separator = value.into();
        self
    }

    /// Set the catch-all pattern.
    pub fn default_pattern(mut self, value: impl Into<String>) -> Self {
        self.default_pattern = value.into();
        self
    }

    /// Set the default strictness of choice and variant converters.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    /// Set the matching flags of the consuming parser.
    pub fn match_options(mut self, value: MatchOptions) -> Self {
        self.match_options = value;
        self
    }

    /// Record a maximum item count on list converters.
    ///
    /// The limit is metadata only; decoding does not enforce it.
    pub fn max_size(mut self, value: usize) -> Self {
        self.max_size = Some(value);
        self
    }

    pub fn get_separator(&self) -> &str {
        &self.separator
    }

    pub fn get_default_pattern(&self) -> &str {
        &self.default_pattern
    }
}
