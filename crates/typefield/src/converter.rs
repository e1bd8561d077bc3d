//! Converter record: a pattern paired with a decode function.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use typefield_core::{Cardinality, ConvertResult, Value};

/// Decode function of a converter.
pub type ConvertFn = dyn Fn(&str) -> ConvertResult<Value> + Send + Sync;

/// Kind-specific metadata of a converter.
#[derive(Clone, Debug, Default)]
pub enum ConverterKind {
    /// User-supplied converter.
    #[default]
    Plain,
    /// Derived from a base converter for another cardinality.
    Cardinality {
        cardinality: Cardinality,
        separator: String,
        /// Carried for callers; never enforced while decoding.
        max_size: Option<usize>,
    },
    /// Name-to-value lookup table.
    Enum { mappings: IndexMap<String, Value> },
    /// Literal strings. `indexed` converters decode to `(index, text)`.
    Choice { choices: Vec<String>, indexed: bool },
    /// Alternatives tried at one text position, in order.
    Variant { members: Vec<Converter> },
}

/// A typed field: a regex fragment and the function decoding what it matched.
///
/// Converters are immutable once built and cheap to clone; clones share the
/// decode function.
#[derive(Clone)]
pub struct Converter {
    name: Option<String>,
    pattern: Option<String>,
    convert: Arc<ConvertFn>,
    kind: ConverterKind,
}

impl Converter {
    /// Converter accepting text matched by `pattern`.
    pub fn new<F>(pattern: impl Into<String>, convert: F) -> Self
    where
        F: Fn(&str) -> ConvertResult<Value> + Send + Sync + 'static,
    {
        Self {
            name: None,
            pattern: Some(pattern.into()),
            convert: Arc::new(convert),
            kind: ConverterKind::Plain,
        }
    }

    /// Converter without an explicit pattern.
    ///
    /// Composers substitute their default catch-all pattern for it.
    pub fn without_pattern<F>(convert: F) -> Self
    where
        F: Fn(&str) -> ConvertResult<Value> + Send + Sync + 'static,
    {
        Self {
            name: None,
            pattern: None,
            convert: Arc::new(convert),
            kind: ConverterKind::Plain,
        }
    }

    pub(crate) fn from_parts(pattern: String, convert: Arc<ConvertFn>, kind: ConverterKind) -> Self {
        Self {
            name: None,
            pattern: Some(pattern),
            convert,
            kind,
        }
    }

    /// Assign the registry name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Explicit pattern, if the converter has one.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Explicit pattern, or `default` when there is none.
    pub fn effective_pattern<'a>(&'a self, default: &'a str) -> &'a str {
        self.pattern.as_deref().unwrap_or(default)
    }

    pub fn kind(&self) -> &ConverterKind {
        &self.kind
    }

    /// Decode text matched by this converter's pattern.
    pub fn convert(&self, text: &str) -> ConvertResult<Value> {
        (self.convert)(text)
    }

    /// Whether both converters share the same decode function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.convert, &other.convert)
    }

    pub fn cardinality(&self) -> Cardinality {
        match &self.kind {
            ConverterKind::Cardinality { cardinality, .. } => *cardinality,
            _ => Cardinality::One,
        }
    }

    pub fn max_size(&self) -> Option<usize> {
        match &self.kind {
            ConverterKind::Cardinality { max_size, .. } => *max_size,
            _ => None,
        }
    }

    pub fn mappings(&self) -> Option<&IndexMap<String, Value>> {
        match &self.kind {
            ConverterKind::Enum { mappings } => Some(mappings),
            _ => None,
        }
    }

    pub fn choices(&self) -> Option<&[String]> {
        match &self.kind {
            ConverterKind::Choice { choices, .. } => Some(choices),
            _ => None,
        }
    }

    pub fn members(&self) -> Option<&[Converter]> {
        match &self.kind {
            ConverterKind::Variant { members } => Some(members),
            _ => None,
        }
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
