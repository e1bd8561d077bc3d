//! Cardinality suffix naming convention.
//!
//! A format field may append a cardinality suffix to its type name:
//!
//! | Field             | Cardinality        |
//! |-------------------|--------------------|
//! | `{x:Person}`      | exactly one        |
//! | `{x:Person?}`     | zero or one        |
//! | `{x:Person*}`     | zero or more       |
//! | `{x:Person+}`     | one or more        |
//!
//! Suffixed types need not be registered up front: they are synthesized
//! from the base type right before the schema is compiled.

use log::debug;
use typefield_core::Cardinality;

use crate::{Converter, Error, FieldParser, Result, TypeBuilder, TypeRegistry};

/// Characters recognized as cardinality suffixes.
pub const PATTERN_CHARS: &str = "?*+";

/// Cardinality denoted by a suffix character.
pub fn cardinality_from_char(c: char) -> Option<Cardinality> {
    match c {
        '?' => Some(Cardinality::ZeroOrOne),
        '*' => Some(Cardinality::ZeroOrMore),
        '+' => Some(Cardinality::OneOrMore),
        _ => None,
    }
}

/// Suffix character of a cardinality. [`Cardinality::One`] has none.
pub fn cardinality_char(cardinality: Cardinality) -> Option<char> {
    match cardinality {
        Cardinality::One => None,
        Cardinality::ZeroOrOne => Some('?'),
        Cardinality::ZeroOrMore => Some('*'),
        Cardinality::OneOrMore => Some('+'),
    }
}

/// Whether `type_name` ends with a cardinality suffix.
pub fn matches_type_name(type_name: &str) -> bool {
    type_name
        .chars()
        .next_back()
        .is_some_and(|c| cardinality_from_char(c).is_some())
}

/// Split a type name into base name and cardinality.
///
/// Names without suffix have cardinality [`Cardinality::One`].
///
/// # Examples
/// ```
/// use typefield::Cardinality;
/// use typefield::cardinality_field::split_type;
/// assert_eq!(split_type("Number+"), ("Number", Cardinality::OneOrMore));
/// assert_eq!(split_type("Number"), ("Number", Cardinality::One));
/// ```
pub fn split_type(type_name: &str) -> (&str, Cardinality) {
    let mut chars = type_name.chars();
    match chars.next_back().and_then(cardinality_from_char) {
        Some(cardinality) => (chars.as_str(), cardinality),
        None => (type_name, Cardinality::One),
    }
}

/// Compose a type name from base name and cardinality. Inverse of [`split_type`].
pub fn make_type(base_name: &str, cardinality: Cardinality) -> String {
    match cardinality_char(cardinality) {
        Some(c) => format!("{base_name}{c}"),
        None => base_name.to_owned(),
    }
}

/// Base name of a possibly suffixed type name.
pub fn type_basename(type_name: &str) -> &str {
    split_type(type_name).0
}

/// Where the base converter of a type variant comes from.
#[derive(Clone, Copy, Debug)]
pub enum TypeSource<'a> {
    /// The base converter itself.
    Converter(&'a Converter),
    /// A registry holding the base converter under the base name.
    Registry(&'a TypeRegistry),
}

impl<'a> From<&'a Converter> for TypeSource<'a> {
    fn from(converter: &'a Converter) -> Self {
        Self::Converter(converter)
    }
}

impl<'a> From<&'a TypeRegistry> for TypeSource<'a> {
    fn from(registry: &'a TypeRegistry) -> Self {
        Self::Registry(registry)
    }
}

/// Creates type variants for suffixed type names from their base converters.
#[derive(Clone, Debug, Default)]
pub struct CardinalityFieldTypeBuilder {
    builder: TypeBuilder,
}

impl CardinalityFieldTypeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `builder` (and its separator) to derive variants.
    pub fn with_builder(builder: TypeBuilder) -> Self {
        Self { builder }
    }

    /// Set the list separator of created list variants.
    pub fn separator(mut self, value: impl Into<String>) -> Self {
        self.builder = self.builder.separator(value);
        self
    }

    pub fn builder(&self) -> &TypeBuilder {
        &self.builder
    }

    /// Create the converter for a suffixed type name, named after it.
    pub fn create_type_variant<'a>(
        &self,
        type_name: &str,
        source: impl Into<TypeSource<'a>>,
    ) -> Result<Converter> {
        let (base_name, cardinality) = split_type(type_name);
        if cardinality == Cardinality::One {
            return Err(Error::MissingCardinalitySuffix(type_name.to_owned()));
        }

        let base = match source.into() {
            TypeSource::Converter(converter) => converter,
            TypeSource::Registry(registry) => registry
                .get(base_name)
                .ok_or_else(|| Error::MissingType(base_name.to_owned()))?,
        };

        let variant = self.builder.with_cardinality(cardinality, base);
        Ok(variant.with_name(type_name))
    }

    /// Create converters for all `type_names` from base types in `registry`.
    pub fn create_type_variants<I, S>(&self, type_names: I, registry: &TypeRegistry) -> Result<TypeRegistry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut variants = TypeRegistry::new();
        for type_name in type_names {
            let type_name = type_name.as_ref();
            if variants.contains(type_name) {
                continue;
            }
            let variant = self.create_type_variant(type_name, registry)?;
            variants.insert(type_name, variant);
        }
        Ok(variants)
    }

    /// Like [`Self::create_type_variants`], skipping names already in `registry`.
    ///
    /// Returns only the new entries; merging them is up to the caller.
    pub fn create_missing_type_variants<I, S>(
        &self,
        type_names: I,
        registry: &TypeRegistry,
    ) -> Result<TypeRegistry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let missing: Vec<S> = type_names
            .into_iter()
            .filter(|name| !registry.contains(name.as_ref()))
            .collect();
        let created = self.create_type_variants(missing, registry)?;
        if !created.is_empty() {
            debug!(
                "created missing type variants: {}",
                created.names().collect::<Vec<_>>().join(", ")
            );
        }
        Ok(created)
    }

    /// Create the suffixed types a schema refers to but `registry` lacks.
    ///
    /// Run before compiling the schema; merge the result into the registry.
    pub fn create_missing_types(&self, schema: &str, registry: &TypeRegistry) -> Result<TypeRegistry> {
        let type_names: Vec<String> = FieldParser::extract_types(schema)?
            .into_iter()
            .filter(|name| matches_type_name(name))
            .collect();
        self.create_missing_type_variants(type_names, registry)
    }
}
