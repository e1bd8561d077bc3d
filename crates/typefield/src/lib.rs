#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Composable typed fields for format-based string parsers.
//!
//! A format parser such as `"List: {numbers:Number+}"` looks up each field's
//! type name in a [`TypeRegistry`] to obtain a pattern (spliced into its
//! matcher) and a convert function (applied to the captured text). This crate
//! builds those converters:
//!
//! - `builder` - derive optional/list converters from a base converter,
//!   enum and choice converters from tables, and variant converters that
//!   try several alternative types at one position
//! - `registry` - the name to converter mapping handed to the parser
//! - `cardinality_field` - the `Type?`/`Type*`/`Type+` naming convention,
//!   creating missing variants on demand
//! - `field` - scanning `{name:format}` fields of a schema
//!
//! # Example
//!
//! ```
//! use typefield::{CardinalityFieldTypeBuilder, Converter, ConvertError, TypeRegistry, Value};
//!
//! let number = Converter::new(r"\d+", |text| {
//!     text.parse::<i64>()
//!         .map(Value::Int)
//!         .map_err(|e| ConvertError::invalid(text, e))
//! })
//! .with_name("Number");
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(number).unwrap();
//!
//! let new_types = CardinalityFieldTypeBuilder::new()
//!     .create_missing_types("List: {numbers:Number+}", &registry)
//!     .unwrap();
//! registry.extend(new_types);
//!
//! let numbers = registry.get("Number+").unwrap();
//! assert_eq!(numbers.convert("1, 2, 3").unwrap(), Value::from(vec![1, 2, 3]));
//! ```

pub mod builder;
pub mod cardinality_field;
mod converter;
mod error;
pub mod field;
mod registry;

#[cfg(test)]
pub(crate) mod test_utils;

pub use builder::{ChoiceOptions, EnumType, Transform, TypeBuilder, VariantOptions};
pub use cardinality_field::{CardinalityFieldTypeBuilder, TypeSource};
pub use converter::{ConvertFn, Converter, ConverterKind};
pub use error::{Error, Result};
pub use field::{Field, FieldParser, FormatSpec};
pub use registry::{TypeRegistry, build_type_dict};

pub use typefield_core::{
    Cardinality, ConvertError, ConvertResult, MatchOptions, Matcher, Value, capture_count,
};
