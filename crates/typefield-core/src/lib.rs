#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for typefield.
//!
//! Three pieces shared by every converter builder:
//! - **Cardinality**: how many repetitions of a base type a field accepts,
//!   and how the item pattern is wrapped to express that
//! - **Value**: the dynamic result of decoding matched text
//! - **Pattern helpers**: anchoring, capture-group accounting and
//!   compiling fragments into matchers

mod cardinality;
mod error;
pub mod pattern;
mod value;

#[cfg(test)]
mod pattern_tests;
#[cfg(test)]
mod value_tests;

pub use cardinality::Cardinality;
pub use error::{ConvertError, ConvertResult};
pub use pattern::{MatchOptions, Matcher, capture_count};
pub use value::Value;
