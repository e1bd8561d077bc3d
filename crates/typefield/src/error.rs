//! Errors raised while building converters and registries.

use typefield_core::ConvertError;

/// Errors that can occur while building converters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A suffix-specific operation was given a name without `?`, `*` or `+`.
    #[error("type name '{0}' has no cardinality suffix")]
    MissingCardinalitySuffix(String),

    /// The cardinality-one type a suffixed name refers to is not registered.
    #[error("missing base type '{0}'")]
    MissingType(String),

    /// A converter without a name was registered by name.
    #[error("converter has no name")]
    UnnamedConverter,

    /// More than one variant member relies on the catch-all pattern.
    #[error("variant has {count} members without a pattern (at most one allowed)")]
    AmbiguousVariant { count: usize },

    /// A variant needs at least one member.
    #[error("variant has no members")]
    EmptyVariant,

    /// A format field is not of the form `{name:format}`.
    #[error("invalid field: '{0}'")]
    InvalidField(String),

    /// A format specification cannot be split into its parts.
    #[error("INVALID-FORMAT: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, Error>;
