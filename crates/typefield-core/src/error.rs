//! Errors raised while decoding matched text.

/// Failure of a converter to decode text that its pattern matched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Text is not one of the declared choices.
    #[error("{text} not in: {choices}")]
    NotAChoice { text: String, choices: String },

    /// Text is not a key of the enumeration table, even after lowercasing.
    #[error("unknown enum key '{text}', expected one of: {keys}")]
    UnknownKey { text: String, keys: String },

    /// A variant member only matches after case folding, and the variant is strict.
    #[error("'{text}' matches a variant of {members} only when ignoring case")]
    CaseMismatch { text: String, members: String },

    /// No member of a variant accepts text that the combined pattern matched.
    ///
    /// The matcher and the converter disagree (for example about case
    /// sensitivity); this is a defect on the caller's side, not a mismatch.
    #[error("internal error: no variant of {members} matches '{text}'")]
    NoVariantMatch { text: String, members: String },

    /// A base converter rejected its input.
    #[error("invalid value '{text}': {message}")]
    Invalid { text: String, message: String },

    /// A pattern fragment could not be compiled.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl ConvertError {
    /// Convenience constructor for base converters.
    pub fn invalid(text: &str, message: impl std::fmt::Display) -> Self {
        Self::Invalid {
            text: text.to_owned(),
            message: message.to_string(),
        }
    }

    /// Whether this error signals a broken invariant rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::NoVariantMatch { .. })
    }
}

/// Result of a single conversion.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
