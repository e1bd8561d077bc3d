//! Enum and choice converters.
//!
//! Both kinds match an alternation of literal strings. The parser usually
//! matches case-insensitively, so the decode step has to cope with text
//! whose case differs from the declared keys.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use itertools::Itertools;
use typefield_core::{ConvertError, Value};

use super::TypeBuilder;
use crate::{Converter, ConverterKind};

/// Case normalization applied to choices and to decoded text.
pub type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// An enumeration type whose member names can be matched as text.
///
/// # Examples
/// ```
/// use typefield::{EnumType, TypeBuilder, Value};
///
/// struct Color;
///
/// impl EnumType for Color {
///     fn members() -> Vec<(&'static str, Value)> {
///         vec![("red", Value::Int(1)), ("green", Value::Int(2))]
///     }
/// }
///
/// let color = TypeBuilder::new().make_enum_from_type::<Color>();
/// assert_eq!(color.pattern(), Some("red|green"));
/// assert_eq!(color.convert("green").unwrap(), Value::tagged("green", 2));
/// ```
pub trait EnumType {
    /// Member names with their payload, in declaration order.
    fn members() -> Vec<(&'static str, Value)>;
}

/// Options for [`TypeBuilder::make_choice`].
#[derive(Clone, Default)]
pub struct ChoiceOptions {
    pub(crate) transform: Option<Transform>,
    pub(crate) strict: Option<bool>,
}

impl ChoiceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize choices at construction and text at decode time.
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(f));
        self
    }

    /// Override the builder's default strictness.
    ///
    /// Non-strict converters return text outside the choice set unchanged.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = Some(value);
        self
    }
}

impl fmt::Debug for ChoiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceOptions")
            .field("transform", &self.transform.is_some())
            .field("strict", &self.strict)
            .finish()
    }
}

impl TypeBuilder {
    /// Enum converter from a name to value table.
    ///
    /// Decoding looks the text up as-is, then retries with the lowercased
    /// text. No other case permutation is tried.
    pub fn make_enum<I, K, V>(&self, mappings: I) -> Converter
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mappings: IndexMap<String, Value> = mappings
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let pattern = mappings.keys().join("|");

        let table = mappings.clone();
        let convert = move |text: &str| {
            table
                .get(text)
                .or_else(|| table.get(&text.to_lowercase()))
                .cloned()
                .ok_or_else(|| ConvertError::UnknownKey {
                    text: text.to_owned(),
                    keys: table.keys().join(", "),
                })
        };
        Converter::from_parts(pattern, Arc::new(convert), ConverterKind::Enum { mappings })
    }

    /// Enum converter over the members of an enumeration type.
    ///
    /// Each member decodes to [`Value::Tagged`] with the member name as tag.
    pub fn make_enum_from_type<E: EnumType>(&self) -> Converter {
        self.make_enum(
            E::members()
                .into_iter()
                .map(|(name, value)| (name, Value::tagged(name, value))),
        )
    }

    /// Converter selecting one of several literal strings.
    ///
    /// Decodes to the (transformed) text.
    pub fn make_choice<I, S>(&self, choices: I, options: ChoiceOptions) -> Converter
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.choice(choices, options, false)
    }

    /// Like [`TypeBuilder::make_choice`], but decodes to `(index, text)`.
    ///
    /// A non-strict converter decodes text outside the choice set to
    /// `(null, text)`.
    pub fn make_choice2<I, S>(&self, choices: I, options: ChoiceOptions) -> Converter
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.choice(choices, options, true)
    }

    fn choice<I, S>(&self, choices: I, options: ChoiceOptions, indexed: bool) -> Converter
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ChoiceOptions { transform, strict } = options;
        let strict = strict.unwrap_or(self.strict);
        let choices: Vec<String> = choices
            .into_iter()
            .map(|c| match &transform {
                Some(f) => f(c.as_ref()),
                None => c.as_ref().to_owned(),
            })
            .collect();
        let pattern = choices.join("|");

        let valid = choices.clone();
        let convert = move |text: &str| {
            let text = match &transform {
                Some(f) => f(text),
                None => text.to_owned(),
            };
            let index = valid.iter().position(|c| *c == text);
            if strict && index.is_none() {
                return Err(ConvertError::NotAChoice {
                    text,
                    choices: valid.join(", "),
                });
            }
            if !indexed {
                return Ok(Value::String(text));
            }
            let index = index.map_or(Value::Null, |i| Value::Int(i as i64));
            Ok(Value::Tuple(vec![index, Value::String(text)]))
        };
        let kind = ConverterKind::Choice { choices, indexed };
        Converter::from_parts(pattern, Arc::new(convert), kind)
    }
}
