//! Cardinality variants of a base converter.

use std::sync::Arc;

use log::debug;
use typefield_core::{Cardinality, Value};

use super::TypeBuilder;
use crate::{Converter, ConverterKind};

impl TypeBuilder {
    /// Converter for `cardinality` items of the base converter's type.
    ///
    /// [`Cardinality::One`] returns the base converter itself, so repeated
    /// application is idempotent.
    pub fn with_cardinality(&self, cardinality: Cardinality, base: &Converter) -> Converter {
        match cardinality {
            Cardinality::One => base.clone(),
            Cardinality::ZeroOrOne => self.with_zero_or_one(base),
            Cardinality::ZeroOrMore => self.with_zero_or_more(base),
            Cardinality::OneOrMore => self.with_one_or_more(base),
        }
    }

    /// `0..1`: empty or blank text decodes to [`Value::Null`].
    pub fn with_zero_or_one(&self, base: &Converter) -> Converter {
        let item = base.clone();
        let convert = move |text: &str| {
            let text = text.trim();
            if text.is_empty() {
                return Ok(Value::Null);
            }
            item.convert(text)
        };
        self.derive(Cardinality::ZeroOrOne, base, Arc::new(convert))
    }

    /// `0..N`: empty or blank text decodes to an empty list.
    pub fn with_zero_or_more(&self, base: &Converter) -> Converter {
        self.with_list(Cardinality::ZeroOrMore, base)
    }

    /// `1..N`: empty input is left to the pattern to reject.
    pub fn with_one_or_more(&self, base: &Converter) -> Converter {
        self.with_list(Cardinality::OneOrMore, base)
    }

    /// Alias for [`TypeBuilder::with_zero_or_one`].
    pub fn with_optional(&self, base: &Converter) -> Converter {
        self.with_zero_or_one(base)
    }

    /// Alias for [`TypeBuilder::with_one_or_more`].
    pub fn with_many(&self, base: &Converter) -> Converter {
        self.with_one_or_more(base)
    }

    /// Alias for [`TypeBuilder::with_zero_or_more`].
    pub fn with_many0(&self, base: &Converter) -> Converter {
        self.with_zero_or_more(base)
    }

    fn with_list(&self, cardinality: Cardinality, base: &Converter) -> Converter {
        let item = base.clone();
        let separator = self.separator.clone();
        let allow_empty = cardinality.can_be_empty();
        let convert = move |text: &str| {
            let text = text.trim();
            if allow_empty && text.is_empty() {
                return Ok(Value::Array(Vec::new()));
            }
            text.split(separator.as_str())
                .map(|part| item.convert(part.trim()))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        };
        self.derive(cardinality, base, Arc::new(convert))
    }

    fn derive(
        &self,
        cardinality: Cardinality,
        base: &Converter,
        convert: Arc<crate::ConvertFn>,
    ) -> Converter {
        let item_pattern = base.effective_pattern(&self.default_pattern);
        let pattern = cardinality.make_pattern(item_pattern, &self.separator);
        debug!(
            "derived {cardinality} converter from {:?}: {pattern}",
            base.name().unwrap_or("<unnamed>")
        );
        let max_size = if cardinality.is_many() {
            self.max_size
        } else {
            None
        };
        let kind = ConverterKind::Cardinality {
            cardinality,
            separator: self.separator.clone(),
            max_size,
        };
        Converter::from_parts(pattern, convert, kind)
    }
}
