//! Shared converters for unit tests.

use crate::{ConvertError, Converter, TypeBuilder, Value};

pub fn parse_number() -> Converter {
    Converter::new(r"\d+", |text| {
        text.parse::<i64>()
            .map(Value::Int)
            .map_err(|e| ConvertError::invalid(text, e))
    })
    .with_name("Number")
}

/// Converter without explicit pattern.
pub fn parse_word() -> Converter {
    Converter::without_pattern(|text| Ok(Value::from(text))).with_name("Word")
}

pub fn parse_yesno() -> Converter {
    TypeBuilder::new()
        .make_enum([
            ("yes", true),
            ("no", false),
            ("on", true),
            ("off", false),
            ("true", true),
            ("false", false),
        ])
        .with_name("YesNo")
}
