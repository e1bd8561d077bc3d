//! Minimal format-schema parser driving converters the way a parse library does.

#![allow(dead_code)]

use indexmap::IndexMap;
use typefield::{
    CardinalityFieldTypeBuilder, Converter, Field, FieldParser, MatchOptions, Matcher, Result,
    TypeRegistry, Value, capture_count,
};

const DEFAULT_PATTERN: &str = ".+?";

struct Slot {
    key: String,
    group: usize,
    converter: Option<Converter>,
}

/// A schema compiled into a single anchored, case-insensitive matcher.
pub struct SchemaParser {
    matcher: Matcher,
    slots: Vec<Slot>,
}

impl SchemaParser {
    pub fn new(schema: &str, registry: &TypeRegistry) -> Result<Self> {
        Self::with_builder(schema, registry, &CardinalityFieldTypeBuilder::new())
    }

    /// Synthesize missing `Type?`/`Type*`/`Type+` converters, then compile.
    pub fn with_builder(
        schema: &str,
        registry: &TypeRegistry,
        builder: &CardinalityFieldTypeBuilder,
    ) -> Result<Self> {
        let mut types = registry.clone();
        types.extend(builder.create_missing_types(schema, registry)?);

        let mut pattern = String::new();
        let mut slots = Vec::new();
        let mut next_group = 1;
        for part in split_schema(schema) {
            let field = match part {
                Part::Literal(text) => {
                    pattern.push_str(&regex_syntax::escape(&text));
                    continue;
                }
                Part::Field(field) => field,
            };

            let converter = match field.format_spec()? {
                Some(spec) => Some(
                    types
                        .get(&spec.type_name)
                        .cloned()
                        .ok_or(typefield::Error::MissingType(spec.type_name))?,
                ),
                None => None,
            };
            let field_pattern = converter
                .as_ref()
                .map_or(DEFAULT_PATTERN, |c| c.effective_pattern(DEFAULT_PATTERN))
                .to_owned();

            let key = if field.name.is_empty() {
                slots.len().to_string()
            } else {
                field.name
            };
            slots.push(Slot {
                key,
                group: next_group,
                converter,
            });
            pattern.push_str(&format!("({field_pattern})"));
            next_group += 1 + capture_count(&field_pattern)?;
        }

        let matcher = Matcher::new(&pattern, MatchOptions::new())?;
        Ok(Self { matcher, slots })
    }

    /// Parse `text`. `Ok(None)` if the schema does not match.
    pub fn parse(&self, text: &str) -> Result<Option<IndexMap<String, Value>>> {
        let Some(caps) = self.matcher.captures(text) else {
            return Ok(None);
        };
        let mut values = IndexMap::new();
        for slot in &self.slots {
            let captured = caps.get_group(slot.group).map_or("", |span| &text[span.range()]);
            let value = match &slot.converter {
                Some(converter) => converter.convert(captured)?,
                None => Value::from(captured),
            };
            values.insert(slot.key.clone(), value);
        }
        Ok(Some(values))
    }
}

enum Part {
    Literal(String),
    Field(Field),
}

fn split_schema(schema: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut rest = schema;
    while let Some(c) = rest.chars().next() {
        if rest.starts_with("{{") || rest.starts_with("}}") {
            literal.push(c);
            rest = &rest[2..];
            continue;
        }
        if c == '{' {
            if let Some(end) = rest.find('}') {
                if let Ok(field) = FieldParser::parse(&rest[..=end]) {
                    if !literal.is_empty() {
                        parts.push(Part::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(Part::Field(field));
                    rest = &rest[end + 1..];
                    continue;
                }
            }
        }
        literal.push(c);
        rest = &rest[c.len_utf8()..];
    }
    if !literal.is_empty() {
        parts.push(Part::Literal(literal));
    }
    parts
}

/// Registry with `Number` (`\d+` to integer) and `YesNo` (boolean words).
pub fn base_registry() -> TypeRegistry {
    let builder = typefield::TypeBuilder::new();
    let number = Converter::new(r"\d+", |text| {
        text.parse::<i64>()
            .map(Value::Int)
            .map_err(|e| typefield::ConvertError::invalid(text, e))
    })
    .with_name("Number");
    let yesno = builder
        .make_enum([
            ("yes", true),
            ("no", false),
            ("on", true),
            ("off", false),
            ("true", true),
            ("false", false),
        ])
        .with_name("YesNo");
    typefield::build_type_dict([number, yesno]).unwrap()
}

pub fn ints(items: &[i64]) -> Value {
    Value::Array(items.iter().copied().map(Value::Int).collect())
}
