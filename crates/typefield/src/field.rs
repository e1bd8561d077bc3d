//! Format fields of a parse schema.
//!
//! A schema such as `"Answer: {answer:YesNo}"` embeds fields of the form
//! `{name:format}`, where format follows
//! `[[fill]align][0][width][.precision][type]`. Doubled braces (`{{`, `}}`)
//! are literal text.

use std::fmt;

use crate::{Error, Result};

/// Alignment characters of a format spec.
pub const ALIGN_CHARS: &str = "<>=^";

/// A `{name:format}` field. Empty strings stand for absent parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: String,
    pub format: String,
}

/// Parts of a field format.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: Option<char>,
    pub align: Option<char>,
    pub zero: bool,
    /// Decimal digits, empty if absent.
    pub width: String,
    /// Decimal digits after `.`, empty if absent.
    pub precision: String,
    pub type_name: String,
}

impl FormatSpec {
    /// Spec consisting of a type only.
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }
}

impl Field {
    pub fn new(name: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: format.into(),
        }
    }

    /// Field with a name and no format.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// Field with a format and no name.
    pub fn typed(format: impl Into<String>) -> Self {
        Self::new("", format)
    }

    pub fn has_format(&self) -> bool {
        !self.format.is_empty()
    }

    /// Parsed format, or `None` for fields without one.
    pub fn format_spec(&self) -> Result<Option<FormatSpec>> {
        if !self.has_format() {
            return Ok(None);
        }
        Self::extract_format_spec(&self.format).map(Some)
    }

    /// Split a format into its parts.
    ///
    /// # Examples
    /// ```
    /// use typefield::Field;
    /// let spec = Field::extract_format_spec("_>010Number+").unwrap();
    /// assert_eq!(spec.fill, Some('_'));
    /// assert_eq!(spec.align, Some('>'));
    /// assert!(spec.zero);
    /// assert_eq!(spec.width, "10");
    /// assert_eq!(spec.type_name, "Number+");
    /// ```
    pub fn extract_format_spec(format: &str) -> Result<FormatSpec> {
        if format.is_empty() {
            return Err(Error::InvalidFormat("(empty format)".to_owned()));
        }

        let chars: Vec<char> = format.chars().collect();
        let is_align = |c: &char| ALIGN_CHARS.contains(*c);
        let mut spec = FormatSpec::default();
        let mut pos = 0;

        if chars.get(1).is_some_and(is_align) {
            spec.fill = Some(chars[0]);
            spec.align = Some(chars[1]);
            pos = 2;
        } else if is_align(&chars[0]) {
            spec.align = Some(chars[0]);
            pos = 1;
        }

        if chars.get(pos) == Some(&'0') {
            spec.zero = true;
            pos += 1;
        }

        let digits = |from: usize| {
            chars[from..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .collect::<String>()
        };
        spec.width = digits(pos);
        pos += spec.width.len();

        if chars.get(pos) == Some(&'.') {
            spec.precision = digits(pos + 1);
            pos += 1 + spec.precision.len();
        }

        spec.type_name = chars[pos..].iter().collect();
        if spec.type_name.is_empty() {
            return Err(Error::InvalidFormat(format!("{format} (without type)")));
        }
        Ok(spec)
    }

    /// Render a spec back into a format. Inverse of [`Field::extract_format_spec`].
    pub fn make_format(spec: &FormatSpec) -> String {
        let mut format = String::new();
        if let Some(align) = spec.align {
            format.extend(spec.fill);
            format.push(align);
        }
        if spec.zero {
            format.push('0');
        }
        format.push_str(&spec.width);
        if !spec.precision.is_empty() {
            format.push('.');
            format.push_str(&spec.precision);
        }
        format.push_str(&spec.type_name);
        format
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_format() {
            write!(f, "{{{}:{}}}", self.name, self.format)
        } else {
            write!(f, "{{{}}}", self.name)
        }
    }
}

/// Extracts fields from schema text.
pub struct FieldParser;

impl FieldParser {
    /// Parse a single field, braces included.
    pub fn parse(text: &str) -> Result<Field> {
        let inner = text
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .filter(|inner| !inner.contains(['{', '}']))
            .ok_or_else(|| Error::InvalidField(text.to_owned()))?;
        Ok(match inner.split_once(':') {
            Some((name, format)) => Field::new(name, format),
            None => Field::named(inner),
        })
    }

    /// All fields of a schema, in order. Escaped braces are skipped.
    pub fn extract_fields(schema: &str) -> Vec<Field> {
        let bytes = schema.as_bytes();
        let mut fields = Vec::new();
        let mut pos = 0;
        while pos < bytes.len() {
            let rest = &bytes[pos..];
            if rest.starts_with(b"{{") || rest.starts_with(b"}}") {
                pos += 2;
                continue;
            }
            if rest[0] != b'{' {
                pos += 1;
                continue;
            }
            let Some(end) = rest.iter().position(|&b| b == b'}') else {
                break;
            };
            if let Ok(field) = Self::parse(&schema[pos..=pos + end]) {
                fields.push(field);
                pos += end + 1;
            } else {
                pos += 1;
            }
        }
        fields
    }

    /// Type names of all typed fields of a schema, in order.
    pub fn extract_types(schema: &str) -> Result<Vec<String>> {
        let mut types = Vec::new();
        for field in Self::extract_fields(schema) {
            if let Some(spec) = field.format_spec()? {
                types.push(spec.type_name);
            }
        }
        Ok(types)
    }
}
