//! Cardinality model.
//!
//! Each cardinality knows how to wrap the pattern of a single item so the
//! result accepts the matching number of items. Composition is textual:
//! the item pattern is substituted as-is and never parsed or validated.

/// How many repetitions of a base type a field accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cardinality {
    /// Exactly one item; the pattern is used unchanged.
    One,
    /// `0..1` - the item or nothing.
    ZeroOrOne,
    /// `0..N` - a possibly empty, separated list of items.
    ZeroOrMore,
    /// `1..N` - a non-empty, separated list of items.
    OneOrMore,
}

impl Cardinality {
    /// Alias for [`Cardinality::ZeroOrOne`].
    pub const OPTIONAL: Self = Self::ZeroOrOne;
    /// Alias for [`Cardinality::ZeroOrMore`].
    pub const MANY0: Self = Self::ZeroOrMore;
    /// Alias for [`Cardinality::OneOrMore`].
    pub const MANY: Self = Self::OneOrMore;

    /// All cardinalities in declaration order.
    pub const ALL: [Self; 4] = [
        Self::One,
        Self::ZeroOrOne,
        Self::ZeroOrMore,
        Self::OneOrMore,
    ];

    /// Separator used between list items when the caller does not pick one.
    pub const DEFAULT_SEPARATOR: &'static str = ",";

    /// Composition template, with `{item}` and `{sep}` as placeholders.
    ///
    /// `None` for [`Cardinality::One`], which leaves the pattern untouched.
    pub fn schema(self) -> Option<&'static str> {
        match self {
            Self::One => None,
            Self::ZeroOrOne => Some(r"({item})?"),
            Self::ZeroOrMore => Some(r"({item})?(\s*{sep}\s*({item}))*"),
            Self::OneOrMore => Some(r"({item})(\s*{sep}\s*({item}))*"),
        }
    }

    /// Wrap `pattern` so it accepts this many items separated by `separator`.
    ///
    /// The separator is inserted verbatim. Callers that need a literal match
    /// for a separator containing regex metacharacters must escape it first.
    ///
    /// # Examples
    /// ```
    /// use typefield_core::Cardinality;
    /// assert_eq!(Cardinality::One.make_pattern(r"\d+", ","), r"\d+");
    /// assert_eq!(Cardinality::ZeroOrOne.make_pattern(r"\d+", ","), r"(\d+)?");
    /// ```
    pub fn make_pattern(self, pattern: &str, separator: &str) -> String {
        let Some(schema) = self.schema() else {
            return pattern.to_owned();
        };
        schema
            .split("{item}")
            .map(|piece| piece.replace("{sep}", separator))
            .collect::<Vec<_>>()
            .join(pattern)
    }

    /// Whether this cardinality decodes into a list.
    pub fn is_many(self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }

    /// Whether empty input is a valid (absent or empty-list) value.
    pub fn can_be_empty(self) -> bool {
        matches!(self, Self::ZeroOrOne | Self::ZeroOrMore)
    }

    /// Snake-case name, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::ZeroOrOne => "zero_or_one",
            Self::ZeroOrMore => "zero_or_more",
            Self::OneOrMore => "one_or_more",
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
