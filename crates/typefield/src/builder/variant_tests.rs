use crate::test_utils::{parse_number, parse_word, parse_yesno};
use crate::{
    ChoiceOptions, ConvertError, Converter, Error, MatchOptions, TypeBuilder, Value, VariantOptions,
};

fn number_or_yesno(options: VariantOptions) -> Converter {
    let yesno = TypeBuilder::new().make_enum([("yes", true), ("no", false)]);
    TypeBuilder::new()
        .make_variant(&[parse_number(), yesno], options)
        .unwrap()
}

#[test]
fn pattern_groups_each_member() {
    let variant = number_or_yesno(VariantOptions::new());
    insta::assert_snapshot!(variant.pattern().unwrap(), @r"(\d+)|(yes|no)");
    assert_eq!(variant.members().unwrap().len(), 2);
    assert_eq!(variant.name(), None);
}

#[test]
fn dispatches_to_matching_member() {
    for compiled in [false, true] {
        let variant = number_or_yesno(VariantOptions::new().compiled(compiled));

        assert_eq!(variant.convert("0").unwrap(), Value::Int(0));
        assert_eq!(variant.convert("42").unwrap(), Value::Int(42));
        assert_eq!(variant.convert("yes").unwrap(), Value::Bool(true));
        assert_eq!(variant.convert("no").unwrap(), Value::Bool(false));
    }
}

#[test]
fn rejects_text_no_member_accepts() {
    for compiled in [false, true] {
        let variant = number_or_yesno(VariantOptions::new().compiled(compiled));

        for text in ["-1", "42 xxx", "yes!", ""] {
            let err = variant.convert(text).unwrap_err();
            assert!(err.is_internal(), "{text}: {err}");
        }
    }
}

#[test]
fn no_match_message() {
    let variant = number_or_yesno(VariantOptions::new());
    insta::assert_snapshot!(
        variant.convert("-1").unwrap_err(),
        @"internal error: no variant of Number|<unnamed> matches '-1'"
    );
}

#[test]
fn case_insensitive_dispatch_by_default() {
    let variant = TypeBuilder::new()
        .make_variant(&[parse_number(), parse_yesno()], VariantOptions::new())
        .unwrap();
    assert_eq!(variant.convert("YES").unwrap(), Value::Bool(true));
}

#[test]
fn strict_case_sensitive_dispatch() {
    let choice = TypeBuilder::new()
        .make_choice(["Alice", "Bob"], ChoiceOptions::new())
        .with_name("Person");
    let options = VariantOptions::new()
        .match_options(MatchOptions::exact_case())
        .strict(true);
    let variant = TypeBuilder::new()
        .make_variant(&[parse_number(), choice], options)
        .unwrap();

    assert_eq!(variant.convert("Alice").unwrap(), Value::from("Alice"));
    let err = variant.convert("ALICE").unwrap_err();
    assert!(matches!(err, ConvertError::CaseMismatch { .. }));
    insta::assert_snapshot!(err, @"'ALICE' matches a variant of Number|Person only when ignoring case");

    assert!(variant.convert("Carol").unwrap_err().is_internal());
}

#[test]
fn lenient_case_sensitive_dispatch() {
    let choice = TypeBuilder::new().make_choice(["Alice", "Bob"], ChoiceOptions::new());
    let options = VariantOptions::new()
        .match_options(MatchOptions::exact_case())
        .strict(false)
        .compiled(true);
    let variant = TypeBuilder::new()
        .make_variant(&[parse_number(), choice], options)
        .unwrap();

    assert_eq!(variant.convert("Bob").unwrap(), Value::from("Bob"));
    assert_eq!(variant.convert("bob").unwrap(), Value::Null);
    assert!(variant.convert("Carol").unwrap_err().is_internal());
}

#[test]
fn first_member_wins_when_ambiguous() {
    let text = Converter::new(r"\w+", |t| Ok(Value::from(t)));
    for compiled in [false, true] {
        let variant = TypeBuilder::new()
            .make_variant(&[parse_number(), text.clone()], VariantOptions::new().compiled(compiled))
            .unwrap();
        assert_eq!(variant.convert("12").unwrap(), Value::Int(12));
        assert_eq!(variant.convert("ab").unwrap(), Value::from("ab"));
    }
}

#[test]
fn compiled_dispatch_skips_inner_groups() {
    let range = Converter::new(r"(\d+)-(\d+)", |t| Ok(Value::from(format!("range {t}"))));
    let many = TypeBuilder::new().with_many(&parse_number());
    let variant = TypeBuilder::new()
        .make_variant(&[range, many, parse_yesno()], VariantOptions::new().compiled(true))
        .unwrap();

    assert_eq!(variant.convert("1-2").unwrap(), Value::from("range 1-2"));
    assert_eq!(
        variant.convert("1, 2").unwrap(),
        Value::from(vec![1, 2])
    );
    assert_eq!(variant.convert("off").unwrap(), Value::Bool(false));
}

#[test]
fn member_without_pattern_uses_default() {
    let variant = TypeBuilder::new()
        .make_variant(&[parse_number(), parse_word()], VariantOptions::new())
        .unwrap();

    assert_eq!(variant.pattern(), Some(r"(\d+)|(.+?)"));
    assert_eq!(variant.convert("7").unwrap(), Value::Int(7));
    assert_eq!(variant.convert("seven").unwrap(), Value::from("seven"));
}

#[test]
fn at_most_one_member_without_pattern() {
    let err = TypeBuilder::new()
        .make_variant(&[parse_word(), parse_number(), parse_word()], VariantOptions::new())
        .unwrap_err();
    assert_eq!(err, Error::AmbiguousVariant { count: 2 });
}

#[test]
fn empty_variant_is_rejected() {
    let err = TypeBuilder::new()
        .make_variant(&[], VariantOptions::new())
        .unwrap_err();
    assert_eq!(err, Error::EmptyVariant);
}

#[test]
fn invalid_member_pattern_is_rejected() {
    let broken = Converter::new("(", |_| Ok(Value::Null));
    let err = TypeBuilder::new()
        .make_variant(&[broken], VariantOptions::new())
        .unwrap_err();
    assert!(matches!(err, Error::Convert(ConvertError::InvalidPattern { .. })));
}

#[test]
fn member_errors_propagate() {
    let overflow = Converter::new(r"\d+", |t| {
        t.parse::<u8>()
            .map(|n| Value::Int(n.into()))
            .map_err(|e| ConvertError::invalid(t, e))
    });
    let variant = TypeBuilder::new()
        .make_variant(&[overflow], VariantOptions::new())
        .unwrap();

    assert_eq!(variant.convert("255").unwrap(), Value::Int(255));
    assert!(matches!(
        variant.convert("256").unwrap_err(),
        ConvertError::Invalid { .. }
    ));
}
