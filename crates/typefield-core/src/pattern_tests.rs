use crate::pattern::anchored;
use crate::{ConvertError, MatchOptions, Matcher, capture_count};

#[test]
fn anchored_wraps_in_non_capturing_group() {
    assert_eq!(anchored("a|b"), "^(?:a|b)$");
}

#[test]
fn capture_count_ignores_non_capturing_groups() {
    assert_eq!(capture_count("a").unwrap(), 0);
    assert_eq!(capture_count("(a)(b)").unwrap(), 2);
    assert_eq!(capture_count("(?:a)(b)").unwrap(), 1);
    assert_eq!(capture_count("(?P<x>a)").unwrap(), 1);
}

#[test]
fn capture_count_rejects_invalid_pattern() {
    let err = capture_count("(a").unwrap_err();
    assert!(matches!(err, ConvertError::InvalidPattern { ref pattern, .. } if pattern == "(a"));
}

#[test]
fn matcher_requires_whole_text() {
    let m = Matcher::new(r"\d+", MatchOptions::default()).unwrap();
    assert!(m.is_match("42"));
    assert!(!m.is_match("42 "));
    assert!(!m.is_match("x42"));
    assert!(!m.is_match(""));
    assert_eq!(m.pattern(), r"\d+");
}

#[test]
fn matcher_anchors_every_alternative() {
    let m = Matcher::new("yes|no", MatchOptions::default()).unwrap();
    assert!(m.is_match("yes"));
    assert!(!m.is_match("yesno"));
    assert!(!m.is_match("nope"));
}

#[test]
fn matcher_case_options() {
    let folded = Matcher::new("yes", MatchOptions::default()).unwrap();
    assert!(folded.is_match("YES"));

    let exact = Matcher::new("yes", MatchOptions::exact_case()).unwrap();
    assert!(exact.is_match("yes"));
    assert!(!exact.is_match("YES"));
}

#[test]
fn matcher_captures_groups() {
    let m = Matcher::new(r"(\d+)|([a-z]+)", MatchOptions::exact_case()).unwrap();

    let caps = m.captures("abc").unwrap();
    assert!(caps.get_group(1).is_none());
    let span = caps.get_group(2).unwrap();
    assert_eq!(&"abc"[span.range()], "abc");

    assert!(m.captures("ABC").is_none());
}

#[test]
fn options_builder() {
    assert!(MatchOptions::new().case_insensitive);
    assert!(!MatchOptions::new().case_insensitive(false).case_insensitive);
    assert_eq!(MatchOptions::exact_case(), MatchOptions::new().case_insensitive(false));
}
