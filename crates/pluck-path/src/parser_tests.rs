use crate::Selector;
use crate::ast::{Axis, NodeTest, Predicate, Start};

/// Parsed selectors render back to canonical text, which is what the
/// round-trip assertions below lean on.
#[track_caller]
fn roundtrip(input: &str) -> String {
    Selector::parse(input)
        .unwrap_or_else(|e| panic!("parse failed on {input:?}: {e}"))
        .to_string()
}

#[test]
fn absolute_path_with_positions() {
    insta::assert_snapshot!(roundtrip("/html/body/table/tr[2]"), @"/html/body/table/tr[2]");
}

#[test]
fn descendant_prefix() {
    insta::assert_snapshot!(roundtrip("//table/tr[td]"), @"//table/tr[td]");
}

#[test]
fn self_and_attribute_shorthands() {
    insta::assert_snapshot!(roundtrip("."), @".");
    insta::assert_snapshot!(roundtrip("@href"), @"@href");
    insta::assert_snapshot!(roundtrip("a/@href"), @"a/@href");
}

#[test]
fn relative_descendant_keeps_dot_prefix() {
    insta::assert_snapshot!(roundtrip(".//img/@src"), @".//img/@src");
}

#[test]
fn alternation_and_wildcard() {
    insta::assert_snapshot!(roundtrip("h1 | h2 | .//*"), @"h1 | h2 | .//*");
}

#[test]
fn axes_and_text_test() {
    insta::assert_snapshot!(roundtrip("following-sibling::dd"), @"following-sibling::dd");
    insta::assert_snapshot!(roundtrip("ancestor::table/caption"), @"ancestor::table/caption");
    insta::assert_snapshot!(roundtrip("li/text()"), @"li/text()");
}

#[test]
fn whitespace_is_insignificant() {
    insta::assert_snapshot!(roundtrip("  //a / @href "), @"//a/@href");
}

#[test]
fn structural_details() {
    let selector = Selector::parse("//tr[td][2]").unwrap();
    assert_eq!(selector.alternatives.len(), 1);
    let path = &selector.alternatives[0];
    assert_eq!(path.start, Start::Absolute);
    assert_eq!(path.steps.len(), 2);

    let tr = &path.steps[1];
    assert_eq!(tr.axis, Axis::Child);
    assert_eq!(tr.test, NodeTest::Name("tr".to_string()));
    assert!(matches!(tr.predicates[0], Predicate::Exists(_)));
    assert_eq!(tr.predicates[1], Predicate::Index(2));
}

#[test]
fn empty_selector_is_an_error() {
    let err = Selector::parse("").unwrap_err();
    assert_eq!(err.message, "empty selector");

    let err = Selector::parse("   ").unwrap_err();
    assert_eq!(err.message, "empty selector");
}

#[test]
fn error_spans_point_at_offender() {
    let err = Selector::parse("//a[").unwrap_err();
    assert_eq!(err.span, 4..4);

    let err = Selector::parse("a/$b").unwrap_err();
    assert_eq!(err.span, 2..3);
}

#[test]
fn unknown_axis_is_rejected() {
    let err = Selector::parse("preceding::a").unwrap_err();
    assert_eq!(err.message, "unsupported axis `preceding`");
}

#[test]
fn trailing_input_is_rejected() {
    let err = Selector::parse("a]").unwrap_err();
    assert_eq!(err.message, "unexpected trailing input");
}

#[test]
fn tag_named_text_without_parens_is_a_name() {
    let selector = Selector::parse("text").unwrap();
    assert_eq!(
        selector.alternatives[0].steps[0].test,
        NodeTest::Name("text".to_string())
    );
}
