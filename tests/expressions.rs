//! End-to-end behavior of styling and both expression dialects.

use proptest::prelude::*;
use tinct::{
    expand_positional, expand_tokens, palette, styler, wrap, ExpandError, Segment, Style,
};

#[test]
fn wrap_and_expression_agree_on_styled_output() {
    let wrapped = wrap("Hello", &[Style::RED]);
    let expanded = expand_positional("@(Hello)", &[Style::RED]).unwrap();
    assert_eq!(wrapped, expanded);
}

#[test]
fn positional_spans_claim_styles_in_order() {
    let out = expand_positional(
        "@(error): @(file not found) at @(line 3)",
        &[Style::RED.bold(), Style::WHITE, Style::CYAN],
    )
    .unwrap();
    assert!(out.starts_with("\x1b[1m\x1b[31merror\x1b[39m\x1b[0m"));
    assert!(out.contains("\x1b[37mfile not found\x1b[39m"));
    assert!(out.ends_with("\x1b[36mline 3\x1b[39m"));
}

#[test]
fn positional_mismatch_carries_both_counts() {
    let err = expand_positional("@(a) and @(b)", &[Style::RED]).unwrap_err();
    assert_eq!(
        err,
        ExpandError::StyleCountMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn token_mode_mixes_axes_in_one_template() {
    let out = expand_tokens("+r|Ashish|+ is a c|cool|! guy").unwrap();
    assert_eq!(out, "\x1b[41mAshish\x1b[49m is a \x1b[36mcool\x1b[39m guy");
}

#[test]
fn hyperlink_label_round_trips_through_wrap() {
    let out = wrap("docs", &[Style::hyperlink("https://example.com/docs")]);
    assert_eq!(
        out,
        "\x1b]8;;https://example.com/docs\x1b\\docs\x1b]8;;\x1b\\"
    );
}

#[test]
fn escapes_compose_and_are_never_deduplicated() {
    let once = wrap("x", &[Style::GREEN]);
    let twice = wrap(&once, &[Style::GREEN]);
    assert_eq!(twice.matches("\x1b[32m").count(), 2);
    assert_eq!(twice.matches("\x1b[39m").count(), 2);
}

#[test]
fn palette_of_expression_output() {
    let status = palette(&[
        Segment::new("PASS", &[Style::BG_GREEN, Style::BLACK]),
        Segment::new("12 tests", &[Style::NORMAL]),
    ]);
    assert_eq!(
        status,
        "\x1b[30m\x1b[42mPASS\x1b[49m\x1b[39m \x1b[0m12 tests\x1b[0m"
    );
}

proptest! {
    // Identity law: markup-free input passes through every entry point
    // unchanged.
    #[test]
    fn markup_free_text_is_unchanged(text in "[a-zA-Z0-9 .,;:!?-]{0,64}") {
        prop_assert_eq!(wrap(&text, &[]), text.clone());
        prop_assert_eq!(expand_positional(&text, &[]).unwrap(), text.clone());
        prop_assert_eq!(expand_tokens(&text).unwrap(), text);
    }

    #[test]
    fn single_style_wrap_law(text in "[a-zA-Z0-9 ]{0,32}") {
        let out = wrap(&text, &[Style::GREEN]);
        prop_assert!(out.starts_with(Style::GREEN.open()));
        prop_assert!(out.ends_with(Style::GREEN.close()));
        prop_assert!(out.contains(&text));
    }

    #[test]
    fn styler_matches_wrap(text in "[a-zA-Z0-9 ]{0,32}") {
        let yellow = styler(vec![Style::YELLOW]);
        prop_assert_eq!(yellow(&text), wrap(&text, &[Style::YELLOW]));
    }

    #[test]
    fn positional_expansion_contains_span_text(text in "[a-zA-Z0-9 ]{1,24}") {
        let template = format!("@({text})");
        let out = expand_positional(&template, &[Style::MAGENTA]).unwrap();
        prop_assert_eq!(out, format!("\x1b[35m{text}\x1b[39m"));
    }
}
