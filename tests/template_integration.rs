//! Integration tests for template resolution and formatting

use insta::{assert_debug_snapshot, assert_snapshot};
use pretty_assertions::assert_eq;

use mungefmt::template::format_positional;
use mungefmt::{format, resolve, resolve_template, FormatError};

#[test]
fn test_empty_meta_becomes_index() {
    assert_eq!(resolve("{} is a {1}"), "{0} is a {1}");
}

#[test]
fn test_same_name_binds_same_argument() {
    assert_eq!(resolve("{x} and {x}"), "{0} and {0}");
    assert_eq!(resolve("{x} and {y}"), "{0} and {1}");
}

#[test]
fn test_escaped_braces_untouched() {
    assert_eq!(resolve("{{literal}}"), "{{literal}}");
}

/// Explicit indices consume a slot of the shared counter, so an implicit
/// placeholder after `{0}` gets index 1, and after `{5}` still gets index 1.
#[test]
fn test_explicit_index_shares_counter_with_implicit() {
    assert_eq!(resolve("{0} {}"), "{0} {1}");
    assert_eq!(resolve("{5} {}"), "{5} {1}");
    assert_eq!(resolve("{} {0} {}"), "{0} {0} {2}");
}

#[test]
fn test_mixed_template_snapshot() {
    let template = "Dear {name}, {} of {count,3} items ({pct:P}) shipped to {name}; ref {{{}}}";
    assert_snapshot!(
        resolve(template),
        @"Dear {0}, {1} of {2,3} items ({3:P}) shipped to {0}; ref {{{4}}}"
    );
}

#[test]
fn test_resolved_template_debug() {
    assert_debug_snapshot!(resolve_template("{who} owes {}"), @r###"
    ResolvedTemplate {
        text: "{0} owes {1}",
        names: [
            (
                "who",
                0,
            ),
        ],
        slots: 2,
    }
    "###);
}

#[test]
fn test_resolution_is_lenient() {
    // nothing is rejected; rewriting simply stops
    assert_eq!(resolve("{a} {b"), "{0} {b");
    assert_eq!(resolve("}{a}"), "}{a}");
}

#[test]
fn test_format_end_to_end() {
    let text = format(
        "{user} logged in {} times; welcome back, {user}!",
        &[&"ada", &3],
    )
    .expect("Should format");
    assert_eq!(text, "ada logged in 3 times; welcome back, ada!");
}

#[test]
fn test_format_with_escapes_and_alignment() {
    let text = format("{{{id,-3}}}|{label,6}|", &[&1, &"ok"]).expect("Should format");
    assert_eq!(text, "{1  }|    ok|");
}

#[test]
fn test_format_reports_missing_argument() {
    let err = format("{a} {b} {c}", &[&1, &2]).unwrap_err();
    assert_eq!(
        err,
        FormatError::IndexOutOfRange {
            index: 2,
            count: 2,
            span: 8..11
        }
    );

    let report = err.report_plain(&resolve("{a} {b} {c}"), "greeting");
    assert!(report.contains("argument 2 requested, 2 supplied"));
    assert!(report.contains("greeting"));
}

#[test]
fn test_format_rejects_unterminated_placeholder() {
    let err = format("{} {oops", &[&1]).unwrap_err();
    assert!(matches!(err, FormatError::UnbalancedBrace { ref span } if span.start == 4));
}

#[test]
fn test_positional_formatter_alone() {
    let text = format_positional("{2}{1}{0}", &[&'c', &'b', &'a']).expect("Should format");
    assert_eq!(text, "abc");
}
