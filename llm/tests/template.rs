//! Tests for template validation and substitution.

use llm::template::{self, DIFF_CONTENT};
use std::collections::BTreeMap;

fn data(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_template_is_valid() {
    let validation = template::validate("");
    assert!(validation.is_valid);
    assert!(validation.errors.is_empty());
}

#[test]
fn recognized_placeholders_are_valid() {
    let validation =
        template::validate("Describe {DIFF_CONTENT} on {BRANCH_NAME} titled {PR_TITLE}");
    assert!(validation.is_valid, "errors: {:?}", validation.errors);
}

#[test]
fn unknown_placeholder_is_rejected() {
    let validation = template::validate("Hello {NAME}");
    assert!(!validation.is_valid);
    assert!(
        validation
            .errors
            .iter()
            .any(|e| e.contains("unknown placeholder") && e.contains("NAME"))
    );
}

#[test]
fn mismatched_braces_are_rejected() {
    let validation = template::validate("Diff: {DIFF_CONTENT");
    assert!(!validation.is_valid);
    assert!(validation.errors.iter().any(|e| e.contains("mismatched braces")));
}

#[test]
fn placeholder_with_spaces_is_invalid_format() {
    let validation = template::validate("{DIFF CONTENT}");
    assert!(!validation.is_valid);
    assert!(
        validation
            .errors
            .iter()
            .any(|e| e.contains("invalid placeholder format"))
    );
}

#[test]
fn script_tags_are_rejected() {
    let validation = template::validate("Summary <ScRiPt>alert(1)</script> {DIFF_CONTENT}");
    assert!(!validation.is_valid);
    assert!(
        validation
            .errors
            .iter()
            .any(|e| e.contains("script tags not allowed"))
    );
}

#[test]
fn all_errors_are_collected_in_one_pass() {
    let validation = template::validate("{BAD NAME} {NOPE} <script>");
    assert!(!validation.is_valid);
    // Format error, unknown placeholder, and script tag all reported together.
    assert!(validation.errors.len() >= 3, "errors: {:?}", validation.errors);
}

#[test]
fn substitute_replaces_bound_placeholders() {
    let out = template::substitute(
        "Diff: {DIFF_CONTENT} from {SOURCE_BRANCH}",
        &data(&[(DIFF_CONTENT, "+line"), ("SOURCE_BRANCH", "feature/x")]),
    );
    assert_eq!(out, "Diff: +line from feature/x");
}

#[test]
fn substitute_leaves_unbound_placeholders_verbatim() {
    let out = template::substitute("Diff: {DIFF_CONTENT} on {BRANCH_NAME}", &data(&[]));
    assert_eq!(out, "Diff: {DIFF_CONTENT} on {BRANCH_NAME}");
}

#[test]
fn substitute_empty_data_is_identity_for_valid_templates() {
    let template = "A {PR_TITLE} with {COMMIT_MESSAGES} and {FILE_SUMMARY}";
    assert_eq!(template::substitute(template, &data(&[])), template);
}

#[test]
fn substitute_repeated_placeholder_replaces_every_occurrence() {
    let out = template::substitute(
        "{PR_TITLE} / {PR_TITLE}",
        &data(&[("PR_TITLE", "fix races")]),
    );
    assert_eq!(out, "fix races / fix races");
}

#[test]
fn substitute_ignores_malformed_spans() {
    let out = template::substitute("keep {not a name} as-is", &data(&[("PR_TITLE", "x")]));
    assert_eq!(out, "keep {not a name} as-is");
}
