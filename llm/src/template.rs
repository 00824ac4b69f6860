//! Template validation and substitution.
//!
//! Templates are plain strings with `{NAME}` placeholders drawn from a fixed
//! whitelist. Validation collects every applicable error instead of failing
//! fast, so a caller can fix a template in one pass. Substitution leaves
//! unresolved placeholders verbatim so they surface in debugging output
//! rather than vanishing silently.

use std::collections::BTreeMap;

/// Reserved key for the size-governed input field.
pub const DIFF_CONTENT: &str = "DIFF_CONTENT";

/// Recognized placeholder names.
pub const PLACEHOLDERS: &[&str] = &[
    DIFF_CONTENT,
    "BRANCH_NAME",
    "SOURCE_BRANCH",
    "TARGET_BRANCH",
    "PR_TITLE",
    "COMMIT_MESSAGES",
    "FILE_SUMMARY",
];

/// Outcome of [`validate`].
#[derive(Debug, Clone)]
pub struct Validation {
    /// Whether the template may be substituted and sent.
    pub is_valid: bool,
    /// Every validation error found, in document order.
    pub errors: Vec<String>,
}

/// Validate a template against the placeholder grammar and whitelist.
///
/// An empty template is valid (substitution degenerates to a no-op).
pub fn validate(template: &str) -> Validation {
    let mut errors = Vec::new();

    let opens = template.matches('{').count();
    let closes = template.matches('}').count();
    if opens != closes {
        errors.push("mismatched braces".to_string());
    }

    for span in spans(template) {
        let name = &span[1..span.len() - 1];
        if name.is_empty() || !name.chars().all(is_word) {
            errors.push(format!("invalid placeholder format: {span}"));
        } else if !PLACEHOLDERS.contains(&name) {
            errors.push(format!("unknown placeholder: {name}"));
        }
    }

    // Stored templates can end up rendered as HTML downstream.
    if template.to_ascii_lowercase().contains("<script") {
        errors.push("script tags not allowed".to_string());
    }

    Validation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Substitute every `{NAME}` whose name is bound in `data`.
///
/// Unresolved or malformed placeholders are copied through unchanged.
pub fn substitute(template: &str, data: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('}') {
            Some(end) => {
                let name = &tail[1..end];
                match data.get(name) {
                    Some(value) if !name.is_empty() && name.chars().all(is_word) => {
                        out.push_str(value);
                    }
                    _ => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
            }
            None => {
                // Unterminated placeholder; keep the rest as-is.
                out.push_str(tail);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Iterate over `{...}` spans, shortest-first from each opening brace.
fn spans(template: &str) -> impl Iterator<Item = &str> {
    let mut rest = template;
    std::iter::from_fn(move || {
        let start = rest.find('{')?;
        let tail = &rest[start..];
        // The span ends at the first closing brace; a second opening brace
        // before it still belongs to this (malformed) span.
        match tail.find('}') {
            Some(end) => {
                let span = &tail[..=end];
                rest = &tail[end + 1..];
                Some(span)
            }
            None => {
                rest = "";
                None
            }
        }
    })
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
