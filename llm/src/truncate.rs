//! Truncation policy for the size-governed input field.
//!
//! Pure and deterministic: identical `text` and `limit` always produce the
//! identical output, which makes the policy trivially property-testable.

/// Marker appended to any value cut for exceeding its size limit. Signals
/// to downstream consumers (including the backend itself) that content was
/// shortened.
pub const TRUNCATION_MARKER: &str = "\n\n[... diff truncated ...]";

/// Outcome of [`truncate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated {
    /// The bounded text, marker included when cut.
    pub text: String,
    /// Whether anything was cut.
    pub was_truncated: bool,
}

/// Bound `text` to at most `limit` bytes, plus the marker when cut.
///
/// The cut position backs off to the last line break when that break sits at
/// or beyond 80% of `limit` — splitting mid-line is avoided for the common
/// case while worst-case waste stays bounded at 20%.
pub fn truncate(text: &str, limit: usize) -> Truncated {
    if text.len() <= limit {
        return Truncated {
            text: text.to_owned(),
            was_truncated: false,
        };
    }

    let mut cut = limit;
    while cut > 0 && !text.is_char_boundary(cut) {
        cut -= 1;
    }

    let floor = limit * 4 / 5;
    if let Some(pos) = text[..cut].rfind('\n')
        && pos >= floor
    {
        cut = pos;
    }

    let mut out = String::with_capacity(cut + TRUNCATION_MARKER.len());
    out.push_str(&text[..cut]);
    out.push_str(TRUNCATION_MARKER);

    Truncated {
        text: out,
        was_truncated: true,
    }
}
