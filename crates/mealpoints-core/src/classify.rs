//! Category inference from free-text transaction notes.
//!
//! Convenience spend has no structured sub-category column; the category is
//! a heuristic read off the note (`"Laundry: dorm"`, `"Grocery: milk"`).
//! The heuristic lives behind a narrow trait so a future structured-category
//! migration only touches this one seam.

/// Label used when a note carries no usable token.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Derives a category label from an optional free-text note.
///
/// Implementations must be total: never panic, never return an empty label.
pub trait NoteClassifier {
    fn classify(&self, note: Option<&str>) -> String;
}

/// Default classifier: a colon-delimited prefix wins, otherwise the first
/// whitespace-delimited token, otherwise [`FALLBACK_CATEGORY`].
///
/// A colon at index 0 falls through to the token branch. That precedence is
/// load-bearing for existing category lists and must not be "fixed" here.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixClassifier;

impl NoteClassifier for PrefixClassifier {
    fn classify(&self, note: Option<&str>) -> String {
        let Some(note) = note else {
            return FALLBACK_CATEGORY.to_string();
        };
        if let Some(idx) = note.find(':') {
            if idx > 0 {
                let prefix = note[..idx].trim();
                if !prefix.is_empty() {
                    return prefix.to_string();
                }
            }
        }
        note.split_whitespace()
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string())
    }
}
