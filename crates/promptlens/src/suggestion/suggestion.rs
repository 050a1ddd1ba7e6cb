//! Suggestion types for prompt-improvement advice.

use serde::{Deserialize, Serialize};

/// Category of a suggestion, in rough display-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Informational only (e.g., the prompt is empty).
    Info,
    /// A structural element is missing and should be added.
    Warning,
    /// A concrete improvement for the current prompt.
    Tip,
    /// A prompting technique worth considering.
    Technique,
    /// A general best-practice reminder.
    GeneralTip,
}

impl SuggestionKind {
    /// Get the list marker shown before the label.
    pub fn marker(&self) -> &'static str {
        match self {
            SuggestionKind::Info => "[INFO]",
            SuggestionKind::Warning => "[!]",
            SuggestionKind::Tip => "[TIP]",
            SuggestionKind::Technique => "[TECHNIQUE]",
            SuggestionKind::GeneralTip => "[GENERAL TIP]",
        }
    }
}

/// An advisory message produced by the suggestion engine.
///
/// The label is the short list entry; the detail is the longer explanation
/// shown on demand. List position is priority: suggestions are emitted in
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Category of the suggestion.
    pub kind: SuggestionKind,
    /// Short label used as the list entry.
    pub label: String,
    /// Longer explanation for on-demand disclosure.
    pub detail: String,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(
        kind: SuggestionKind,
        label: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            detail: detail.into(),
        }
    }

    /// Label prefixed with the kind marker, as shown in suggestion lists.
    pub fn display_label(&self) -> String {
        format!("{} {}", self.kind.marker(), self.label)
    }
}
