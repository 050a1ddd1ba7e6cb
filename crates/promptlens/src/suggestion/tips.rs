//! General best-practice tips catalog.

use serde::{Deserialize, Serialize};

/// Topic keys for tips the engine suppresses when a specific suggestion
/// already covers the same ground.
pub mod topics {
    pub const BE_SPECIFIC: &str = "Be Specific";
    pub const USE_ACTION_VERBS: &str = "Use Action Verbs";
    pub const STRUCTURE_INPUT_OUTPUT: &str = "Structure Input/Output";
    pub const AVOID_NEGATIONS: &str = "Avoid Negations";
}

/// A general best-practice reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralTip {
    /// Topic key (unique, used for suppression).
    pub topic: String,
    /// One-line actionable advice.
    pub advice: String,
}

impl GeneralTip {
    /// Create a tip entry.
    pub fn new(topic: impl Into<String>, advice: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            advice: advice.into(),
        }
    }
}

/// The built-in nine-tip catalog, in declared (display) order.
pub fn default_tips() -> Vec<GeneralTip> {
    vec![
        GeneralTip::new(
            topics::BE_SPECIFIC,
            "Clearly define the task, desired output, and any constraints. Avoid ambiguity.",
        ),
        GeneralTip::new(
            topics::USE_ACTION_VERBS,
            "Start instructions with clear verbs like 'Summarize', 'Generate', 'Translate', 'Analyze'.",
        ),
        GeneralTip::new(
            topics::STRUCTURE_INPUT_OUTPUT,
            "Use delimiters (###, ```), Markdown, JSON, or XML for clarity, especially with complex inputs or multiple parts.",
        ),
        GeneralTip::new(
            "Provide Context",
            "Give necessary background information, especially if the task requires domain knowledge or specific scenario understanding.",
        ),
        GeneralTip::new(
            topics::AVOID_NEGATIONS,
            "Instead of 'Don't use jargon', say 'Explain in simple terms'. State the desired outcome positively.",
        ),
        GeneralTip::new(
            "Break Down Tasks",
            "For complex goals, use Prompt Chaining or outline steps clearly within a single prompt.",
        ),
        GeneralTip::new(
            "Consider Role Playing",
            "Use 'Act as a...' (Role element) to set a persona or expertise level (Directional Stimulus).",
        ),
        GeneralTip::new(
            "Specify Constraints",
            "Define length limits, tone, style, or information to include/exclude (Output Format).",
        ),
        GeneralTip::new(
            "Iterate and Refine",
            "Prompting is often iterative; test results and adjust your prompt based on the output.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tips_order() {
        let tips = default_tips();
        assert_eq!(tips.len(), 9);
        assert_eq!(tips[0].topic, "Be Specific");
        assert_eq!(tips[8].topic, "Iterate and Refine");
    }
}
