//! Pattern rules for structural prompt elements.
//!
//! The default table recognizes eight element categories (instructions,
//! context markers, delimiters, example markers, ...). Each rule pairs a
//! display name with a regex source; rules are evaluated in the table's
//! declared order, so the table itself defines span ordering.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{PromptLensError, Result};

/// Well-known element names from the built-in rule table.
///
/// The suggestion engine keys several conditions off these names, so they
/// are shared constants rather than repeated string literals.
pub mod names {
    pub const INSTRUCTION: &str = "Instruction";
    pub const CONTEXT: &str = "Context";
    pub const INPUT_DATA: &str = "Input Data";
    pub const OUTPUT_FORMAT: &str = "Output Format";
    pub const ROLE: &str = "Role";
    pub const DELIMITER: &str = "Delimiter";
    pub const EXAMPLE_MARKER: &str = "Example Marker";
    pub const COT_TRIGGER: &str = "CoT Trigger";
}

/// A named pattern rule for one structural prompt element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementRule {
    /// Display name of the element (unique within a rule set).
    pub name: String,
    /// Regex source matched against the prompt text.
    pub pattern: String,
}

impl ElementRule {
    /// Create a new rule.
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Compile the rule's pattern.
    pub fn compile(&self) -> Result<Regex> {
        Ok(Regex::new(&self.pattern)?)
    }
}

/// Diagnostic emitted when a rule's pattern fails to compile.
///
/// A bad pattern is an authoring defect, not a runtime input error: the
/// rule is skipped and tagging continues with the rest of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDiagnostic {
    /// Name of the rule that was skipped.
    pub rule: String,
    /// Compiler message for the bad pattern.
    pub message: String,
}

/// An ordered table of element rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementRuleSet {
    rules: Vec<ElementRule>,
}

impl ElementRuleSet {
    /// Create a rule set from an ordered list of rules.
    pub fn new(rules: Vec<ElementRule>) -> Self {
        Self { rules }
    }

    /// Load a rule set from a JSON array of `{name, pattern}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rules: Vec<ElementRule> = serde_json::from_str(json)?;
        let set = Self::new(rules);
        set.check_unique_names()?;
        Ok(set)
    }

    /// Load a rule set from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PromptLensError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementRule> {
        self.rules.iter()
    }

    fn check_unique_names(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.name.as_str()) {
                return Err(PromptLensError::Config(format!(
                    "duplicate element rule name: '{}'",
                    rule.name
                )));
            }
        }
        Ok(())
    }
}

impl Default for ElementRuleSet {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

/// The built-in eight-element rule table, in evaluation order.
///
/// Keyword sets are fixed; changing them changes which prompts are
/// recognized as structured. Alternatives that end in `:` terminate
/// themselves, so the trailing word-boundary assertion is only applied to
/// alternatives that end in a word character.
pub fn default_rules() -> Vec<ElementRule> {
    vec![
        ElementRule::new(
            names::INSTRUCTION,
            r"(?i)\b(summarize|translate|write|explain|list|create|generate|classify|analyze|compare|define|calculate|tell me|what is|how does|why is|act as|provide|describe|identify)\b",
        ),
        ElementRule::new(
            names::CONTEXT,
            r"(?i)\b(given the context\b|based on this text\b|considering the following\b|with this information\b|background:|scenario:|context:)",
        ),
        ElementRule::new(
            names::INPUT_DATA,
            r"(?i)\b(input:|data:|text:|article:|example:|document:|user query:|information:)",
        ),
        ElementRule::new(
            names::OUTPUT_FORMAT,
            r"(?i)\b(format as|output in|use bullet points|provide a json|return a list|in xml|step-by-step|in markdown|as a table|limit to|maximum|minimum)\b",
        ),
        ElementRule::new(
            names::ROLE,
            r"(?i)\b(you are a|act as a|your role is|assume the persona of)\b",
        ),
        ElementRule::new(names::DELIMITER, r#"(###|---|"""|```|<[a-zA-Z_]+>|##)"#),
        ElementRule::new(
            names::EXAMPLE_MARKER,
            r"(?i)\b(example \d+:|example:|e\.g\.:)",
        ),
        ElementRule::new(
            names::COT_TRIGGER,
            r"(?i)\b(let'?s think step-by-step|think step by step|step-by-step reasoning)\b",
        ),
    ]
}
