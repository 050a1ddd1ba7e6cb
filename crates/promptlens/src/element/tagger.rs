//! Element tagging: scan prompt text against the rule table.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::rule::{names, ElementRuleSet, RuleDiagnostic};

/// RAG-shaped structure: a context-like marker followed anywhere later in
/// the text (across lines) by a question-like marker.
static RAG_STRUCTURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)\b(context:|based on\b).*\b(question:|what is\b|how does\b)")
        .expect("RAG structure pattern is valid")
});

/// A matched element occurrence in the prompt text.
///
/// Offsets are character positions (not bytes): hosts address prompt text
/// by character when placing highlights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSpan {
    /// Name of the matched element rule.
    pub element: String,
    /// Character offset of the match start.
    pub start: usize,
    /// Character offset one past the match end.
    pub end: usize,
}

/// Aggregate measurements from a tagging pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    /// Whitespace-delimited token count.
    pub word_count: usize,
    /// Number of "Example Marker" matches.
    pub examples_found: usize,
    /// Whether any "CoT Trigger" match occurred.
    pub cot_trigger_found: bool,
    /// Two or more example markers present.
    pub few_shot_structure_detected: bool,
    /// A chain-of-thought trigger phrase is present.
    pub cot_structure_detected: bool,
    /// Context-then-question structure is present.
    pub rag_structure_detected: bool,
}

/// Result of tagging a prompt: element spans plus aggregate details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResult {
    /// Spans in rule-table order, then match order within each rule.
    pub spans: Vec<TaggedSpan>,
    /// Aggregate counts and structural detections.
    pub details: AnalysisDetails,
}

impl TagResult {
    /// Distinct element names with at least one span, in span order.
    pub fn found_elements(&self) -> IndexSet<String> {
        self.spans.iter().map(|s| s.element.clone()).collect()
    }
}

/// Scans prompt text against an ordered table of element rules.
pub struct ElementTagger {
    rules: Vec<(String, Regex)>,
    diagnostics: Vec<RuleDiagnostic>,
}

impl ElementTagger {
    /// Create a tagger with the built-in rule table.
    pub fn new() -> Self {
        Self::with_rules(&ElementRuleSet::default())
    }

    /// Create a tagger from a custom rule set.
    ///
    /// Rules whose patterns fail to compile are skipped and reported via
    /// [`ElementTagger::diagnostics`]; the remaining rules still apply.
    pub fn with_rules(rule_set: &ElementRuleSet) -> Self {
        let mut rules = Vec::with_capacity(rule_set.len());
        let mut diagnostics = Vec::new();

        for rule in rule_set.iter() {
            match rule.compile() {
                Ok(regex) => rules.push((rule.name.clone(), regex)),
                Err(e) => diagnostics.push(RuleDiagnostic {
                    rule: rule.name.clone(),
                    message: e.to_string(),
                }),
            }
        }

        Self { rules, diagnostics }
    }

    /// Diagnostics for rules skipped at construction.
    pub fn diagnostics(&self) -> &[RuleDiagnostic] {
        &self.diagnostics
    }

    /// Tag the prompt text, producing spans and aggregate details.
    pub fn tag(&self, text: &str) -> TagResult {
        let mut spans = Vec::new();
        let mut details = AnalysisDetails {
            word_count: text.split_whitespace().count(),
            ..AnalysisDetails::default()
        };

        for (name, regex) in &self.rules {
            // find_iter yields matches in ascending byte order, so char
            // offsets can be accumulated in one pass over the text.
            let mut byte_pos = 0;
            let mut char_pos = 0;

            for m in regex.find_iter(text) {
                char_pos += text[byte_pos..m.start()].chars().count();
                let start = char_pos;
                char_pos += text[m.start()..m.end()].chars().count();
                byte_pos = m.end();

                if name == names::EXAMPLE_MARKER {
                    details.examples_found += 1;
                }
                if name == names::COT_TRIGGER {
                    details.cot_trigger_found = true;
                }

                spans.push(TaggedSpan {
                    element: name.clone(),
                    start,
                    end: char_pos,
                });
            }
        }

        details.rag_structure_detected = RAG_STRUCTURE.is_match(text);
        details.few_shot_structure_detected = details.examples_found >= 2;
        details.cot_structure_detected = details.cot_trigger_found;

        TagResult { spans, details }
    }
}

impl Default for ElementTagger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::rule::ElementRule;

    #[test]
    fn test_empty_text_yields_nothing() {
        let tagger = ElementTagger::new();
        for text in ["", "   ", "\n\t  \n"] {
            let result = tagger.tag(text);
            assert!(result.spans.is_empty());
            assert_eq!(result.details.word_count, 0);
            assert!(!result.details.rag_structure_detected);
        }
    }

    #[test]
    fn test_scenario_elements() {
        let tagger = ElementTagger::new();
        let result = tagger.tag("Summarize the following text. ### Input: The quick brown fox.");

        let found = result.found_elements();
        assert!(found.contains("Instruction"));
        assert!(found.contains("Delimiter"));
        assert!(found.contains("Input Data"));
        assert_eq!(result.details.word_count, 10);
    }

    #[test]
    fn test_spans_use_character_offsets() {
        let tagger = ElementTagger::new();
        // "é" is two bytes but one character.
        let result = tagger.tag("Café mood: summarize it");

        let span = result
            .spans
            .iter()
            .find(|s| s.element == "Instruction")
            .unwrap();
        assert_eq!(span.start, 11);
        assert_eq!(span.end, 20);
    }

    #[test]
    fn test_example_counting_and_few_shot() {
        let tagger = ElementTagger::new();
        let result = tagger.tag("Example 1:\nInput: a\nOutput: b\n\nExample 2:\nInput: c\nOutput: d");

        assert_eq!(result.details.examples_found, 2);
        assert!(result.details.few_shot_structure_detected);
    }

    #[test]
    fn test_single_example_is_not_few_shot() {
        let tagger = ElementTagger::new();
        let result = tagger.tag("Example 1:\nInput: a\nOutput: b");

        assert_eq!(result.details.examples_found, 1);
        assert!(!result.details.few_shot_structure_detected);
    }

    #[test]
    fn test_cot_trigger_detection() {
        let tagger = ElementTagger::new();
        let result = tagger.tag("What is 5 * (3 + 2)?\n\nLet's think step-by-step:");

        assert!(result.details.cot_trigger_found);
        assert!(result.details.cot_structure_detected);
    }

    #[test]
    fn test_rag_structure_across_lines() {
        let tagger = ElementTagger::new();
        let result = tagger.tag("Context: the 2019 survey results\n...\nQuestion: what changed?");
        assert!(result.details.rag_structure_detected);

        let reversed = tagger.tag("Question: what changed?\nContext: the 2019 survey results");
        assert!(!reversed.details.rag_structure_detected);
    }

    #[test]
    fn test_malformed_rule_is_skipped() {
        let rules = ElementRuleSet::new(vec![
            ElementRule::new("Broken", "(unclosed"),
            ElementRule::new("Greeting", r"(?i)\bhello\b"),
        ]);
        let tagger = ElementTagger::with_rules(&rules);

        assert_eq!(tagger.diagnostics().len(), 1);
        assert_eq!(tagger.diagnostics()[0].rule, "Broken");

        let result = tagger.tag("Hello world");
        assert_eq!(result.spans.len(), 1);
        assert_eq!(result.spans[0].element, "Greeting");
    }

    #[test]
    fn test_determinism() {
        let tagger = ElementTagger::new();
        let text = "Act as a translator. Example 1: bonjour. Example 2: merci. ### Input: hola";
        assert_eq!(tagger.tag(text), tagger.tag(text));
    }
}
