//! Rule-based suggestion generation from tagging results.
//!
//! The engine evaluates a fixed sequence of structural checks, then
//! recommends prompting techniques (structural detections first, keyword
//! heuristics as fallback), then fills the list with general tips up to a
//! target size. Given identical input, the output list is identical:
//! nothing here consults clocks, randomness, or iteration order of
//! unordered collections.

use std::collections::BTreeSet;

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::element::rule::names;
use crate::element::AnalysisDetails;
use crate::technique::{keys, TechniqueCatalog};

use super::suggestion::{Suggestion, SuggestionKind};
use super::tips::{default_tips, topics, GeneralTip};

/// Word count below which a prompt is considered brief.
const LOW_DETAIL_WORD_LIMIT: usize = 10;
/// Word count above which an explicit output format is worth suggesting.
const OUTPUT_FORMAT_WORD_MIN: usize = 20;
/// Word count above which delimiters are worth suggesting.
const DELIMITER_WORD_MIN: usize = 30;
/// Target list size; general tips only fill up to this count.
const SUGGESTION_TARGET: usize = 5;

/// Whole-word negation phrasing.
static NEGATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(not|don't|never|avoid|without)\b").expect("negation pattern is valid")
});

/// Reasoning-task verbs used by the CoT keyword fallback. Matched against
/// the lower-cased text.
static REASONING_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(calculate|math|logic|reason|solve)\b").expect("reasoning pattern is valid")
});

/// Generates advisory suggestions from a prompt and its tagging results.
pub struct SuggestionEngine {
    techniques: TechniqueCatalog,
    tips: Vec<GeneralTip>,
}

impl SuggestionEngine {
    /// Create an engine with the built-in catalogs.
    pub fn new() -> Self {
        Self::with_catalogs(TechniqueCatalog::default(), default_tips())
    }

    /// Create an engine with custom catalogs.
    pub fn with_catalogs(techniques: TechniqueCatalog, tips: Vec<GeneralTip>) -> Self {
        Self { techniques, tips }
    }

    /// The technique catalog this engine recommends from.
    pub fn techniques(&self) -> &TechniqueCatalog {
        &self.techniques
    }

    /// Produce the ordered suggestion list for a prompt.
    ///
    /// `found_elements` and `details` are the outputs of
    /// [`ElementTagger::tag`](crate::element::ElementTagger::tag) for the
    /// same text.
    pub fn suggest(
        &self,
        text: &str,
        found_elements: &IndexSet<String>,
        details: &AnalysisDetails,
    ) -> Vec<Suggestion> {
        if text.trim().is_empty() {
            return vec![Suggestion::new(
                SuggestionKind::Info,
                "Start by typing or loading a template.",
                "The prompt is empty. Type your prompt, or load one of the technique \
                 templates as a starting point.",
            )];
        }

        let mut suggestions = Vec::new();
        let mut instruction_warning = false;
        let mut negation_tip = false;
        let mut delimiter_tip = false;

        if !found_elements.contains(names::INSTRUCTION) {
            instruction_warning = true;
            suggestions.push(Suggestion::new(
                SuggestionKind::Warning,
                "Add Clear Instruction",
                "Missing Instruction:\n\nClearly state the main task using action verbs \
                 (e.g., 'Summarize', 'Explain', 'Generate'). This is crucial for the LLM \
                 to understand the goal.",
            ));
        }

        if details.word_count < LOW_DETAIL_WORD_LIMIT && !details.few_shot_structure_detected {
            suggestions.push(Suggestion::new(
                SuggestionKind::Tip,
                "Consider More Detail/Context",
                "Brief Prompt:\n\nIf the task is complex or requires specific background, \
                 consider adding more context, details, constraints, or examples.",
            ));
        }

        if NEGATION.is_match(text) {
            negation_tip = true;
            suggestions.push(Suggestion::new(
                SuggestionKind::Tip,
                "Rephrase Negations Positively",
                "Avoid Negations:\n\nInstead of saying what *not* to do (e.g., 'don't be \
                 vague'), state the desired outcome positively (e.g., 'be specific and \
                 detailed'). This is usually clearer for the LLM.",
            ));
        }

        if !found_elements.contains(names::OUTPUT_FORMAT)
            && details.word_count > OUTPUT_FORMAT_WORD_MIN
        {
            suggestions.push(Suggestion::new(
                SuggestionKind::Tip,
                "Specify Output Format?",
                "Consider Output Format:\n\nFor clearer results, especially with complex \
                 outputs, explicitly state the desired format (e.g., 'Format as a JSON \
                 object with keys X and Y', 'Use bullet points for the main ideas', \
                 'Create a markdown table with columns A, B, C').",
            ));
        }

        if !found_elements.contains(names::DELIMITER)
            && details.word_count > DELIMITER_WORD_MIN
            && (details.examples_found > 0
                || found_elements.contains(names::CONTEXT)
                || found_elements.contains(names::INPUT_DATA))
        {
            delimiter_tip = true;
            suggestions.push(Suggestion::new(
                SuggestionKind::Tip,
                "Use Delimiters for Structure?",
                "Consider Delimiters:\n\nFor prompts with multiple distinct parts \
                 (instructions, context, examples, input), using delimiters like '###', \
                 '---', or ``` can improve clarity and help the LLM parse the sections \
                 correctly.",
            ));
        }

        for key in self.technique_candidates(text, details) {
            if let Some(technique) = self.techniques.get(key) {
                suggestions.push(Suggestion::new(
                    SuggestionKind::Technique,
                    format!("Consider {}", technique.key),
                    format!(
                        "Technique: {}\n\n{}\n\nUse Case: {}",
                        technique.key, technique.description, technique.use_case
                    ),
                ));
            }
        }

        for tip in &self.tips {
            if suggestions.len() >= SUGGESTION_TARGET {
                break;
            }
            if instruction_warning
                && (tip.topic == topics::BE_SPECIFIC || tip.topic == topics::USE_ACTION_VERBS)
            {
                continue;
            }
            if delimiter_tip && tip.topic == topics::STRUCTURE_INPUT_OUTPUT {
                continue;
            }
            if negation_tip && tip.topic == topics::AVOID_NEGATIONS {
                continue;
            }
            suggestions.push(Suggestion::new(
                SuggestionKind::GeneralTip,
                tip.topic.clone(),
                format!("General Tip: {}\n\n{}", tip.topic, tip.advice),
            ));
        }

        suggestions
    }

    /// Candidate technique keys, alphabetical.
    ///
    /// Structural detections take precedence; the keyword heuristics are
    /// only consulted when no structure was detected.
    fn technique_candidates(&self, text: &str, details: &AnalysisDetails) -> Vec<&str> {
        let mut candidates: BTreeSet<&str> = BTreeSet::new();

        if details.few_shot_structure_detected && self.techniques.contains(keys::FEW_SHOT) {
            candidates.insert(keys::FEW_SHOT);
        }
        if details.cot_structure_detected && self.techniques.contains(keys::COT) {
            candidates.insert(keys::COT);
        }
        if details.rag_structure_detected && self.techniques.contains(keys::RAG) {
            candidates.insert(keys::RAG);
        }

        if candidates.is_empty() {
            let lower = text.to_lowercase();

            if lower.contains("example") && lower.contains("input") && lower.contains("output") {
                if self.techniques.contains(keys::FEW_SHOT) {
                    candidates.insert(keys::FEW_SHOT);
                }
            }
            if lower.contains("step-by-step") || REASONING_WORDS.is_match(&lower) {
                if self.techniques.contains(keys::COT) {
                    candidates.insert(keys::COT);
                }
            }
            if lower.contains("context") && lower.contains("question")
                || lower.contains("document")
                || lower.contains("based on")
            {
                if self.techniques.contains(keys::RAG) {
                    candidates.insert(keys::RAG);
                }
            }
            if lower.contains("act as")
                || lower.contains("you are a")
                || lower.contains("style of")
                || lower.contains("explain like i'm")
            {
                if self.techniques.contains(keys::DIRECTIONAL_STIMULUS) {
                    candidates.insert(keys::DIRECTIONAL_STIMULUS);
                }
            }
            if lower.contains("code")
                || lower.contains("python")
                || lower.contains("javascript")
                || lower.contains("function")
            {
                if self.techniques.contains(keys::PAL) {
                    candidates.insert(keys::PAL);
                }
            }
            if lower.contains("thought:")
                && lower.contains("action:")
                && lower.contains("observation:")
            {
                if self.techniques.contains(keys::REACT) {
                    candidates.insert(keys::REACT);
                }
            }
        }

        candidates.into_iter().collect()
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(elements: &[&str]) -> IndexSet<String> {
        elements.iter().map(|e| e.to_string()).collect()
    }

    fn details_with_words(word_count: usize) -> AnalysisDetails {
        AnalysisDetails {
            word_count,
            ..AnalysisDetails::default()
        }
    }

    #[test]
    fn test_empty_prompt_short_circuits() {
        let engine = SuggestionEngine::new();
        for text in ["", "   \n\t"] {
            let suggestions = engine.suggest(text, &found(&[]), &AnalysisDetails::default());
            assert_eq!(suggestions.len(), 1);
            assert_eq!(suggestions[0].kind, SuggestionKind::Info);
            assert!(suggestions[0].label.starts_with("Start by typing"));
        }
    }

    #[test]
    fn test_missing_instruction_warning() {
        let engine = SuggestionEngine::new();
        let suggestions = engine.suggest("hello world", &found(&[]), &details_with_words(2));

        assert_eq!(suggestions[0].kind, SuggestionKind::Warning);
        assert_eq!(suggestions[0].label, "Add Clear Instruction");
    }

    #[test]
    fn test_low_detail_boundary_is_strict() {
        let engine = SuggestionEngine::new();
        let f = found(&["Instruction"]);

        let nine = engine.suggest("placeholder", &f, &details_with_words(9));
        assert!(nine.iter().any(|s| s.label == "Consider More Detail/Context"));

        let ten = engine.suggest("placeholder", &f, &details_with_words(10));
        assert!(!ten.iter().any(|s| s.label == "Consider More Detail/Context"));
    }

    #[test]
    fn test_few_shot_structure_mutes_low_detail_tip() {
        let engine = SuggestionEngine::new();
        let details = AnalysisDetails {
            word_count: 8,
            examples_found: 2,
            few_shot_structure_detected: true,
            ..AnalysisDetails::default()
        };
        let suggestions = engine.suggest("short few-shot stub", &found(&["Instruction"]), &details);
        assert!(!suggestions.iter().any(|s| s.label == "Consider More Detail/Context"));
    }

    #[test]
    fn test_negation_word_boundary() {
        let engine = SuggestionEngine::new();
        let f = found(&["Instruction"]);

        let hit = engine.suggest("please don't ramble", &f, &details_with_words(3));
        assert!(hit.iter().any(|s| s.label == "Rephrase Negations Positively"));

        let miss = engine.suggest("describe the donation drive", &f, &details_with_words(4));
        assert!(!miss.iter().any(|s| s.label == "Rephrase Negations Positively"));
    }

    #[test]
    fn test_output_format_tip_threshold() {
        let engine = SuggestionEngine::new();
        let f = found(&["Instruction"]);

        let at = engine.suggest("placeholder", &f, &details_with_words(20));
        assert!(!at.iter().any(|s| s.label == "Specify Output Format?"));

        let above = engine.suggest("placeholder", &f, &details_with_words(21));
        assert!(above.iter().any(|s| s.label == "Specify Output Format?"));

        let covered = engine.suggest(
            "placeholder",
            &found(&["Instruction", "Output Format"]),
            &details_with_words(21),
        );
        assert!(!covered.iter().any(|s| s.label == "Specify Output Format?"));
    }

    #[test]
    fn test_delimiter_tip_requires_structured_content() {
        let engine = SuggestionEngine::new();
        let details = details_with_words(31);

        // Long, but nothing that would benefit from sectioning.
        let plain = engine.suggest("placeholder", &found(&["Instruction"]), &details);
        assert!(!plain.iter().any(|s| s.label == "Use Delimiters for Structure?"));

        let with_context = engine.suggest(
            "placeholder",
            &found(&["Instruction", "Context"]),
            &details,
        );
        assert!(with_context
            .iter()
            .any(|s| s.label == "Use Delimiters for Structure?"));
    }

    #[test]
    fn test_structural_detection_preempts_keyword_fallback() {
        let engine = SuggestionEngine::new();
        let details = AnalysisDetails {
            word_count: 12,
            examples_found: 2,
            few_shot_structure_detected: true,
            ..AnalysisDetails::default()
        };
        // "python code" would trigger the PAL fallback, but the structural
        // candidate set is non-empty so the fallback is never consulted.
        let suggestions = engine.suggest(
            "classify these python code examples",
            &found(&["Instruction"]),
            &details,
        );

        let techniques: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::Technique)
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(techniques, vec!["Consider Few-shot"]);
    }

    #[test]
    fn test_keyword_fallback_sorted_alphabetically() {
        let engine = SuggestionEngine::new();
        let suggestions = engine.suggest(
            "act as a reviewer and write python code",
            &found(&["Instruction"]),
            &details_with_words(8),
        );

        let techniques: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::Technique)
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            techniques,
            vec![
                "Consider Directional Stimulus",
                "Consider PAL (Program-Aided Language Models)",
            ]
        );
    }

    #[test]
    fn test_react_fallback_needs_all_three_markers() {
        let engine = SuggestionEngine::new();
        let f = found(&["Instruction"]);

        let partial = engine.suggest("Thought: hmm\nAction: look", &f, &details_with_words(4));
        assert!(!partial.iter().any(|s| s.label.contains("ReAct")));

        let full = engine.suggest(
            "Thought: hmm\nAction: look\nObservation: found it",
            &f,
            &details_with_words(6),
        );
        assert!(full.iter().any(|s| s.label == "Consider ReAct (Reason and Act)"));
    }

    #[test]
    fn test_general_tips_fill_to_target() {
        let engine = SuggestionEngine::new();
        // Instruction present, mid-length prompt, nothing else fires except
        // the output-format tip: 1 specific + 4 general tips = 5.
        let suggestions = engine.suggest("placeholder", &found(&["Instruction"]), &details_with_words(21));

        assert_eq!(suggestions.len(), SUGGESTION_TARGET);
        let general: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::GeneralTip)
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            general,
            vec![
                "Be Specific",
                "Use Action Verbs",
                "Structure Input/Output",
                "Provide Context",
            ]
        );
    }

    #[test]
    fn test_suppression_of_covered_topics() {
        let engine = SuggestionEngine::new();
        // Missing instruction + negation: "Be Specific", "Use Action Verbs",
        // and "Avoid Negations" must all be suppressed from the fill.
        let suggestions = engine.suggest(
            "don't be boring",
            &found(&[]),
            &details_with_words(3),
        );

        let labels: Vec<&str> = suggestions.iter().map(|s| s.label.as_str()).collect();
        assert!(labels.contains(&"Add Clear Instruction"));
        assert!(labels.contains(&"Rephrase Negations Positively"));
        assert!(!labels.contains(&"Be Specific"));
        assert!(!labels.contains(&"Use Action Verbs"));
        assert!(!labels.contains(&"Avoid Negations"));
        assert_eq!(suggestions.len(), SUGGESTION_TARGET);
    }

    #[test]
    fn test_determinism() {
        let engine = SuggestionEngine::new();
        let f = found(&["Instruction", "Context"]);
        let details = details_with_words(35);
        assert_eq!(
            engine.suggest("based on the document, what is the answer?", &f, &details),
            engine.suggest("based on the document, what is the answer?", &f, &details),
        );
    }
}
