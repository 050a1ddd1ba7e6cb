//! Main PromptAnalyzer struct and public API.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::element::{
    AnalysisDetails, ElementRuleSet, ElementTagger, RuleDiagnostic, TaggedSpan,
};
use crate::suggestion::{GeneralTip, Suggestion, SuggestionEngine, SuggestionKind};
use crate::technique::TechniqueCatalog;

/// Result of analyzing a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Element spans in rule-table order.
    pub spans: Vec<TaggedSpan>,
    /// Aggregate counts and structural detections.
    pub details: AnalysisDetails,
    /// Distinct element names found, in span order.
    pub found_elements: IndexSet<String>,
    /// Ordered advisory suggestions.
    pub suggestions: Vec<Suggestion>,
    /// Summary counts and a one-line recommendation.
    pub summary: AnalysisSummary,
}

/// Summary of an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Whitespace-delimited token count of the prompt.
    pub word_count: usize,
    /// Total element spans tagged.
    pub total_spans: usize,
    /// Number of distinct elements found.
    pub distinct_elements: usize,
    /// Suggestions by kind.
    pub suggestion_counts: SuggestionCounts,
    /// Human-readable recommendation.
    pub recommendation: String,
}

/// Counts of suggestions by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionCounts {
    pub info: usize,
    pub warnings: usize,
    pub tips: usize,
    pub techniques: usize,
    pub general_tips: usize,
}

/// The main prompt analysis engine: element tagging plus suggestions.
///
/// Both halves are pure functions of the input text; an analyzer can be
/// shared freely and invoked repeatedly (e.g., from a debounced editor
/// callback) without coordination.
pub struct PromptAnalyzer {
    tagger: ElementTagger,
    engine: SuggestionEngine,
}

impl PromptAnalyzer {
    /// Create an analyzer with the built-in rule table and catalogs.
    pub fn new() -> Self {
        Self {
            tagger: ElementTagger::new(),
            engine: SuggestionEngine::new(),
        }
    }

    /// Replace the element rule table.
    ///
    /// Rules that fail to compile are skipped; see
    /// [`PromptAnalyzer::diagnostics`].
    pub fn with_rules(mut self, rules: &ElementRuleSet) -> Self {
        self.tagger = ElementTagger::with_rules(rules);
        self
    }

    /// Replace the technique and tips catalogs.
    pub fn with_catalogs(mut self, techniques: TechniqueCatalog, tips: Vec<GeneralTip>) -> Self {
        self.engine = SuggestionEngine::with_catalogs(techniques, tips);
        self
    }

    /// Diagnostics for rules skipped at construction.
    pub fn diagnostics(&self) -> &[RuleDiagnostic] {
        self.tagger.diagnostics()
    }

    /// The technique catalog recommendations are drawn from.
    pub fn techniques(&self) -> &TechniqueCatalog {
        self.engine.techniques()
    }

    /// Analyze a prompt: tag elements, generate suggestions, summarize.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let tag_result = self.tagger.tag(text);
        let found_elements = tag_result.found_elements();
        let suggestions = self
            .engine
            .suggest(text, &found_elements, &tag_result.details);
        let summary = compute_summary(&tag_result.details, &tag_result.spans, &found_elements, &suggestions);

        AnalysisReport {
            spans: tag_result.spans,
            details: tag_result.details,
            found_elements,
            suggestions,
            summary,
        }
    }
}

impl Default for PromptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn compute_summary(
    details: &AnalysisDetails,
    spans: &[TaggedSpan],
    found_elements: &IndexSet<String>,
    suggestions: &[Suggestion],
) -> AnalysisSummary {
    let mut counts = SuggestionCounts::default();
    for suggestion in suggestions {
        match suggestion.kind {
            SuggestionKind::Info => counts.info += 1,
            SuggestionKind::Warning => counts.warnings += 1,
            SuggestionKind::Tip => counts.tips += 1,
            SuggestionKind::Technique => counts.techniques += 1,
            SuggestionKind::GeneralTip => counts.general_tips += 1,
        }
    }

    let recommendation = generate_recommendation(&counts);

    AnalysisSummary {
        word_count: details.word_count,
        total_spans: spans.len(),
        distinct_elements: found_elements.len(),
        suggestion_counts: counts,
        recommendation,
    }
}

fn generate_recommendation(counts: &SuggestionCounts) -> String {
    if counts.info > 0 {
        "The prompt is empty. Type a prompt or load a technique template.".to_string()
    } else if counts.warnings > 0 {
        format!(
            "Address {} structural warning(s) before using this prompt.",
            counts.warnings
        )
    } else if counts.tips > 0 {
        format!("Review {} tip(s) to tighten the prompt.", counts.tips)
    } else if counts.techniques > 0 {
        format!(
            "Structure looks good. {} technique(s) may fit this task.",
            counts.techniques
        )
    } else {
        "Structure looks good.".to_string()
    }
}
