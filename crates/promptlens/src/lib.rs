//! PromptLens: rule-based prompt analysis for composing LLM prompts.
//!
//! PromptLens tags recognized structural elements (instructions, context
//! markers, delimiters, example markers, ...) in prompt text and produces
//! an ordered list of advisory suggestions: missing-element warnings,
//! structural tips, technique recommendations, and general best-practice
//! reminders.
//!
//! # Core Principles
//!
//! - **Pure**: analysis is a function of the text alone — no I/O, no
//!   clocks, no shared mutable state
//! - **Deterministic**: identical text produces byte-identical spans,
//!   details, and suggestions
//! - **Table-driven**: element rules and catalogs are immutable
//!   configuration, injected at construction and unit-testable on their own
//!
//! # Example
//!
//! ```
//! use promptlens::PromptAnalyzer;
//!
//! let analyzer = PromptAnalyzer::new();
//! let report = analyzer.analyze("Summarize the following text. ### Input: ...");
//!
//! println!("Elements: {}", report.found_elements.len());
//! for suggestion in &report.suggestions {
//!     println!("{}", suggestion.display_label());
//! }
//! ```

pub mod element;
pub mod error;
pub mod suggestion;
pub mod technique;

mod analyzer;

pub use crate::analyzer::{AnalysisReport, AnalysisSummary, PromptAnalyzer, SuggestionCounts};
pub use element::{
    AnalysisDetails, ElementRule, ElementRuleSet, ElementTagger, RuleDiagnostic, TagResult,
    TaggedSpan,
};
pub use error::{PromptLensError, Result};
pub use suggestion::{GeneralTip, Suggestion, SuggestionEngine, SuggestionKind};
pub use technique::{Technique, TechniqueCatalog};
