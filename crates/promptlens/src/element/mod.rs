//! Element tagging: rule table and span scanner.

pub mod rule;

mod tagger;

pub use rule::{default_rules, ElementRule, ElementRuleSet, RuleDiagnostic};
pub use tagger::{AnalysisDetails, ElementTagger, TagResult, TaggedSpan};
