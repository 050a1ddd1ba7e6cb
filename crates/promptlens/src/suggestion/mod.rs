//! Suggestion generation: advisory messages for prompt improvement.

mod engine;
mod suggestion;
mod tips;

pub use engine::SuggestionEngine;
pub use suggestion::{Suggestion, SuggestionKind};
pub use tips::{default_tips, GeneralTip};
