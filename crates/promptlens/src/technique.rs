//! Prompting technique catalog.
//!
//! A fixed, read-only catalog of named prompting strategies. Each entry
//! carries a one-line description, a use-case statement, and a
//! fill-in-the-blanks template the host can offer as a starting point.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PromptLensError, Result};

/// Display keys for techniques the suggestion engine recommends directly.
pub mod keys {
    pub const FEW_SHOT: &str = "Few-shot";
    pub const COT: &str = "CoT (Chain of Thought)";
    pub const RAG: &str = "RAG (Retrieval-Augmented Generation)";
    pub const DIRECTIONAL_STIMULUS: &str = "Directional Stimulus";
    pub const PAL: &str = "PAL (Program-Aided Language Models)";
    pub const REACT: &str = "ReAct (Reason and Act)";
}

/// A named prompting strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    /// Unique display key (e.g., "Few-shot").
    pub key: String,
    /// One-line description.
    pub description: String,
    /// When the technique is a good fit.
    pub use_case: String,
    /// Fill-in-the-blanks template text.
    pub template: String,
}

impl Technique {
    /// Create a technique entry.
    pub fn new(
        key: impl Into<String>,
        description: impl Into<String>,
        use_case: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            use_case: use_case.into(),
            template: template.into(),
        }
    }
}

/// Read-only catalog of techniques, keyed by display key.
///
/// Iteration order is the declared order; the suggestion engine sorts keys
/// alphabetically on emission so recommendations never depend on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueCatalog {
    techniques: IndexMap<String, Technique>,
}

impl TechniqueCatalog {
    /// Build a catalog from a list of techniques.
    pub fn new(entries: Vec<Technique>) -> Result<Self> {
        let mut techniques = IndexMap::with_capacity(entries.len());
        for technique in entries {
            if techniques.contains_key(&technique.key) {
                return Err(PromptLensError::Config(format!(
                    "duplicate technique key: '{}'",
                    technique.key
                )));
            }
            techniques.insert(technique.key.clone(), technique);
        }
        Ok(Self { techniques })
    }

    /// Load a catalog from a JSON array of technique objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<Technique> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PromptLensError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Look up a technique by key.
    pub fn get(&self, key: &str) -> Option<&Technique> {
        self.techniques.get(key)
    }

    /// Whether the catalog contains a key.
    pub fn contains(&self, key: &str) -> bool {
        self.techniques.contains_key(key)
    }

    /// Iterate techniques in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &Technique> {
        self.techniques.values()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }
}

impl Default for TechniqueCatalog {
    fn default() -> Self {
        Self::new(default_techniques()).expect("built-in catalog keys are unique")
    }
}

/// The built-in thirteen-technique catalog, in declared order.
pub fn default_techniques() -> Vec<Technique> {
    vec![
        Technique::new(
            "Zero-shot",
            "Direct instruction without examples.",
            "Good for general tasks the LLM understands well (e.g., summarization, translation, simple Q&A).",
            "Instruction: [Clearly state the task, e.g., Summarize the following text]\n\nInput Data: [Provide the necessary information/text here]",
        ),
        Technique::new(
            keys::FEW_SHOT,
            "Provide 2-5 examples to show the pattern.",
            "Helps the LLM learn input-output patterns for specific or nuanced tasks (e.g., custom classification, style imitation, data formatting).",
            "Instruction: [State the task, e.g., Classify the sentiment of the sentence]\n\nExample 1:\nInput: [Example Input 1]\nOutput: [Example Output 1]\n\nExample 2:\nInput: [Example Input 2]\nOutput: [Example Output 2]\n\n---\n\nActual Input:\nInput Data: [Provide the actual input for the task]",
        ),
        Technique::new(
            keys::COT,
            "Encourage step-by-step reasoning.",
            "Useful for math problems, logic puzzles, multi-step reasoning, and explaining complex processes.",
            "Instruction: [State the problem/question, e.g., What is 5 * (3 + 2)?]\n\nLet's think step-by-step:",
        ),
        Technique::new(
            "Self-consistency",
            "Generate multiple reasoning paths, choose best.",
            "Increases reliability for arithmetic, commonsense, and symbolic reasoning tasks by sampling diverse reasoning paths.",
            "Instruction: [State the problem, e.g., Solve this riddle...]\n\nThink step-by-step through multiple possible reasoning paths and select the most consistent answer.",
        ),
        Technique::new(
            "Generate Knowledge",
            "Prompt model to recall knowledge first.",
            "Useful for questions requiring factual recall or building upon existing knowledge before answering.",
            "Question: [Your main question]\n\nFirst, generate some background knowledge about [Topic related to the question].\n\nUsing that knowledge, answer the original question.",
        ),
        Technique::new(
            "Prompt Chaining",
            "Break complex tasks into sequential prompts.",
            "Manages complexity, improves debuggability, allows human intervention in multi-step workflows (e.g., extract data -> analyze data -> summarize findings).",
            "# Task: [Overall Goal]\n\nStep 1 Prompt:\nInstruction: [Instruction for the first sub-task]\nInput: [Input for Step 1]\n\n---\n\nStep 2 Prompt (uses output from Step 1):\nInstruction: [Instruction for the second sub-task]\nInput: [Output from Step 1]\n\n# (Continue as needed)",
        ),
        Technique::new(
            "Tree of Thoughts",
            "Explore multiple reasoning paths like a tree.",
            "Advanced technique for complex problem-solving where multiple possibilities need evaluation (e.g., planning, strategic games).",
            "Problem: [Describe the complex problem]\n\nExplore multiple potential solution paths or reasoning steps. Evaluate each path's viability. Select the most promising path or synthesize the best elements.\nConsider these initial branches:\n1. [Branch 1 Idea]\n2. [Branch 2 Idea]\n...",
        ),
        Technique::new(
            keys::RAG,
            "Integrate external knowledge.",
            "Improves accuracy and reduces hallucination for questions based on specific documents, databases, or recent information.",
            "Context retrieved from [Source Name, e.g., Document X]:\n\"\"\"\n[Paste relevant context/text snippet here]\n\"\"\"\n\nBased *only* on the provided context, answer the following question:\nQuestion: [Your question about the context]",
        ),
        Technique::new(
            keys::DIRECTIONAL_STIMULUS,
            "Steer thinking style with a phrase.",
            "Controls the tone, complexity, persona, or perspective of the response (e.g., 'Explain like I'm five', 'Write in a formal tone', 'Respond as a pirate').",
            "[Guiding Phrase: e.g., Explain like I'm five / Write in the style of Shakespeare / Act as a helpful assistant]: [Your core instruction or question]",
        ),
        Technique::new(
            keys::PAL,
            "Ask model to write/execute code.",
            "Enhances logic and mathematical accuracy for problems solvable with code (e.g., complex calculations, data manipulation).",
            "Instruction: [Describe the problem clearly, e.g., Calculate the standard deviation of these numbers: 5, 8, 12, 15]\n\nWrite [Language, e.g., Python] code to solve this. Show the code, then execute it and provide the final numerical answer.",
        ),
        Technique::new(
            keys::REACT,
            "Combine reasoning and tool use in a loop.",
            "Enables agents to perform dynamic multi-step tasks involving external tools (search, calculators, APIs) by reasoning, acting, and observing.",
            "Goal: [State the overall objective, e.g., Find the current weather in London and the capital of France]\n\nThought: I need to find the weather in London first. I can use a search tool.\nAction: Search('current weather in London')\nObservation: [Result from search, e.g., 15\u{b0}C, cloudy]\nThought: Now I need the capital of France. I can use search again.\nAction: Search('capital of France')\nObservation: [Result from search, e.g., Paris]\nThought: I have both pieces of information.\nFinal Answer: The current weather in London is 15\u{b0}C and cloudy. The capital of France is Paris.",
        ),
        Technique::new(
            "Meta Prompting",
            "Ask the model to help create/refine prompts.",
            "Useful for generating prompt ideas, improving existing prompts, or selecting the best prompt for a task.",
            "Task: [Describe the task you want a prompt for, e.g., Summarize scientific papers]\n\nGenerate 3 effective prompts an LLM could use to accomplish this task. Explain why each prompt is good.",
        ),
        Technique::new(
            "Graph Prompting",
            "Use graph structures for logic/relationships.",
            "Excellent for reasoning about relationships, dependencies, or paths in structured data (e.g., social networks, flowcharts, knowledge graphs).",
            "Consider the following relationships represented as a graph:\nNodes: [List nodes, e.g., A, B, C, D]\nEdges: [List connections, e.g., A -> B, B -> C, A -> D]\n\nQuestion: [Ask a question about the graph, e.g., What is the shortest path from A to C?]",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_size() {
        let catalog = TechniqueCatalog::default();
        assert_eq!(catalog.len(), 13);
    }

    #[test]
    fn test_recommendable_keys_present() {
        let catalog = TechniqueCatalog::default();
        for key in [
            keys::FEW_SHOT,
            keys::COT,
            keys::RAG,
            keys::DIRECTIONAL_STIMULUS,
            keys::PAL,
            keys::REACT,
        ] {
            assert!(catalog.contains(key), "missing technique '{key}'");
        }
    }

    #[test]
    fn test_declared_order_preserved() {
        let catalog = TechniqueCatalog::default();
        let first: Vec<&str> = catalog.iter().take(3).map(|t| t.key.as_str()).collect();
        assert_eq!(first, vec!["Zero-shot", "Few-shot", "CoT (Chain of Thought)"]);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let entries = vec![
            Technique::new("A", "d", "u", "t"),
            Technique::new("A", "d2", "u2", "t2"),
        ];
        assert!(TechniqueCatalog::new(entries).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = TechniqueCatalog::default();
        let json = serde_json::to_string(&catalog.iter().cloned().collect::<Vec<_>>()).unwrap();
        let reloaded = TechniqueCatalog::from_json_str(&json).unwrap();
        assert_eq!(reloaded.len(), catalog.len());
        assert_eq!(
            reloaded.get("Few-shot").unwrap().template,
            catalog.get("Few-shot").unwrap().template
        );
    }
}
