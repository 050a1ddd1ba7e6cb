//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PromptLens: rule-based prompt analyzer for LLM prompts
#[derive(Parser)]
#[command(name = "promptlens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a prompt: highlight elements and list suggestions
    Analyze {
        /// Path to a file containing the prompt (reads stdin if omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output the full analysis report as JSON
        #[arg(long)]
        json: bool,

        /// Skip element highlighting, print suggestions only
        #[arg(long)]
        plain: bool,

        /// Show each suggestion's detail text
        #[arg(short, long)]
        details: bool,

        /// Load a custom element rule table from a JSON file
        #[arg(long, value_name = "RULES_FILE")]
        rules: Option<PathBuf>,
    },

    /// List prompting techniques or print one technique's template
    Templates {
        /// Technique key to print the template for (e.g., "Few-shot")
        #[arg(value_name = "KEY")]
        key: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
