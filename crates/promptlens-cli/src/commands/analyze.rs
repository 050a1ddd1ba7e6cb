//! Analyze command - analyze a prompt and render the report.

use std::io::Read;
use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use promptlens::{ElementRuleSet, PromptAnalyzer, SuggestionKind};

use crate::highlight;

pub fn run(
    file: Option<PathBuf>,
    json: bool,
    plain: bool,
    details: bool,
    rules: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = read_prompt(file)?;

    let mut analyzer = PromptAnalyzer::new();
    if let Some(path) = rules {
        analyzer = analyzer.with_rules(&ElementRuleSet::from_file(path)?);
    }

    if verbose {
        for diag in analyzer.diagnostics() {
            eprintln!(
                "{} rule '{}' skipped: {}",
                "Warning:".yellow().bold(),
                diag.rule,
                diag.message
            );
        }
    }

    let report = analyzer.analyze(&prompt);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !plain && !report.spans.is_empty() {
        println!("{}", "Prompt (highlighted):".cyan().bold());
        println!("{}", highlight::render(&prompt, &report.spans));
        println!();
        println!(
            "Elements: {}",
            highlight::legend(report.found_elements.iter().map(String::as_str))
        );
        println!();
    }

    println!(
        "Found {} element span(s) across {} element type(s) ({} words)",
        report.summary.total_spans.to_string().white().bold(),
        report.summary.distinct_elements.to_string().white().bold(),
        report.summary.word_count,
    );

    println!();
    println!("{}", "Suggestions:".cyan().bold());
    for suggestion in &report.suggestions {
        println!("  {} {}", kind_marker(suggestion.kind), suggestion.label);
        if details {
            for line in suggestion.detail.lines() {
                println!("      {}", line.dimmed());
            }
            println!();
        }
    }

    println!();
    println!("{}", report.summary.recommendation);

    Ok(())
}

fn kind_marker(kind: SuggestionKind) -> ColoredString {
    let marker = kind.marker();
    match kind {
        SuggestionKind::Info => marker.blue(),
        SuggestionKind::Warning => marker.red().bold(),
        SuggestionKind::Tip => marker.yellow(),
        SuggestionKind::Technique => marker.cyan(),
        SuggestionKind::GeneralTip => marker.green(),
    }
}

fn read_prompt(file: Option<PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => {
            if !path.exists() {
                return Err(format!("File not found: {}", path.display()).into());
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
