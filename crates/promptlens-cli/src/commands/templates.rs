//! Templates command - browse the technique catalog.

use colored::Colorize;
use promptlens::TechniqueCatalog;

pub fn run(
    key: Option<String>,
    json: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = TechniqueCatalog::default();

    match key {
        Some(key) => {
            let technique = catalog.get(&key).ok_or_else(|| {
                let known: Vec<&str> = catalog.iter().map(|t| t.key.as_str()).collect();
                format!(
                    "Unknown technique: '{}'. Known techniques: {}",
                    key,
                    known.join(", ")
                )
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(technique)?);
            } else {
                // Template only, so the output can be piped straight into
                // an editor or another tool.
                println!("{}", technique.template);
            }
        }
        None => {
            if json {
                let entries: Vec<_> = catalog.iter().collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for technique in catalog.iter() {
                    println!("{}", technique.key.cyan().bold());
                    println!("  {}", technique.description);
                    println!("  {}", technique.use_case.dimmed());
                    println!();
                }
                println!(
                    "Run {} to print a technique's template",
                    "promptlens templates <KEY>".cyan()
                );
            }
        }
    }

    Ok(())
}
