//! PromptLens CLI - prompt analysis in the terminal.

mod cli;
mod commands;
mod highlight;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            file,
            json,
            plain,
            details,
            rules,
        } => commands::analyze::run(file, json, plain, details, rules, cli.verbose),

        Commands::Templates { key, json } => commands::templates::run(key, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
