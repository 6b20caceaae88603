//! Search command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Execute the search command
pub fn execute(ctx: &Context, pattern: &str) -> Result<()> {
    let manager = ctx.load_merged()?;
    let results = manager.search(pattern)?;

    if results.is_empty() {
        println!("{}", "No matches.".dimmed());
        return Ok(());
    }

    for result in &results {
        // script bodies are multi-line; indent them under their label
        if result.value.contains('\n') {
            println!(
                "{} {}:",
                result.fragment.cyan(),
                result.key.bold()
            );
            for line in result.value.lines() {
                println!("    {}", line);
            }
        } else {
            println!(
                "{} {} = {}",
                result.fragment.cyan(),
                result.key.bold(),
                result.value
            );
        }
    }

    println!();
    ctx.print_success(&format!("{} matches for /{}/", results.len(), pattern));
    Ok(())
}
