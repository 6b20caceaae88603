//! Trace command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Execute the trace command: show a key's merged value and which
/// fragments contributed to it
pub fn execute(ctx: &Context, key: &str) -> Result<()> {
    let manager = ctx.load_merged()?;

    let Some(value) = manager.merged_value(key)? else {
        ctx.print_warning(&format!("No fragment defines {}", key));
        return Ok(());
    };
    let sources = manager
        .sources_for(key)?
        .expect("merged key has a provenance chain");

    println!("{} = {}", key.bold(), value);
    println!();
    for (index, name) in sources.iter().enumerate() {
        let marker = if index + 1 == sources.len() {
            "won".green()
        } else {
            "overridden".dimmed()
        };
        println!("  {}. {} ({})", index + 1, name.cyan(), marker);
    }
    Ok(())
}
