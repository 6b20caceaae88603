//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::classifier::Tier;
use crate::cli::Context;

/// Execute the list command
pub fn execute(ctx: &Context, tier: Option<Tier>) -> Result<()> {
    let manager = ctx.load_merged()?;

    if manager.is_empty() {
        ctx.print_warning(&format!(
            "No fragments found in {}",
            ctx.fragments_dir.display()
        ));
        return Ok(());
    }

    println!(
        "{:<24} {:<10} {:>8} {:>6} {:>8}  {}",
        "NAME".bold().cyan(),
        "TIER".bold().cyan(),
        "PRIORITY".bold().cyan(),
        "VARS".bold().cyan(),
        "SCRIPTS".bold().cyan(),
        "ORIGIN".bold().cyan()
    );

    let registry = manager.registry();
    let mut shown = 0;
    for frag in manager.fragments() {
        let frag_tier = registry.classify(&frag.name);
        if let Some(wanted) = tier {
            if frag_tier != wanted {
                continue;
            }
        }
        shown += 1;

        let tier_label = match frag_tier {
            Tier::System => frag_tier.name().red(),
            Tier::Internal => frag_tier.name().yellow(),
            Tier::Custom => frag_tier.name().green(),
        };

        println!(
            "{:<24} {:<10} {:>8} {:>6} {:>8}  {}",
            frag.name,
            tier_label,
            frag.priority,
            frag.env.len(),
            frag.scripts.len(),
            frag.origin.dimmed()
        );
    }

    if shown == 0 {
        ctx.print_warning("No fragments match the tier filter");
    }
    Ok(())
}
