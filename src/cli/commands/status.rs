//! Status command implementation

use anyhow::Result;
use colored::Colorize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::cli::Context;
use crate::meta::read_meta;

/// Execute the status command
pub fn execute(ctx: &Context) -> Result<()> {
    let meta_path = ctx.meta_path();
    if !meta_path.exists() {
        ctx.print_warning(&format!(
            "No meta file at {}. Run `envmerge build` first.",
            meta_path.display()
        ));
        return Ok(());
    }

    let generated_at = read_meta(&meta_path)?;
    println!(
        "Env generated at: {}",
        generated_at.format(&Rfc3339)?.cyan()
    );

    let age = OffsetDateTime::now_utc() - generated_at;
    let max_age = ctx.config.staleness.max_age_hours;
    if age.whole_hours() >= max_age as i64 {
        ctx.print_warning(&format!(
            "Env is older than {}h, consider regenerating",
            max_age
        ));
    } else {
        ctx.print_success("Env is up to date");
    }
    Ok(())
}
