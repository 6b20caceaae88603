//! Example command implementation

use anyhow::Result;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};

use crate::cli::Context;
use crate::loader::write_sample;

/// Execute the example command
pub fn execute(ctx: &Context, path: Option<&Path>) -> Result<()> {
    let dest: PathBuf = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("./sample_fragment.yaml"));

    if dest.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", dest.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            ctx.print_warning("Aborted.");
            return Ok(());
        }
    }

    write_sample(&dest)?;
    ctx.print_success(&format!("Wrote example fragment to {}", dest.display()));
    Ok(())
}
