//! Snapshot command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::Context;
use crate::emitter::emit_to_file;
use crate::manager::{load_state, save_state};
use crate::meta::write_meta;
use crate::model::ShellDialect;

/// Save merged state to a snapshot file
pub fn save(ctx: &Context, path: &Path) -> Result<()> {
    let manager = ctx.load_merged()?;
    save_state(&manager, path)?;
    ctx.print_success(&format!(
        "Saved {} fragments to {}",
        manager.len(),
        path.display()
    ));
    Ok(())
}

/// Restore state from a snapshot; optionally regenerate outputs
pub fn restore(ctx: &Context, path: &Path, emit: bool) -> Result<()> {
    let manager = load_state(path, ctx.config.component_registry())?;
    ctx.print_success(&format!(
        "Restored {} fragments ({} variables) from {}",
        manager.len(),
        manager.merged()?.len(),
        path.display()
    ));

    if emit {
        for dialect in ShellDialect::ALL {
            let out = ctx.output_path(dialect);
            emit_to_file(&manager, dialect, &out)?;
            println!("  {} {}", dialect.name().cyan(), out.display());
        }
        write_meta(&manager, &ctx.meta_path())?;
    }
    Ok(())
}
