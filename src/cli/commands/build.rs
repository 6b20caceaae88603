//! Build command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;
use crate::emitter::emit_to_file;
use crate::meta::write_meta;
use crate::model::ShellDialect;

/// Execute the build command
pub fn execute(ctx: &Context, dialects: &[ShellDialect]) -> Result<()> {
    let mut manager = ctx.load_manager()?;

    if manager.is_empty() {
        ctx.print_warning(&format!(
            "No fragments found in {}",
            ctx.fragments_dir.display()
        ));
    }

    manager.merge();

    let dialects: &[ShellDialect] = if dialects.is_empty() {
        &ShellDialect::ALL
    } else {
        dialects
    };

    for &dialect in dialects {
        let path = ctx.output_path(dialect);
        emit_to_file(&manager, dialect, &path)?;
        println!("  {} {}", dialect.name().cyan(), path.display());
    }

    write_meta(&manager, &ctx.meta_path())?;

    ctx.print_success(&format!(
        "Merged {} fragments ({} variables)",
        manager.len(),
        manager.merged()?.len()
    ));
    Ok(())
}
