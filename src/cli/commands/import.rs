//! Import command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use std::path::PathBuf;

use crate::cli::Context;
use crate::loader::parse_fragments;
use crate::utils::http::{fetch_url, is_url, url_file_name};
use crate::utils::path::{expand_tilde, read_file, write_file};

/// Execute the import command
pub fn execute(ctx: &Context, source: &str, yes: bool) -> Result<()> {
    // Fetch content from source
    let (content, file_name) = if is_url(source) {
        println!("Fetching from URL: {}", source.cyan());
        let content = fetch_url(source)?;
        let name = url_file_name(source).unwrap_or_else(|| "imported.yaml".to_string());
        (content, name)
    } else {
        let path = expand_tilde(source);
        let content = read_file(&path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "imported.yaml".to_string());
        (content, name)
    };

    // Parse and validate against the registry before anything is written
    let fragments = parse_fragments(&content)?;
    if fragments.is_empty() {
        ctx.print_warning("No fragments found in source.");
        return Ok(());
    }

    let registry = ctx.config.component_registry();
    println!();
    println!(
        "{}",
        format!("Found {} fragments:", fragments.len()).green().bold()
    );
    for frag in &fragments {
        registry.validate(frag)?;
        println!(
            "  {:<24} {:<10} priority {}",
            frag.name.cyan(),
            registry.classify(&frag.name).name(),
            frag.priority
        );
    }
    println!();

    let dest: PathBuf = ctx.fragments_dir.join(&file_name);
    if dest.exists() && !yes {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", dest.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            ctx.print_warning("Aborted.");
            return Ok(());
        }
    } else if !yes {
        let proceed = Confirm::new()
            .with_prompt(format!("Install into {}?", dest.display()))
            .default(true)
            .interact()?;
        if !proceed {
            ctx.print_warning("Aborted.");
            return Ok(());
        }
    }

    write_file(&dest, &content)?;
    ctx.print_success(&format!("Imported {}", dest.display()));
    println!(
        "{}",
        "Run `envmerge build` to regenerate the outputs.".dimmed()
    );
    Ok(())
}
