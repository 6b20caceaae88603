//! envmerge - Environment Fragment Merger

use anyhow::Result;
use clap::Parser;

use envmerge::cli::{commands, Cli, Commands, Context, SnapshotCommands};
use envmerge::model::ShellDialect;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        Commands::Build { dialect } => {
            let dialects: Vec<ShellDialect> = dialect.into_iter().map(Into::into).collect();
            commands::build::execute(&ctx, &dialects)
        }
        Commands::List { tier } => commands::list::execute(&ctx, tier.map(Into::into)),
        Commands::Search { pattern } => commands::search::execute(&ctx, &pattern),
        Commands::Trace { key } => commands::trace::execute(&ctx, &key),
        Commands::Status => commands::status::execute(&ctx),
        Commands::Import { source, yes } => commands::import::execute(&ctx, &source, yes),
        Commands::Example { path } => commands::example::execute(&ctx, path.as_deref()),
        Commands::Snapshot { snapshot_command } => match snapshot_command {
            SnapshotCommands::Save { path } => commands::snapshot::save(&ctx, &path),
            SnapshotCommands::Restore { path, emit } => {
                commands::snapshot::restore(&ctx, &path, emit)
            }
        },
    }
}
