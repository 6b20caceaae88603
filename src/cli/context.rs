//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::loader;
use crate::manager::EnvManager;
use crate::model::{Config, ShellDialect};

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub fragments_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load()?;

        let fragments_dir = cli
            .fragments_dir
            .clone()
            .unwrap_or_else(|| config.paths.fragments_dir.clone());
        let output_dir = cli
            .out_dir
            .clone()
            .unwrap_or_else(|| config.paths.output_dir.clone());

        Ok(Self {
            config,
            fragments_dir,
            output_dir,
        })
    }

    /// Load all fragments from the fragments directory (not yet merged)
    pub fn load_manager(&self) -> Result<EnvManager> {
        let mut manager = EnvManager::with_registry(self.config.component_registry());
        loader::feed_dir(&mut manager, &self.fragments_dir)?;
        Ok(manager)
    }

    /// Load all fragments and merge them
    pub fn load_merged(&self) -> Result<EnvManager> {
        let mut manager = self.load_manager()?;
        manager.merge();
        Ok(manager)
    }

    /// Path of the generated file for a dialect
    pub fn output_path(&self, dialect: ShellDialect) -> PathBuf {
        self.output_dir.join(self.config.output.file_for(dialect))
    }

    /// Path of the meta timestamp file
    pub fn meta_path(&self) -> PathBuf {
        self.output_dir.join(&self.config.output.meta_file)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
