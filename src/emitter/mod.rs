//! Emitters producing shell initialization files from a merged manager

mod posix;
mod pwsh;

pub use posix::PosixEmitter;
pub use pwsh::PowerShellEmitter;

use anyhow::{Context, Result};
use std::path::Path;
use time::format_description::well_known::Rfc3339;

use crate::manager::EnvManager;
use crate::model::ShellDialect;
use crate::utils::path::write_file;

/// Variable carrying the merge timestamp in every generated file
pub const ENV_CTIME_KEY: &str = "ENV_CTIME";

/// Trait for shell environment file emitters
pub trait Emitter {
    /// Render the complete output document for this emitter's dialect.
    ///
    /// Requires a merged manager; fragments appear in priority order,
    /// each as a named header, its exports, and the verbatim bodies of
    /// its scripts tagged for this dialect.
    fn emit(&self, manager: &EnvManager) -> Result<String>;

    /// Get the shell dialect this emitter handles
    fn dialect(&self) -> ShellDialect;
}

/// Get an emitter for the specified shell dialect
pub fn get_emitter(dialect: ShellDialect) -> Box<dyn Emitter> {
    match dialect {
        ShellDialect::Bash | ShellDialect::Zsh => Box::new(PosixEmitter::new(dialect)),
        ShellDialect::PowerShell => Box::new(PowerShellEmitter::new()),
    }
}

/// Emit the output document for a dialect and write it to a file
pub fn emit_to_file(manager: &EnvManager, dialect: ShellDialect, path: &Path) -> Result<()> {
    let text = get_emitter(dialect).emit(manager)?;
    write_file(path, &text)
        .with_context(|| format!("failed to write {} output to {}", dialect, path.display()))
}

/// RFC 3339 rendering of the manager's merge time
pub(crate) fn merge_stamp(manager: &EnvManager) -> Result<String> {
    let ts = manager.merge_time()?;
    Ok(ts.format(&Rfc3339)?)
}
