//! Bash and Zsh environment file emitter

use anyhow::Result;
use std::fmt::Write;

use super::{merge_stamp, Emitter, ENV_CTIME_KEY};
use crate::manager::EnvManager;
use crate::model::ShellDialect;

/// Emitter for the POSIX-style shells (Bash and Zsh).
///
/// The two dialects share assignment syntax and differ only in which
/// scripts they pick up.
pub struct PosixEmitter {
    dialect: ShellDialect,
}

impl PosixEmitter {
    pub fn new(dialect: ShellDialect) -> Self {
        debug_assert!(
            dialect != ShellDialect::PowerShell,
            "PowerShell has its own emitter"
        );
        Self { dialect }
    }

    /// Escape a value for a double-quoted POSIX string.
    ///
    /// `$` and backtick are left alone so values can reference other
    /// variables (PATH-style entries).
    fn escape(value: &str) -> String {
        value.replace('\\', "\\\\").replace('"', "\\\"")
    }
}

impl Emitter for PosixEmitter {
    fn emit(&self, manager: &EnvManager) -> Result<String> {
        let stamp = merge_stamp(manager)?;

        let mut out = String::new();
        writeln!(out, "# Env generated at {}", stamp)?;
        writeln!(out, "export {}=\"{}\"", ENV_CTIME_KEY, stamp)?;
        writeln!(out)?;

        for frag in manager.fragments() {
            writeln!(out, "# --- Fragment: {} ---", frag.name)?;
            for (key, value) in &frag.env {
                writeln!(out, "export {}=\"{}\"", key, Self::escape(value))?;
            }
            for script in frag.scripts_for(self.dialect) {
                writeln!(out, "{}", script.data)?;
            }
            writeln!(out)?;
        }

        Ok(out)
    }

    fn dialect(&self) -> ShellDialect {
        self.dialect
    }
}
