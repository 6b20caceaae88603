//! PowerShell environment file emitter

use anyhow::Result;
use std::fmt::Write;

use super::{merge_stamp, Emitter, ENV_CTIME_KEY};
use crate::manager::EnvManager;
use crate::model::ShellDialect;

/// Emitter for PowerShell profiles (`$Env:` assignment syntax)
pub struct PowerShellEmitter;

impl PowerShellEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Escape a value for a double-quoted PowerShell string (backtick
    /// is the escape character)
    fn escape(value: &str) -> String {
        value.replace('`', "``").replace('"', "`\"")
    }
}

impl Default for PowerShellEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for PowerShellEmitter {
    fn emit(&self, manager: &EnvManager) -> Result<String> {
        let stamp = merge_stamp(manager)?;

        let mut out = String::new();
        writeln!(out, "# Env generated at {}", stamp)?;
        writeln!(out, "$Env:{} = \"{}\"", ENV_CTIME_KEY, stamp)?;
        writeln!(out)?;

        for frag in manager.fragments() {
            writeln!(out, "# --- Fragment: {} ---", frag.name)?;
            for (key, value) in &frag.env {
                writeln!(out, "$Env:{} = \"{}\"", key, Self::escape(value))?;
            }
            for script in frag.scripts_for(ShellDialect::PowerShell) {
                writeln!(out, "{}", script.data)?;
            }
            writeln!(out)?;
        }

        Ok(out)
    }

    fn dialect(&self) -> ShellDialect {
        ShellDialect::PowerShell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fragment;

    #[test]
    fn test_emit_pwsh_assignments() {
        let mut manager = EnvManager::new();
        manager
            .add(
                Fragment::new("user_service", 150)
                    .with_env("APP_HOME", "C:\\Users\\app")
                    .with_script(ShellDialect::PowerShell, "Write-Host \"ready\"")
                    .with_script(ShellDialect::Bash, "echo skipped"),
            )
            .unwrap();
        manager.merge();

        let out = PowerShellEmitter::new().emit(&manager).unwrap();
        assert!(out.contains("$Env:ENV_CTIME = \""));
        assert!(out.contains("# --- Fragment: user_service ---"));
        assert!(out.contains("$Env:APP_HOME = \"C:\\Users\\app\""));
        assert!(out.contains("Write-Host \"ready\""));
        assert!(!out.contains("echo skipped"));
    }

    #[test]
    fn test_pwsh_escaping() {
        let mut manager = EnvManager::new();
        manager
            .add(Fragment::new("user_service", 150).with_env("GREETING", "say \"hi\" `now`"))
            .unwrap();
        manager.merge();

        let out = PowerShellEmitter::new().emit(&manager).unwrap();
        assert!(out.contains("$Env:GREETING = \"say `\"hi`\" ``now``\""));
    }
}
