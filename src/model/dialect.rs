//! Shell dialect tags for scripts and emitted output files

use serde::{Deserialize, Serialize};

/// Supported shell dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellDialect {
    Bash,
    Zsh,
    /// Accepts the historical `pw` spelling on input; always written as `pwsh`.
    #[serde(rename = "pwsh", alias = "pw", alias = "powershell")]
    PowerShell,
}

impl ShellDialect {
    /// All dialects an output file is generated for
    pub const ALL: [ShellDialect; 3] = [
        ShellDialect::Bash,
        ShellDialect::Zsh,
        ShellDialect::PowerShell,
    ];

    /// Get dialect name as string
    pub fn name(&self) -> &'static str {
        match self {
            ShellDialect::Bash => "bash",
            ShellDialect::Zsh => "zsh",
            ShellDialect::PowerShell => "pwsh",
        }
    }
}

impl std::fmt::Display for ShellDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ShellDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(ShellDialect::Bash),
            "zsh" => Ok(ShellDialect::Zsh),
            "pwsh" | "pw" | "powershell" => Ok(ShellDialect::PowerShell),
            _ => Err(format!("Unknown shell dialect: {}", s)),
        }
    }
}
