//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ShellDialect;
use crate::classifier::ComponentRegistry;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub staleness: StalenessConfig,
}

/// Source and output directory defaults
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PathsConfig {
    pub fragments_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            fragments_dir: PathBuf::from("./env_fragments"),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Generated file names, one per dialect plus the meta record
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    pub bash_file: String,
    pub zsh_file: String,
    pub pwsh_file: String,
    pub meta_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            bash_file: "env_generated.sh".into(),
            zsh_file: "env_generated.zsh".into(),
            pwsh_file: "env_generated.ps1".into(),
            meta_file: "env_generated.meta".into(),
        }
    }
}

impl OutputConfig {
    /// Output file name for the given dialect
    pub fn file_for(&self, dialect: ShellDialect) -> &str {
        match dialect {
            ShellDialect::Bash => &self.bash_file,
            ShellDialect::Zsh => &self.zsh_file,
            ShellDialect::PowerShell => &self.pwsh_file,
        }
    }
}

/// Extra component names appended to the built-in classification tables
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RegistryConfig {
    #[serde(default)]
    pub system: Vec<String>,
    #[serde(default)]
    pub internal: Vec<String>,
}

/// Staleness threshold for the `status` command
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StalenessConfig {
    pub max_age_hours: u64,
}

impl Default for StalenessConfig {
    fn default() -> Self {
        StalenessConfig { max_age_hours: 24 }
    }
}

impl Config {
    /// Get the envmerge configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("envmerge")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Build the classification registry: built-in tables plus the
    /// names declared in `[registry]`
    pub fn component_registry(&self) -> ComponentRegistry {
        let mut registry = ComponentRegistry::default();
        registry.extend_system(self.registry.system.iter().cloned());
        registry.extend_internal(self.registry.internal.iter().cloned());
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Tier;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.bash_file, "env_generated.sh");
        assert_eq!(config.output.meta_file, "env_generated.meta");
        assert_eq!(config.staleness.max_age_hours, 24);
        assert_eq!(config.paths.fragments_dir, PathBuf::from("./env_fragments"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.output.zsh_file, config.output.zsh_file);
        assert_eq!(parsed.staleness.max_age_hours, 24);
    }

    #[test]
    fn test_file_for_dialect() {
        let output = OutputConfig::default();
        assert_eq!(output.file_for(ShellDialect::Bash), "env_generated.sh");
        assert_eq!(output.file_for(ShellDialect::Zsh), "env_generated.zsh");
        assert_eq!(
            output.file_for(ShellDialect::PowerShell),
            "env_generated.ps1"
        );
    }

    #[test]
    fn test_registry_extension() {
        let config: Config = toml::from_str(
            r#"
[registry]
system = ["corp_base"]
internal = ["corp_agent"]
"#,
        )
        .unwrap();

        let registry = config.component_registry();
        assert_eq!(registry.classify("corp_base"), Tier::System);
        assert_eq!(registry.classify("corp_agent"), Tier::Internal);
        assert_eq!(registry.classify("anything_else"), Tier::Custom);
    }
}
