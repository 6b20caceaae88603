//! YAML fragment loading
//!
//! Fragment files are YAML, one or more documents per file. Each loaded
//! fragment is stamped with its source path and pushed through the
//! manager's validation; the first failure aborts the load and reports
//! which file and fragment were at fault.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::manager::EnvManager;
use crate::model::Fragment;
use crate::utils::path::{read_file, write_file};

/// Parse all fragment documents out of one YAML string.
///
/// Empty documents (as produced by trailing `---` separators) are
/// skipped. Fragments are returned unvalidated with an empty `origin`.
pub fn parse_fragments(content: &str) -> Result<Vec<Fragment>> {
    let mut fragments = Vec::new();
    for (index, doc) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let frag: Option<Fragment> = Option::deserialize(doc)
            .with_context(|| format!("failed to parse YAML document {}", index + 1))?;
        if let Some(frag) = frag {
            fragments.push(frag);
        }
    }
    Ok(fragments)
}

/// Load every fragment document in a YAML file into the manager.
///
/// Returns the number of fragments added.
pub fn feed_file(manager: &mut EnvManager, path: &Path) -> Result<usize> {
    let content =
        read_file(path).with_context(|| format!("failed to read file {}", path.display()))?;
    let fragments =
        parse_fragments(&content).with_context(|| format!("in {}", path.display()))?;

    let mut added = 0;
    for mut frag in fragments {
        frag.origin = path.display().to_string();
        let name = frag.name.clone();
        manager
            .add(frag)
            .with_context(|| format!("validation failed for fragment {} in {}", name, path.display()))?;
        added += 1;
    }
    Ok(added)
}

/// Load all YAML files from a directory. Non-YAML files and
/// subdirectories are skipped.
///
/// Files are visited in name order so that priority ties (broken by
/// insertion order) resolve the same way on every run.
pub fn feed_dir(manager: &mut EnvManager, dir: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            matches!(
                p.extension().and_then(|e| e.to_str()),
                Some("yaml") | Some("yml")
            )
        })
        .collect();
    paths.sort();

    let mut added = 0;
    for path in paths {
        added += feed_file(manager, &path)?;
    }
    Ok(added)
}

/// Example fragment file contents, written by the `example` command
pub const SAMPLE_FRAGMENT: &str = r#"# Example env fragment
name: sample_service
priority: 100
env:
  SERVICE_PORT: "8080"
  SERVICE_HOST: "0.0.0.0"
script:
  - sh: bash
    data: |
      if [ -z "$SERVICE_URL" ]; then
        export SERVICE_URL="http://$SERVICE_HOST:$SERVICE_PORT"
        echo "Bash: Service URL set to $SERVICE_URL"
      fi
  - sh: zsh
    data: |
      if [[ -z "$SERVICE_URL" ]]; then
        export SERVICE_URL="http://$SERVICE_HOST:$SERVICE_PORT"
        echo "Zsh: Service URL set to $SERVICE_URL"
      fi
  - sh: pwsh
    data: |
      if (-not $env:SERVICE_URL) {
        $env:SERVICE_URL = "http://$env:SERVICE_HOST:$env:SERVICE_PORT"
        Write-Host "PowerShell: Service URL set to $env:SERVICE_URL"
      }
"#;

/// Write the example fragment file
pub fn write_sample(path: &Path) -> Result<()> {
    write_file(path, SAMPLE_FRAGMENT)
        .with_context(|| format!("failed to write example file {}", path.display()))
}
