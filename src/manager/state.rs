//! Full manager state persistence
//!
//! Only the fragment list, the merged flag, and the merge timestamp are
//! written. Derived state (`merged`, `key_sources`) is recomputed on
//! load by re-running the merge; a snapshot can never smuggle in a
//! resolved environment that disagrees with its fragments.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::EnvManager;
use crate::classifier::ComponentRegistry;
use crate::error::Error;
use crate::model::Fragment;
use crate::utils::path::{read_file, write_file};

#[derive(Debug, Serialize, Deserialize)]
struct StateDoc {
    sorted: bool,
    #[serde(default)]
    ctime: String,
    #[serde(default)]
    fragments: Vec<Fragment>,
}

/// Serialize the manager's fragments, merged flag, and merge time to a
/// YAML document
pub fn save_state(manager: &EnvManager, path: &Path) -> Result<()> {
    let ctime = match manager.merge_time() {
        Ok(t) => t.format(&Rfc3339)?,
        Err(Error::NotMerged) => String::new(),
        Err(e) => return Err(e.into()),
    };

    let doc = StateDoc {
        sorted: manager.is_merged(),
        ctime,
        fragments: manager.fragments().to_vec(),
    };

    let data = serde_yaml::to_string(&doc).context("failed to serialize manager state")?;
    write_file(path, &data)
        .with_context(|| format!("failed to write state file {}", path.display()))
}

/// Restore a manager from a state file written by [`save_state`].
///
/// Every fragment is re-validated against the given registry and the
/// merge is re-run, so the returned manager's derived state is always
/// consistent with its fragment list. The stored timestamp is checked
/// for well-formedness but the restored manager carries a fresh merge
/// time.
pub fn load_state(path: &Path, registry: ComponentRegistry) -> Result<EnvManager> {
    let data = read_file(path)
        .with_context(|| format!("failed to read state file {}", path.display()))?;
    let doc: StateDoc = serde_yaml::from_str(&data)
        .with_context(|| format!("failed to parse state file {}", path.display()))?;

    if !doc.ctime.is_empty() {
        OffsetDateTime::parse(doc.ctime.trim(), &Rfc3339)
            .map_err(Error::InvalidTimestamp)
            .with_context(|| format!("bad ctime in state file {}", path.display()))?;
    }

    let mut manager = EnvManager::with_registry(registry);
    for frag in doc.fragments {
        let name = frag.name.clone();
        manager
            .add(frag)
            .with_context(|| format!("restored fragment {} failed validation", name))?;
    }
    manager.merge();
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShellDialect;
    use tempfile::tempdir;

    fn demo_manager() -> EnvManager {
        let mut manager = EnvManager::new();
        manager
            .add(
                Fragment::new("system_base", 10)
                    .with_env("LANG", "en_US.UTF-8")
                    .with_script(ShellDialect::Zsh, "setopt no_beep")
                    .with_origin("system.yaml"),
            )
            .unwrap();
        manager
            .add(
                Fragment::new("user_service", 150)
                    .with_env("LANG", "zh_CN.UTF-8")
                    .with_origin("user.yaml"),
            )
            .unwrap();
        manager.merge();
        manager
    }

    #[test]
    fn test_state_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.yaml");

        let original = demo_manager();
        save_state(&original, &path).unwrap();

        let restored = load_state(&path, ComponentRegistry::default()).unwrap();
        assert!(restored.is_merged());
        assert_eq!(restored.merged().unwrap(), original.merged().unwrap());
        assert_eq!(
            restored.key_sources().unwrap(),
            original.key_sources().unwrap()
        );

        // scripts and origins survive the trip
        assert_eq!(restored.fragments()[0].origin, "system.yaml");
        assert_eq!(restored.fragments()[0].scripts[0].sh, ShellDialect::Zsh);
    }

    #[test]
    fn test_unmerged_state_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.yaml");

        let mut manager = EnvManager::new();
        manager.add(Fragment::new("tool", 100).with_env("A", "1")).unwrap();
        save_state(&manager, &path).unwrap();

        // restore always re-merges, even from a pre-merge snapshot
        let restored = load_state(&path, ComponentRegistry::default()).unwrap();
        assert!(restored.is_merged());
        assert_eq!(restored.merged_value("A").unwrap(), Some("1"));
    }

    #[test]
    fn test_load_rejects_bad_ctime() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.yaml");
        std::fs::write(
            &path,
            "sorted: true\nctime: not-a-timestamp\nfragments: []\n",
        )
        .unwrap();

        let err = load_state(&path, ComponentRegistry::default()).unwrap_err();
        assert!(err.chain().any(|c| c.to_string().contains("invalid timestamp")));
    }

    #[test]
    fn test_load_revalidates_fragments() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.yaml");
        // hand-edited snapshot with an illegal custom priority
        std::fs::write(
            &path,
            "sorted: false\nfragments:\n  - name: sneaky\n    priority: 3\n",
        )
        .unwrap();

        assert!(load_state(&path, ComponentRegistry::default()).is_err());
    }
}
