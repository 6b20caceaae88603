//! Fragment data structures for environment definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ShellDialect;

/// A shell script snippet carried by a fragment.
///
/// `data` is re-emitted verbatim into the output file of its dialect;
/// the core never interprets or reformats script bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub sh: ShellDialect,
    pub data: String,
}

/// A named, prioritized bundle of environment variables and scripts.
///
/// # Field Semantics
/// - `name`: identifier used for tier classification; not globally unique
/// - `priority`: merge order, ascending; the legal range depends on the
///   tier derived from `name` (see `classifier`)
/// - `env`: variable name -> value; ordered by key so every iteration
///   over a fragment's variables is deterministic
/// - `scripts`: ordered script snippets, zero or more per dialect
///   (serialized under the `script` key)
/// - `origin`: the file or URL the fragment was loaded from; carried for
///   diagnostics only and never consulted by merge logic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub name: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
    #[serde(default, rename = "script", skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<Script>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub origin: String,
}

impl Fragment {
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            priority,
            env: BTreeMap::new(),
            scripts: Vec::new(),
            origin: String::new(),
        }
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_script(mut self, sh: ShellDialect, data: impl Into<String>) -> Self {
        self.scripts.push(Script {
            sh,
            data: data.into(),
        });
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Scripts tagged for the given dialect, in declaration order
    pub fn scripts_for(&self, dialect: ShellDialect) -> impl Iterator<Item = &Script> {
        self.scripts.iter().filter(move |s| s.sh == dialect)
    }
}
