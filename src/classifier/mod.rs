//! Fragment tier classification and priority validation
//!
//! A fragment's tier is derived from its name through membership tables,
//! never self-declared. Low priorities are reserved for platform defaults
//! (applied first, overridden by everything later), the middle band for
//! internal components, and everything from 100 up for custom fragments,
//! so user definitions win conflicts by construction.

use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::error::Error;
use crate::model::Fragment;

/// Built-in system component names (priority 0-19)
const SYSTEM_COMPONENTS: &[&str] = &[
    "system_base",
    "system_path",
    "system_locale",
    "system_proxy",
];

/// Built-in internal component names (priority 20-99)
const INTERNAL_COMPONENTS: &[&str] = &[
    "internal_service",
    "internal_agent",
    "internal_runtime",
    "internal_telemetry",
];

lazy_static! {
    /// Process-wide default registry built from the tables above.
    /// `ComponentRegistry::default()` clones this; config may extend
    /// the clone without touching the shared copy.
    static ref BUILTIN_REGISTRY: ComponentRegistry = ComponentRegistry::new(
        SYSTEM_COMPONENTS.iter().map(|s| s.to_string()),
        INTERNAL_COMPONENTS.iter().map(|s| s.to_string()),
    );
}

/// Fragment tier, derived from the fragment name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    System,
    Internal,
    Custom,
}

impl Tier {
    /// Whether the given priority is legal for this tier
    pub fn allows(&self, priority: i32) -> bool {
        match self {
            Tier::System => (0..=19).contains(&priority),
            Tier::Internal => (20..=99).contains(&priority),
            Tier::Custom => priority >= 100,
        }
    }

    /// Human-readable description of the legal priority range
    pub fn range_label(&self) -> &'static str {
        match self {
            Tier::System => "0-19",
            Tier::Internal => "20-99",
            Tier::Custom => ">=100",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::System => "system",
            Tier::Internal => "internal",
            Tier::Custom => "custom",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Membership tables mapping fragment names to tiers.
///
/// Immutable reference data injected into the manager at construction;
/// names absent from both tables classify as `Custom`.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    system: HashSet<String>,
    internal: HashSet<String>,
}

impl ComponentRegistry {
    pub fn new(
        system: impl IntoIterator<Item = String>,
        internal: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            system: system.into_iter().collect(),
            internal: internal.into_iter().collect(),
        }
    }

    /// Registry with no built-in names; everything classifies as custom
    pub fn empty() -> Self {
        Self::new([], [])
    }

    pub fn extend_system(&mut self, names: impl IntoIterator<Item = String>) {
        self.system.extend(names);
    }

    pub fn extend_internal(&mut self, names: impl IntoIterator<Item = String>) {
        self.internal.extend(names);
    }

    /// Classify a fragment name into its tier.
    ///
    /// Pure function of the name: system table first, then internal,
    /// unlisted names default to custom.
    pub fn classify(&self, name: &str) -> Tier {
        if self.system.contains(name) {
            Tier::System
        } else if self.internal.contains(name) {
            Tier::Internal
        } else {
            Tier::Custom
        }
    }

    /// Validate a fragment's name and priority against its tier
    pub fn validate(&self, fragment: &Fragment) -> Result<(), Error> {
        if fragment.name.is_empty() {
            return Err(Error::EmptyName);
        }
        let tier = self.classify(&fragment.name);
        if !tier.allows(fragment.priority) {
            return Err(Error::PriorityOutOfRange {
                name: fragment.name.clone(),
                tier,
                priority: fragment.priority,
            });
        }
        Ok(())
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        BUILTIN_REGISTRY.clone()
    }
}
