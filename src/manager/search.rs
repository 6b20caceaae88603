//! Regex search across raw fragment contents
//!
//! Search is a diagnostic tool over what each fragment declares, not over
//! the resolved environment: a key shadowed by a higher-priority fragment
//! still produces its own match.

use regex::Regex;

use super::EnvManager;
use crate::error::Error;

/// A single search match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// Name of the fragment the match was found in
    pub fragment: String,
    /// Matched env key, or `script[<dialect>]` for script matches
    pub key: String,
    /// The env value or raw script body
    pub value: String,
}

impl EnvManager {
    /// Match a pattern against every fragment's env keys, env values,
    /// and raw script bodies.
    ///
    /// Fragments are scanned in current (post-merge) order, env entries
    /// before scripts within each fragment. A match on either key or
    /// value yields one result; no deduplication is performed.
    pub fn search(&self, pattern: &str) -> Result<Vec<SearchMatch>, Error> {
        if !self.is_merged() {
            return Err(Error::NotMerged);
        }
        let re = Regex::new(pattern)?;

        let mut results = Vec::new();
        for frag in self.fragments() {
            for (key, value) in &frag.env {
                if re.is_match(key) || re.is_match(value) {
                    results.push(SearchMatch {
                        fragment: frag.name.clone(),
                        key: key.clone(),
                        value: value.clone(),
                    });
                }
            }

            for script in &frag.scripts {
                if re.is_match(&script.data) {
                    results.push(SearchMatch {
                        fragment: frag.name.clone(),
                        key: format!("script[{}]", script.sh),
                        value: script.data.clone(),
                    });
                }
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Fragment, ShellDialect};

    fn merged_manager() -> EnvManager {
        let mut manager = EnvManager::new();
        manager
            .add(
                Fragment::new("internal_service", 30)
                    .with_env("APP_HOME", "/opt/app")
                    .with_script(
                        ShellDialect::Bash,
                        "if [ -z \"$APP_URL\" ]; then\n  export APP_URL=\"http://localhost:8080\"\nfi",
                    ),
            )
            .unwrap();
        manager
            .add(
                Fragment::new("user_service", 150)
                    .with_env("APP_HOME", "/home/user/app")
                    .with_env("DEBUG", "true"),
            )
            .unwrap();
        manager.merge();
        manager
    }

    #[test]
    fn test_search_requires_merge() {
        let manager = EnvManager::new();
        assert!(matches!(manager.search("x"), Err(Error::NotMerged)));
    }

    #[test]
    fn test_search_rejects_bad_pattern() {
        let manager = merged_manager();
        assert!(matches!(
            manager.search("[unclosed"),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_search_reports_shadowed_keys_separately() {
        let manager = merged_manager();
        let results = manager.search("APP_HOME").unwrap();

        // both definers appear, in sorted fragment order
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].fragment, "internal_service");
        assert_eq!(results[0].value, "/opt/app");
        assert_eq!(results[1].fragment, "user_service");
        assert_eq!(results[1].value, "/home/user/app");
    }

    #[test]
    fn test_search_matches_values_too() {
        let manager = merged_manager();
        let results = manager.search("^true$").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key, "DEBUG");
    }

    #[test]
    fn test_search_matches_script_bodies() {
        let manager = merged_manager();
        let results = manager.search("APP_URL").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].fragment, "internal_service");
        assert_eq!(results[0].key, "script[bash]");
        assert!(results[0].value.contains("export APP_URL"));
    }

    #[test]
    fn test_search_no_matches() {
        let manager = merged_manager();
        assert!(manager.search("NO_SUCH_THING").unwrap().is_empty());
    }
}
