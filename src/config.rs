// src/config.rs
// Tunables for a design run, loadable from a JSON file. Missing fields keep their defaults.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::search::{SearchPolicy, DEFAULT_MAX_PAIR_CHECKS, DEFAULT_MAX_SURVIVORS};

/// Combinations reported per request.
pub const DEFAULT_MAX_COMBINATIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    /// Partial assignments kept after each reduction step; `null` keeps all of them.
    pub max_survivors_per_step: Option<usize>,
    pub max_pair_checks: Option<u64>,
    pub max_combinations: usize,
    /// Fixed RNG seed for reproducible sampling.
    pub seed: Option<u64>,
    pub merge_junction_base: bool,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            max_survivors_per_step: Some(DEFAULT_MAX_SURVIVORS),
            max_pair_checks: Some(DEFAULT_MAX_PAIR_CHECKS),
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            seed: None,
            merge_junction_base: false,
        }
    }
}

impl DesignConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        ensure!(config.max_combinations > 0, "max_combinations must be at least 1: {}", path.display());
        Ok(config)
    }

    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_survivors_per_step: self.max_survivors_per_step,
            max_pair_checks: self.max_pair_checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "seed": 42, "max_survivors_per_step": null }}"#).unwrap();

        let config = DesignConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_survivors_per_step, None);
        assert_eq!(config.max_combinations, DEFAULT_MAX_COMBINATIONS);
        assert_eq!(config.max_pair_checks, Some(DEFAULT_MAX_PAIR_CHECKS));
        assert!(!config.merge_junction_base);
    }

    #[test]
    fn zero_combinations_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_combinations": 0 }}"#).unwrap();
        let err = DesignConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("max_combinations must be at least 1"));
    }

    #[test]
    fn malformed_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "seed = 42").unwrap();
        let err = DesignConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
