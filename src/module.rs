// src/module.rs

use crate::error::{DesignError, Result};

/// One fragment of the construct and its single candidate target sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub position: usize,
    pub name: String,
    pub candidate: String,
}

impl Module {
    pub fn new(position: usize, name: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self { position, name: name.into(), candidate: candidate.into() }
    }

    /// Builds a module from however many candidates the input carried.
    /// Exactly one is supported; an unnamed module is named after its position.
    pub fn from_candidates(position: usize, name: Option<&str>, candidates: &[&str]) -> Result<Self> {
        let candidate = match candidates {
            [] => return Err(DesignError::MissingCandidate { module: position }),
            [one] if one.is_empty() => return Err(DesignError::MissingCandidate { module: position }),
            [one] => *one,
            many => {
                return Err(DesignError::MultipleCandidatesUnsupported {
                    module: position,
                    count: many.len(),
                })
            }
        };
        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => position.to_string(),
        };
        Ok(Self::new(position, name, candidate))
    }
}
