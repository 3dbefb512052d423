// src/order.rs
// PROMOTER ORDER
// Resolves the sequence of fusion sites for a construct of `n` modules:
// entry 0 is the donor, entries 1..n are the promoters separating consecutive modules.

use crate::error::{DesignError, Result};
use crate::fusion::{Donor, FusionCode};

/// Hand-tuned default boundary patterns, indexed by boundary count (0..=8).
/// Digits name promoters: 1 = m6a, 2 = m6b, 3 = m6c, 4 = m3.
const DEFAULT_PATTERNS: [&str; 9] = [
    "", "1", "12", "123", "1234", "11234", "112234", "1122334", "11223344",
];

/// Longest pattern; constructs with more boundaries repeat it cyclically.
const CYCLE: &str = DEFAULT_PATTERNS[8];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderMode {
    Default,
    /// One promoter per boundary, in module order.
    Explicit(Vec<FusionCode>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoterOrder {
    donor: Donor,
    boundaries: Vec<FusionCode>,
    // Resolved at construction so lookups below cannot fail.
    fragments: Vec<&'static str>,
}

impl PromoterOrder {
    pub fn resolve(module_num: usize, donor: Donor, mode: &OrderMode) -> Result<Self> {
        if module_num == 0 {
            return Err(DesignError::NoModules);
        }
        let boundary_num = module_num - 1;

        let boundaries = match mode {
            OrderMode::Default => default_boundaries(boundary_num),
            OrderMode::Explicit(choices) => {
                if choices.len() != boundary_num {
                    return Err(DesignError::ModuleCountMismatch {
                        expected: boundary_num,
                        found: choices.len(),
                    });
                }
                choices.clone()
            }
        };

        let fragments = boundaries
            .iter()
            .map(|code| {
                code.fragment()
                    .ok_or_else(|| DesignError::InvalidPromoterChoice(code.label().to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { donor, boundaries, fragments })
    }

    pub fn donor(&self) -> &Donor {
        &self.donor
    }

    /// Number of modules this order covers.
    pub fn module_count(&self) -> usize {
        self.boundaries.len() + 1
    }

    /// Code at `index`; 0 is the donor.
    pub fn code(&self, index: usize) -> FusionCode {
        match index {
            0 => self.donor.code(),
            i => self.boundaries[i - 1],
        }
    }

    pub fn codes(&self) -> Vec<FusionCode> {
        (0..self.module_count()).map(|i| self.code(i)).collect()
    }

    /// Overhang prepended to the module that follows entry `index`.
    pub fn overhang(&self, index: usize) -> &str {
        match index {
            0 => self.donor.upstream_overhang(),
            // Every boundary is a promoter, and promoters always carry an overhang.
            i => self.boundaries[i - 1].overhang().unwrap_or_default(),
        }
    }

    /// Synthesis fragment of boundary `index` (between modules `index` and `index + 1`).
    pub fn fragment(&self, index: usize) -> &'static str {
        self.fragments[index - 1]
    }

    pub fn label(&self, index: usize) -> &'static str {
        self.code(index).label()
    }

    /// Human-readable form, e.g. `pGN1101 ---> m6a ---> m6b`.
    pub fn describe(&self) -> String {
        self.codes().iter().map(|c| c.label()).collect::<Vec<_>>().join(" ---> ")
    }
}

fn default_boundaries(boundary_num: usize) -> Vec<FusionCode> {
    let pattern: Vec<char> = match DEFAULT_PATTERNS.get(boundary_num) {
        Some(p) => p.chars().collect(),
        None => CYCLE.chars().cycle().take(boundary_num).collect(),
    };
    pattern.into_iter().map(promoter_for_digit).collect()
}

fn promoter_for_digit(digit: char) -> FusionCode {
    match digit {
        '1' => FusionCode::M6a,
        '2' => FusionCode::M6b,
        '3' => FusionCode::M6c,
        _ => FusionCode::M3,
    }
}
