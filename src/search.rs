// src/search.rs
// OVERHANG COMBINATION SEARCH
// Folds the per-module candidate lists, left to right, into complete assignments whose
// overhangs are pairwise orthogonal.
//
// The first internal module seeds the partial assignments as-is. Every further module
// extends each partial assignment with each of its candidates, keeps the extensions
// compatible with everything already chosen, then samples the survivors down to the
// configured cap. Past the first reduction the search is therefore not exhaustive.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{DesignError, Result};
use crate::filter::{ModuleCandidates, OverhangCandidate};
use crate::sequence::is_compatible;

pub const DEFAULT_MAX_SURVIVORS: usize = 10;
pub const DEFAULT_MAX_PAIR_CHECKS: u64 = 5_000_000;

/// Bounds on the combinatorial reduction. `None` lifts a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    pub max_survivors_per_step: Option<usize>,
    pub max_pair_checks: Option<u64>,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_survivors_per_step: Some(DEFAULT_MAX_SURVIVORS),
            max_pair_checks: Some(DEFAULT_MAX_PAIR_CHECKS),
        }
    }
}

impl SearchPolicy {
    /// Keeps every survivor at every step. Intended for validating results on small inputs.
    pub fn exhaustive() -> Self {
        Self { max_survivors_per_step: None, max_pair_checks: None }
    }
}

/// One overhang per internal module, in position order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverhangCombination {
    pub candidates: Vec<OverhangCandidate>,
}

impl OverhangCombination {
    pub fn overhangs(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.sequence.as_str())
    }
}

pub fn search_combinations<R: Rng + ?Sized>(
    modules: &[ModuleCandidates],
    policy: &SearchPolicy,
    rng: &mut R,
) -> Result<Vec<OverhangCombination>> {
    let Some((first, rest)) = modules.split_first() else {
        return Ok(Vec::new());
    };

    if first.candidates.is_empty() {
        return Err(DesignError::NoCompatibleOverhangSet { module: first.position });
    }

    let mut partials: Vec<Vec<&OverhangCandidate>> =
        first.candidates.iter().map(|c| vec![c]).collect();
    let mut checks = 0u64;

    for module in rest {
        let mut survivors = Vec::new();

        for partial in &partials {
            for candidate in &module.candidates {
                checks += partial.len() as u64;
                if let Some(limit) = policy.max_pair_checks {
                    if checks > limit {
                        return Err(DesignError::SearchBudgetExceeded { checks });
                    }
                }

                let fits = partial
                    .iter()
                    .all(|chosen| is_compatible(&chosen.sequence, &candidate.sequence));
                if fits {
                    let mut extended = partial.clone();
                    extended.push(candidate);
                    survivors.push(extended);
                }
            }
        }

        if survivors.is_empty() {
            return Err(DesignError::NoCompatibleOverhangSet { module: module.position });
        }

        debug!("module {}: {} compatible partial assignments", module.position, survivors.len());
        if let Some(cap) = policy.max_survivors_per_step {
            if survivors.len() > cap {
                survivors.shuffle(rng);
                survivors.truncate(cap);
                trace!("module {}: sampled down to {}", module.position, cap);
            }
        }
        partials = survivors;
    }

    Ok(partials
        .into_iter()
        .map(|chosen| OverhangCombination {
            candidates: chosen.into_iter().cloned().collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn module(position: usize, overhangs: &[&str]) -> ModuleCandidates {
        ModuleCandidates {
            position,
            candidates: overhangs
                .iter()
                .enumerate()
                .map(|(i, s)| OverhangCandidate { sequence: s.to_string(), offset: i })
                .collect(),
        }
    }

    #[test]
    fn single_module_is_not_sampled() {
        let mut rng = StdRng::seed_from_u64(7);
        let mods = [module(2, &["ACAT", "CTAC", "AAGC"])];
        let combos = search_combinations(&mods, &SearchPolicy::default(), &mut rng).unwrap();
        let firsts: Vec<_> = combos.iter().map(|c| c.candidates[0].sequence.as_str()).collect();
        assert_eq!(firsts, vec!["ACAT", "CTAC", "AAGC"]);
    }

    #[test]
    fn incompatible_extensions_are_dropped() {
        let mut rng = StdRng::seed_from_u64(7);
        // ACAT vs ACAA share 3 positions; ACAT vs CTAC share one.
        let mods = [module(2, &["ACAT"]), module(3, &["ACAA", "CTAC"])];
        let combos = search_combinations(&mods, &SearchPolicy::exhaustive(), &mut rng).unwrap();
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].overhangs().collect::<Vec<_>>(), vec!["ACAT", "CTAC"]);
    }

    #[test]
    fn empty_step_fails_with_module_position() {
        let mut rng = StdRng::seed_from_u64(7);
        let mods = [module(2, &["ACAT"]), module(3, &["ACAA"])];
        assert!(matches!(
            search_combinations(&mods, &SearchPolicy::default(), &mut rng),
            Err(DesignError::NoCompatibleOverhangSet { module: 3 })
        ));

        let mods = [module(2, &[])];
        assert!(matches!(
            search_combinations(&mods, &SearchPolicy::default(), &mut rng),
            Err(DesignError::NoCompatibleOverhangSet { module: 2 })
        ));
    }

    #[test]
    fn survivors_are_capped_per_step() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = ["ACAT", "CTAC", "AAGC", "TGAA", "CAAT"];
        let mods = [module(2, &a), module(3, &a), module(4, &a)];
        let policy = SearchPolicy { max_survivors_per_step: Some(3), max_pair_checks: None };
        let combos = search_combinations(&mods, &policy, &mut rng).unwrap();
        assert!(combos.len() <= 3);
        assert!(!combos.is_empty());
        for combo in &combos {
            let hs: Vec<_> = combo.overhangs().collect();
            for i in 0..hs.len() {
                for j in i + 1..hs.len() {
                    assert!(is_compatible(hs[i], hs[j]));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_sample() {
        let a = ["ACAT", "CTAC", "AAGC", "TGAA", "CAAT", "AGTC", "TCCA"];
        let mods = [module(2, &a), module(3, &a), module(4, &a)];
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            search_combinations(&mods, &SearchPolicy::default(), &mut rng).unwrap()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn budget_stops_runaway_search() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = ["ACAT", "CTAC", "AAGC", "TGAA", "CAAT"];
        let mods = [module(2, &a), module(3, &a)];
        let policy = SearchPolicy { max_survivors_per_step: None, max_pair_checks: Some(4) };
        assert!(matches!(
            search_combinations(&mods, &policy, &mut rng),
            Err(DesignError::SearchBudgetExceeded { .. })
        ));
    }
}
