// src/design.rs
// DESIGN PIPELINE
// Request in, ranked overhang combinations with their primers out:
// order -> preprocess -> screen/filter -> search -> verify -> synthesize.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DesignConfig;
use crate::error::{DesignError, Result};
use crate::filter::filter_modules;
use crate::fusion::Donor;
use crate::module::Module;
use crate::order::{OrderMode, PromoterOrder};
use crate::preprocess::{preprocess, ProcessedSequence};
use crate::primer::{synthesize, PrimerPair};
use crate::search::{search_combinations, OverhangCombination};
use crate::sequence::is_compatible;

#[derive(Debug, Clone)]
pub struct DesignRequest {
    pub donor: Donor,
    /// Modules in construct order, positions 1..=n.
    pub modules: Vec<Module>,
    pub order: OrderMode,
}

/// One accepted overhang assignment and the primers it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignedCombination {
    /// Donor overhang, each chosen internal overhang, downstream overhang.
    pub overhangs: Vec<String>,
    pub combination: OverhangCombination,
    pub primers: Vec<PrimerPair>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignResponse {
    pub order: PromoterOrder,
    pub modules: Vec<Module>,
    pub processed: Vec<ProcessedSequence>,
    pub combinations: Vec<DesignedCombination>,
}

impl DesignResponse {
    /// Single-module designs are annealed oligo pairs rather than PCR primers.
    pub fn is_annealed(&self) -> bool {
        self.modules.len() == 1
    }
}

pub struct Designer {
    config: DesignConfig,
}

impl Designer {
    pub fn new(config: DesignConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    /// Runs with the configured seed, or an entropy-seeded RNG when none is set.
    pub fn design(&self, request: &DesignRequest) -> Result<DesignResponse> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.design_with_rng(request, &mut rng)
    }

    pub fn design_with_rng<R: Rng + ?Sized>(&self, request: &DesignRequest, rng: &mut R) -> Result<DesignResponse> {
        let modules = &request.modules;
        check_positions(modules)?;
        let module_num = modules.len();

        let order = PromoterOrder::resolve(module_num, request.donor.clone(), &request.order)?;
        info!("{} modules, promoter order: {}", module_num, order.describe());

        let processed = preprocess(modules, &order, self.config.merge_junction_base);
        let donor_overhang = request.donor.upstream_overhang();
        let downstream_overhang = request.donor.downstream_overhang();

        let candidates = filter_modules(&processed, donor_overhang, downstream_overhang)?;

        let mut combinations = if candidates.is_empty() {
            // One or two modules: nothing to choose, a single design.
            vec![OverhangCombination { candidates: Vec::new() }]
        } else {
            info!("Searching overhang combinations across {} internal modules", candidates.len());
            search_combinations(&candidates, &self.config.search_policy(), rng)?
        };

        let found = combinations.len();
        combinations.retain(|combo| {
            let conflicts = find_conflicts(&full_overhangs(combo, donor_overhang, downstream_overhang));
            if !conflicts.is_empty() {
                warn!("Dropping overhang combination with conflicting pairs {:?}", conflicts);
            }
            conflicts.is_empty()
        });
        if combinations.is_empty() {
            let module = candidates.last().map(|m| m.position).unwrap_or(1);
            return Err(DesignError::NoCompatibleOverhangSet { module });
        }
        combinations.truncate(self.config.max_combinations.max(1));
        debug!("{} combinations found, {} kept", found, combinations.len());

        let scaffold = request.donor.scaffold();
        let designed = combinations
            .into_iter()
            .map(|combination| -> Result<DesignedCombination> {
                let primers = synthesize(modules, &processed, &order, &scaffold, &combination)?;
                Ok(DesignedCombination {
                    overhangs: full_overhangs(&combination, donor_overhang, downstream_overhang),
                    combination,
                    primers,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DesignResponse {
            order,
            modules: modules.clone(),
            processed,
            combinations: designed,
        })
    }
}

fn check_positions(modules: &[Module]) -> Result<()> {
    if modules.is_empty() {
        return Err(DesignError::NoModules);
    }
    for (index, module) in modules.iter().enumerate() {
        if module.position != index + 1 {
            return Err(DesignError::ModuleOutOfOrder { index, found: module.position });
        }
    }
    Ok(())
}

/// Donor overhang, chosen internal overhangs, downstream overhang.
pub fn full_overhangs(combination: &OverhangCombination, donor: &str, downstream: &str) -> Vec<String> {
    std::iter::once(donor)
        .chain(combination.overhangs())
        .chain(std::iter::once(downstream))
        .map(str::to_string)
        .collect()
}

/// Index pairs within `overhangs` that break orthogonality, checked from both sides so a
/// palindrome anywhere in the list is caught.
pub fn find_conflicts(overhangs: &[String]) -> Vec<(usize, usize)> {
    let mut conflicts = Vec::new();
    for i in 0..overhangs.len() {
        for j in i + 1..overhangs.len() {
            if !is_compatible(&overhangs[i], &overhangs[j]) || !is_compatible(&overhangs[j], &overhangs[i]) {
                conflicts.push((i, j));
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicts_are_reported_by_index() {
        let overhangs: Vec<String> = ["GCCG", "ACAT", "ACAA", "GTTT"].iter().map(|s| s.to_string()).collect();
        assert_eq!(find_conflicts(&overhangs), vec![(1, 2)]);
    }

    #[test]
    fn palindrome_in_last_place_is_a_conflict() {
        let overhangs: Vec<String> = ["GCCG", "ACAT", "AATT"].iter().map(|s| s.to_string()).collect();
        assert_eq!(find_conflicts(&overhangs), vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn zero_max_combinations_still_reports_one() {
        let designer = Designer::new(DesignConfig { seed: Some(3), max_combinations: 0, ..DesignConfig::default() });
        let request = DesignRequest {
            donor: Donor::builtin(crate::fusion::FusionCode::PGn1101).unwrap(),
            modules: vec![
                Module::new(1, "a", "GATTACAGATTACA"),
                Module::new(2, "b", "ACATGGAATCTTCA"),
                Module::new(3, "c", "CCAGTTAGGCAT"),
            ],
            order: OrderMode::Default,
        };
        let response = designer.design(&request).unwrap();
        assert_eq!(response.combinations.len(), 1);
    }

    #[test]
    fn positions_must_be_sequential() {
        let modules = vec![Module::new(1, "a", "ACGT"), Module::new(3, "b", "ACGT")];
        assert!(matches!(
            check_positions(&modules),
            Err(DesignError::ModuleOutOfOrder { index: 1, found: 3 })
        ));
        assert!(matches!(check_positions(&[]), Err(DesignError::NoModules)));
    }

    #[test]
    fn full_overhang_list_brackets_internal_choices() {
        let combo = OverhangCombination {
            candidates: vec![crate::filter::OverhangCandidate { sequence: "ACAT".into(), offset: 4 }],
        };
        assert_eq!(full_overhangs(&combo, "GCCG", "GTTT"), vec!["GCCG", "ACAT", "GTTT"]);
    }
}
