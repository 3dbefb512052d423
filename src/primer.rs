// src/primer.rs
// PRIMER SYNTHESIS
// Builds the primer pair for every module boundary from a chosen overhang combination.
//
// Structure (n >= 3):
// - Forward: [Upstream scaffold] [Module from its overhang onward] [Midstream scaffold]
// - Reverse: [Upstream or Terminal scaffold] [RC of next module up to its overhang] [Promoter fragment]
// The boundary into the last module takes the terminal scaffold and the whole last module.

use crate::error::Result;
use crate::fusion::DonorScaffold;
use crate::module::Module;
use crate::order::PromoterOrder;
use crate::preprocess::ProcessedSequence;
use crate::search::OverhangCombination;
use crate::sequence::reverse_complement;
use crate::OVERHANG_LEN;

/// Reverse primer head of a single-module design.
pub const ANNEALED_REVERSE_TAG: &str = "AAAC";

/// Where a primer pair sits in the construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Single module: an annealed oligo pair, no PCR.
    Annealed,
    /// Two modules joined at their only boundary.
    Sole,
    First,
    Interior,
    /// The boundary leading into the last module.
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimerPair {
    pub boundary: Boundary,
    pub label: String,
    pub forward: String,
    pub reverse: String,
}

impl PrimerPair {
    pub fn forward_name(&self) -> String {
        format!("{}_f", self.label)
    }

    pub fn reverse_name(&self) -> String {
        format!("{}_r", self.label)
    }
}

/// Classifies the boundary after module `position` (1-based) of a `module_num`-module construct.
pub fn boundary_for(position: usize, module_num: usize) -> Boundary {
    match module_num {
        1 => Boundary::Annealed,
        2 => Boundary::Sole,
        _ if position == 1 => Boundary::First,
        _ if position == module_num - 1 => Boundary::Last,
        _ => Boundary::Interior,
    }
}

/// Primer pairs for one combination: one pair per boundary, or a single annealed pair
/// when there is only one module. `processed` is indexed by position - 1.
pub fn synthesize(
    modules: &[Module],
    processed: &[ProcessedSequence],
    order: &PromoterOrder,
    scaffold: &DonorScaffold,
    combination: &OverhangCombination,
) -> Result<Vec<PrimerPair>> {
    let module_num = processed.len();
    let seq = |position: usize| processed[position - 1].sequence.as_str();
    // Internal modules start at position 2.
    let offset = |position: usize| combination.candidates[position - 2].offset;

    match module_num {
        0 => Ok(Vec::new()),
        1 => {
            let oligo = seq(1);
            Ok(vec![PrimerPair {
                boundary: Boundary::Annealed,
                label: modules[0].name.clone(),
                forward: oligo.to_string(),
                reverse: format!("{}{}", ANNEALED_REVERSE_TAG, reverse_complement(&oligo[OVERHANG_LEN..])?),
            }])
        }
        2 => Ok(vec![PrimerPair {
            boundary: Boundary::Sole,
            label: format!("{}&{}_{}", modules[0].name, modules[1].name, order.label(1)),
            forward: format!("{}{}{}", scaffold.upstream, seq(1), scaffold.midstream),
            reverse: format!("{}{}{}", scaffold.terminal, reverse_complement(seq(2))?, order.fragment(1)),
        }]),
        _ => (1..module_num)
            .map(|p| -> Result<PrimerPair> {
                let boundary = boundary_for(p, module_num);
                let body = match boundary {
                    Boundary::First => seq(p),
                    _ => &seq(p)[offset(p)..],
                };
                let forward = format!("{}{}{}", scaffold.upstream, body, scaffold.midstream);

                let reverse = match boundary {
                    Boundary::Last => format!(
                        "{}{}{}",
                        scaffold.terminal,
                        reverse_complement(seq(p + 1))?,
                        order.fragment(p)
                    ),
                    _ => {
                        let next = p + 1;
                        let upto = offset(next) + OVERHANG_LEN;
                        format!(
                            "{}{}{}",
                            scaffold.upstream,
                            reverse_complement(&seq(next)[..upto])?,
                            order.fragment(p)
                        )
                    }
                };

                let label = if boundary == Boundary::Last {
                    format!("{}&{}_{}", modules[p - 1].name, modules[p].name, order.label(p))
                } else {
                    format!("{}_{}", modules[p - 1].name, order.label(p))
                };

                Ok(PrimerPair { boundary, label, forward, reverse })
            })
            .collect(),
    }
}
