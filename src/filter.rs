// src/filter.rs
// OVERHANG CANDIDATE FILTER
// 1. Fatal screen: a BsaI site anywhere in a processed sequence aborts the request.
// 2. Candidacy: every 4bp window of an internal module that is orthogonal to the donor
//    and downstream overhangs, and not a known self-pairing sequence.

use log::debug;

use crate::error::{DesignError, Result};
use crate::fusion::is_blocklisted;
use crate::preprocess::ProcessedSequence;
use crate::sequence::{contains_motif, is_compatible, is_dna_sequence, windows};

/// A 4bp window that may serve as the upstream overhang of its module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverhangCandidate {
    /// Uppercased window.
    pub sequence: String,
    /// Index of the window within the processed sequence.
    pub offset: usize,
}

/// Candidates found for one internal module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCandidates {
    pub position: usize,
    pub candidates: Vec<OverhangCandidate>,
}

/// Rejects the whole request if any processed sequence carries the BsaI site, then checks
/// that every sequence is plain DNA.
pub fn screen(processed: &[ProcessedSequence]) -> Result<()> {
    if let Some(bad) = processed.iter().find(|p| contains_motif(&p.sequence)) {
        return Err(DesignError::IllegalMotifFound {
            module: bad.position,
            sequence: bad.sequence.clone(),
        });
    }
    if let Some(bad) = processed.iter().find(|p| !is_dna_sequence(&p.sequence)) {
        return Err(DesignError::InvalidModuleSequence {
            module: bad.position,
            sequence: bad.sequence.clone(),
        });
    }
    Ok(())
}

/// Windows of `sequence` usable as an overhang next to the donor and downstream overhangs.
pub fn filter_candidates(sequence: &str, donor_overhang: &str, downstream_overhang: &str) -> Vec<OverhangCandidate> {
    windows(sequence)
        .filter(|(_, window)| {
            is_compatible(window, downstream_overhang)
                && is_compatible(window, donor_overhang)
                && !is_blocklisted(window)
        })
        .map(|(offset, window)| OverhangCandidate {
            sequence: window.to_ascii_uppercase(),
            offset,
        })
        .collect()
}

/// Screens every sequence, then collects candidates for the internal modules
/// (all but the first and last). A module without candidates is kept with an empty list.
pub fn filter_modules(
    processed: &[ProcessedSequence],
    donor_overhang: &str,
    downstream_overhang: &str,
) -> Result<Vec<ModuleCandidates>> {
    screen(processed)?;

    let module_num = processed.len();
    let internal = processed
        .iter()
        .filter(|p| p.position != 1 && p.position != module_num)
        .map(|p| {
            let candidates = filter_candidates(&p.sequence, donor_overhang, downstream_overhang);
            debug!("module {}: {} overhang candidates", p.position, candidates.len());
            ModuleCandidates { position: p.position, candidates }
        })
        .collect();
    Ok(internal)
}
