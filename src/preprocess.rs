// src/preprocess.rs
// Prepends each module's boundary overhang to its candidate, giving the strings that
// are scanned for overhangs and cut into primers.

use crate::module::Module;
use crate::order::PromoterOrder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedSequence {
    pub position: usize,
    pub sequence: String,
}

/// Module at position `p` takes the overhang of order entry `p - 1`.
///
/// With `merge_junction_base`, a candidate whose first base equals the last base of the
/// overhang shares that base instead of repeating it.
pub fn preprocess(modules: &[Module], order: &PromoterOrder, merge_junction_base: bool) -> Vec<ProcessedSequence> {
    modules
        .iter()
        .map(|module| {
            let prefix = order.overhang(module.position - 1);
            let body = if merge_junction_base && shares_junction_base(prefix, &module.candidate) {
                &module.candidate[1..]
            } else {
                module.candidate.as_str()
            };
            ProcessedSequence {
                position: module.position,
                sequence: format!("{}{}", prefix, body),
            }
        })
        .collect()
}

fn shares_junction_base(prefix: &str, candidate: &str) -> bool {
    match (prefix.as_bytes().last(), candidate.as_bytes().first()) {
        (Some(p), Some(c)) => p.eq_ignore_ascii_case(c),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fusion::{Donor, FusionCode};
    use crate::order::OrderMode;

    fn modules() -> Vec<Module> {
        vec![
            Module::new(1, "a", "GATTACA"),
            Module::new(2, "b", "gcatgc"),
            Module::new(3, "c", "TTTACG"),
        ]
    }

    #[test]
    fn prefixes_follow_preceding_order_entry() {
        let donor = Donor::builtin(FusionCode::PGn1102).unwrap();
        let order = PromoterOrder::resolve(3, donor, &OrderMode::Default).unwrap();
        let processed = preprocess(&modules(), &order, false);

        assert_eq!(processed[0].sequence, "GGCAGATTACA");
        assert_eq!(processed[1].sequence, "GCCGgcatgc");
        assert_eq!(processed[2].sequence, "GTTGTTTACG");
        assert_eq!(processed[2].position, 3);
    }

    #[test]
    fn junction_base_merge_is_opt_in() {
        let donor = Donor::builtin(FusionCode::PGn1101).unwrap();
        let order = PromoterOrder::resolve(3, donor, &OrderMode::Default).unwrap();
        let processed = preprocess(&modules(), &order, true);

        // GCCG ends in G and "gcatgc" starts with g.
        assert_eq!(processed[0].sequence, "GCCGATTACA");
        assert_eq!(processed[1].sequence, "GCCGcatgc");
        assert_eq!(processed[2].sequence, "GTTGTTTACG");
    }
}
