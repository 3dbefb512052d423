// src/sequence.rs
// Base-level sequence operations shared by every stage of the designer.
// All comparisons are case-insensitive; anything outside A/C/G/T is rejected.

use crate::error::{DesignError, Result};
use crate::{BSAI_SITE, OVERHANG_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A, C, G, T,
}

impl Base {
    pub fn to_char(self) -> char {
        match self {
            Base::A => 'A', Base::C => 'C', Base::G => 'G', Base::T => 'T',
        }
    }

    /// Accepts either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Base::A), 'C' => Some(Base::C),
            'G' => Some(Base::G), 'T' => Some(Base::T),
            _ => None,
        }
    }

    pub fn complement(self) -> Base {
        match self {
            Base::A => Base::T, Base::T => Base::A,
            Base::C => Base::G, Base::G => Base::C,
        }
    }
}

/// Uppercases, reverses and complements `seq`.
/// Fails with `InvalidSequence` on the first non-ACGT character instead of dropping it.
pub fn reverse_complement(seq: &str) -> Result<String> {
    let mut out = String::with_capacity(seq.len());
    for c in seq.chars().rev() {
        let base = Base::from_char(c).ok_or_else(|| DesignError::InvalidSequence(seq.to_string()))?;
        out.push(base.complement().to_char());
    }
    Ok(out)
}

/// Number of positions at which `x` and `y` carry the same base, ignoring case.
///
/// Only meaningful for equal-length inputs; the overhang checks call it at length 4,
/// where the result ranges over 0..=4.
pub fn similarity(x: &str, y: &str) -> usize {
    debug_assert_eq!(x.len(), y.len(), "similarity over unequal lengths");
    x.bytes()
        .zip(y.bytes())
        .filter(|(a, b)| a.eq_ignore_ascii_case(b))
        .count()
}

/// True when every character is one of A, C, G, T in either case.
pub fn is_dna_sequence(seq: &str) -> bool {
    seq.chars().all(|c| Base::from_char(c).is_some())
}

/// Case-insensitive search for the BsaI recognition site.
pub fn contains_motif(seq: &str) -> bool {
    seq.to_ascii_uppercase().contains(BSAI_SITE)
}

/// A 4bp overhang that reads the same on both strands.
pub fn is_palindromic(overhang: &str) -> bool {
    reverse_complement(overhang)
        .map(|rc| rc.eq_ignore_ascii_case(overhang))
        .unwrap_or(false)
}

/// Orthogonality between two overhangs: `a` is not its own reverse complement, and neither
/// `a` nor its reverse complement share 3 or more positions with `b`.
pub fn is_compatible(a: &str, b: &str) -> bool {
    let Ok(rc_a) = reverse_complement(a) else { return false; };
    !rc_a.eq_ignore_ascii_case(a)
        && similarity(a, b) < 3
        && similarity(&rc_a, b) < 3
}

/// Every full window of overhang length, with its offset.
pub fn windows(seq: &str) -> impl Iterator<Item = (usize, &str)> {
    let last = seq.len().saturating_sub(OVERHANG_LEN - 1);
    (0..last).filter_map(move |i| seq.get(i..i + OVERHANG_LEN).map(|w| (i, w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_complement_round_trips() {
        let bases = ['A', 'C', 'G', 'T'];
        let mut seen = 0;
        for a in bases {
            for b in bases {
                for c in bases {
                    for d in bases {
                        let overhang: String = [a, b, c, d].iter().collect();
                        let rc = reverse_complement(&overhang).unwrap();
                        assert_eq!(reverse_complement(&rc).unwrap(), overhang);
                        assert_eq!(reverse_complement(&overhang.to_ascii_lowercase()).unwrap(), rc);
                        seen += 1;
                    }
                }
            }
        }
        assert_eq!(seen, 256);
        assert_eq!(reverse_complement("aacg").unwrap(), "CGTT");
    }

    #[test]
    fn reverse_complement_rejects_unknown_bases() {
        assert!(matches!(reverse_complement("ACNT"), Err(DesignError::InvalidSequence(_))));
    }

    #[test]
    fn similarity_is_reflexive_and_symmetric() {
        assert_eq!(similarity("GCCG", "GCCG"), 4);
        assert_eq!(similarity("GCCG", "gccg"), 4);
        assert_eq!(similarity("ACAT", "GTTT"), similarity("GTTT", "ACAT"));
        assert_eq!(similarity("ACAT", "GTTT"), 1);
        assert_eq!(similarity("AAAA", "TTTT"), 0);
    }

    #[test]
    fn alphabet_check_ignores_case() {
        assert!(is_dna_sequence("ACGTacgt"));
        assert!(!is_dna_sequence("ACGN"));
        assert!(!is_dna_sequence("AC GT"));
    }

    #[test]
    fn motif_detection_ignores_case() {
        assert!(contains_motif("AAGGTCTCAAA"));
        assert!(contains_motif("aaggtctcaaa"));
        assert!(!contains_motif("GAGACC"));
    }

    #[test]
    fn palindromes_are_never_compatible() {
        assert!(is_palindromic("ACGT"));
        assert!(is_palindromic("aatt"));
        assert!(!is_compatible("ACGT", "GTTT"));
        assert!(is_compatible("ACAT", "GTTT"));
        assert!(!is_compatible("GCCG", "GCCG"));
    }

    #[test]
    fn windows_cover_every_full_offset() {
        let w: Vec<_> = windows("ACGTAC").collect();
        assert_eq!(w, vec![(0, "ACGT"), (1, "CGTA"), (2, "GTAC")]);
        assert_eq!(windows("ACG").count(), 0);
    }
}
