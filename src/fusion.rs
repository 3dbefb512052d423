// src/fusion.rs
// FUSION SITE REGISTRY
// Closed set of promoter and donor identities used in the BsaI assembly scheme.
//
// Each promoter marks a boundary between two modules: its 4bp overhang is prepended to
// the downstream module and its synthesis fragment closes the reverse primer.
// Donors supply the first overhang and the fixed downstream overhang of the construct.

use std::fmt;
use std::str::FromStr;

use crate::error::{DesignError, Result};
use crate::sequence::{is_compatible, is_dna_sequence, is_palindromic, reverse_complement};
use crate::OVERHANG_LEN;

/// Downstream overhang shared by every built-in donor.
pub const DEFAULT_DOWNSTREAM_OVERHANG: &str = "GTTT";

/// 4bp sequences known to self-pair or mis-ligate. Never chosen as an overhang.
pub const SELF_PAIRING_BLOCKLIST: [&str; 24] = [
    "GTTT", "GTGT", "GCGT", "GTCT", "TGCT", "GGCT", "AGGG", "CCCT", "TAAA", "TTTA",
    "TTGA", "TCAA", "TCGG", "GTCA", "GACA", "TGCG", "CTTG", "CGTG", "CGAG", "CCCC",
    "GGGG", "CGCC", "GGCG", "GGAC",
];

pub fn is_blocklisted(overhang: &str) -> bool {
    SELF_PAIRING_BLOCKLIST.iter().any(|b| b.eq_ignore_ascii_case(overhang))
}

// Primer scaffolds. The upstream scaffold carries the BsaI site.
const SCAFFOLD_UPSTREAM: &str = "ggctacGGTCTCt";
const SCAFFOLD_MIDSTREAM: &str = "GTTTCAGAGCTAGAAATAGCAAGTT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FusionCode {
    M6a,
    M6b,
    M6c,
    M3,
    PGn1101,
    PGn1102,
    PGn1103,
    PGn1104,
    CustomDonor,
}

impl FusionCode {
    /// Codes usable as boundaries between modules.
    pub const PROMOTERS: [FusionCode; 4] = [
        FusionCode::M6a, FusionCode::M6b, FusionCode::M6c, FusionCode::M3,
    ];

    pub const DONORS: [FusionCode; 5] = [
        FusionCode::PGn1101, FusionCode::PGn1102, FusionCode::PGn1103, FusionCode::PGn1104,
        FusionCode::CustomDonor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FusionCode::M6a => "m6a",
            FusionCode::M6b => "m6b",
            FusionCode::M6c => "m6c",
            FusionCode::M3 => "m3",
            FusionCode::PGn1101 => "pGN1101",
            FusionCode::PGn1102 => "pGN1102",
            FusionCode::PGn1103 => "pGN1103",
            FusionCode::PGn1104 => "pGN1104",
            FusionCode::CustomDonor => "custom_donor",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Result<Self> {
        let wanted = label.trim();
        Self::PROMOTERS
            .iter()
            .chain(Self::DONORS.iter())
            .copied()
            .find(|code| code.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DesignError::UnknownFusionSite(label.to_string()))
    }

    pub fn is_donor(self) -> bool {
        Self::DONORS.contains(&self)
    }

    /// Boundary overhang registered for this code. Custom donors carry theirs in `Donor`.
    pub fn overhang(self) -> Option<&'static str> {
        match self {
            FusionCode::M6a => Some("GCCG"),
            FusionCode::M6b => Some("GTTG"),
            FusionCode::M6c => Some("TCAG"),
            FusionCode::M3 => Some("GGCA"),
            FusionCode::PGn1101 => Some("GCCG"),
            FusionCode::PGn1102 => Some("GGCA"),
            FusionCode::PGn1103 => Some("TCAG"),
            FusionCode::PGn1104 => Some("GGCA"),
            FusionCode::CustomDonor => None,
        }
    }

    /// Promoter fragment appended to the reverse primer at this boundary.
    pub fn fragment(self) -> Option<&'static str> {
        match self {
            FusionCode::M6a => Some("AGCCAAGCCAGCAC"),
            FusionCode::M6b => Some("ACAAGCGGCAGCGC"),
            FusionCode::M6c => Some("GCCTCAGCGCAGCAG"),
            FusionCode::M3 => Some("ACGGATCATCTGCACAA"),
            _ => None,
        }
    }
}

impl fmt::Display for FusionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FusionCode {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

/// Backbone identity with its resolved overhangs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    code: FusionCode,
    upstream: String,
    downstream: String,
}

impl Donor {
    /// One of the registered pGN donors.
    pub fn builtin(code: FusionCode) -> Result<Self> {
        let upstream = match code.overhang() {
            Some(o) if code.is_donor() => o,
            _ => return Err(DesignError::UnknownFusionSite(code.label().to_string())),
        };
        Ok(Self {
            code,
            upstream: upstream.to_string(),
            downstream: DEFAULT_DOWNSTREAM_OVERHANG.to_string(),
        })
    }

    /// A user-defined donor. An empty downstream overhang falls back to `GTTT`.
    /// Both overhangs must be 4 DNA bases and orthogonal to each other.
    pub fn custom(upstream: &str, downstream: &str) -> Result<Self> {
        let upstream = upstream.trim().to_ascii_uppercase();
        let mut downstream = downstream.trim().to_ascii_uppercase();
        if downstream.is_empty() {
            downstream = DEFAULT_DOWNSTREAM_OVERHANG.to_string();
        }

        for overhang in [&upstream, &downstream] {
            if overhang.len() != OVERHANG_LEN || !is_dna_sequence(overhang) {
                return Err(DesignError::InvalidCustomOverhang(overhang.clone()));
            }
        }

        // is_compatible only rejects a self-complementary first argument.
        if !is_compatible(&upstream, &downstream) || is_palindromic(&downstream) {
            return Err(DesignError::HomologousCustomOverhangs { upstream, downstream });
        }

        Ok(Self { code: FusionCode::CustomDonor, upstream, downstream })
    }

    pub fn code(&self) -> FusionCode {
        self.code
    }

    /// First boundary overhang of the construct.
    pub fn upstream_overhang(&self) -> &str {
        &self.upstream
    }

    pub fn downstream_overhang(&self) -> &str {
        &self.downstream
    }

    pub fn scaffold(&self) -> DonorScaffold {
        // Overhangs are validated DNA, so the complement cannot fail.
        let rc_downstream = reverse_complement(&self.downstream).unwrap_or_default();
        DonorScaffold {
            upstream: SCAFFOLD_UPSTREAM.to_string(),
            midstream: SCAFFOLD_MIDSTREAM.to_string(),
            terminal: format!("{}{}", SCAFFOLD_UPSTREAM, rc_downstream),
        }
    }
}

/// Fixed flanks wrapped around module sequence when building primers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorScaffold {
    pub upstream: String,
    pub midstream: String,
    /// Closes the reverse primer of the final boundary.
    pub terminal: String,
}
