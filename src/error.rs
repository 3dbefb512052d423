// src/error.rs
// Every failure a design request can raise. All of them abort the request;
// nothing is retried and no partial result is handed back.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesignError {
    #[error("custom donor overhang '{0}' must be 4 bases of A, T, C and G")]
    InvalidCustomOverhang(String),

    #[error("custom donor overhangs {upstream} and {downstream} are homologous or complementary, assembly would be error-prone")]
    HomologousCustomOverhangs { upstream: String, downstream: String },

    #[error("expected {expected} promoter choices for this module count, found {found}")]
    ModuleCountMismatch { expected: usize, found: usize },

    #[error("module {module} supplies {count} candidate sequences, only one target per module is supported")]
    MultipleCandidatesUnsupported { module: usize, count: usize },

    #[error("module {module} has no candidate sequence")]
    MissingCandidate { module: usize },

    #[error("no modules were supplied")]
    NoModules,

    #[error("module at index {index} has position {found}, modules must be numbered 1..n in order")]
    ModuleOutOfOrder { index: usize, found: usize },

    #[error("unknown fusion site '{0}'")]
    UnknownFusionSite(String),

    #[error("'{0}' is a donor and cannot be used as a boundary promoter")]
    InvalidPromoterChoice(String),

    #[error("sequence '{0}' contains bases other than A, T, C and G")]
    InvalidSequence(String),

    #[error("sequence '{sequence}' of module {module} contains bases other than A, T, C and G")]
    InvalidModuleSequence { module: usize, sequence: String },

    #[error("BsaI site (GGTCTC) present within the candidate target {sequence} of module {module}")]
    IllegalMotifFound { module: usize, sequence: String },

    #[error("no compatible overhang set could be assembled at module {module}")]
    NoCompatibleOverhangSet { module: usize },

    #[error("overhang search exceeded its budget after {checks} pairwise checks")]
    SearchBudgetExceeded { checks: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DesignError>;
