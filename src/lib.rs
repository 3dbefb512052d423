// src/lib.rs
pub mod config;
pub mod design;
pub mod error;
pub mod filter;
pub mod fusion;
pub mod input;
pub mod module;
pub mod order;
pub mod preprocess;
pub mod primer;
pub mod report;
pub mod search;
pub mod sequence;

pub use config::DesignConfig;
pub use design::{DesignRequest, DesignResponse, DesignedCombination, Designer};
pub use error::{DesignError, Result};
pub use fusion::{Donor, FusionCode};
pub use module::Module;
pub use order::{OrderMode, PromoterOrder};

/// BsaI recognition site. Must never appear in a processed module sequence.
pub const BSAI_SITE: &str = "GGTCTC";

/// Length of every fusion overhang.
pub const OVERHANG_LEN: usize = 4;
