// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ggprimer", author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(help_template = "\
{before-help}{name} v{version}
{author-with-newline}{about-with-newline}
{usage-heading}
{usage}

{all-args}{after-help}
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose orthogonal overhangs and design primers for a multi-module assembly.
    #[command(visible_alias = "run")]
    Design {
        /// Tab-delimited module file (`name<TAB>sequence` or `sequence` per line).
        /// Reads stdin when neither this nor --seq is given.
        #[arg(value_name = "MODULE_FILE")]
        input: Option<PathBuf>,

        /// Module given inline, same format as a file line. Repeat in construct order.
        #[arg(long = "seq", value_name = "LINE", conflicts_with = "input")]
        seqs: Vec<String>,

        /// Donor backbone: pGN1101, pGN1102, pGN1103, pGN1104 or custom_donor
        #[arg(long, default_value = "pGN1101", value_name = "DONOR")]
        donor: String,

        /// Upstream overhang of a custom donor (4bp)
        #[arg(long, value_name = "SEQ", required_if_eq("donor", "custom_donor"))]
        upstream_overhang: Option<String>,

        /// Downstream overhang of a custom donor (4bp, defaults to GTTT)
        #[arg(long, value_name = "SEQ")]
        downstream_overhang: Option<String>,

        /// Explicit promoter per boundary (m6a, m6b, m6c, m3), comma separated.
        /// Must list one entry fewer than there are modules. Default ordering otherwise.
        #[arg(long, value_delimiter = ',', value_name = "PROMOTERS")]
        order: Option<Vec<String>>,

        /// JSON configuration file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Seed the overhang sampler for reproducible output
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Partial combinations kept after each search step
        #[arg(long, value_name = "N", conflicts_with = "unbounded")]
        max_survivors: Option<usize>,

        /// Keep every compatible partial combination (no sampling)
        #[arg(long)]
        unbounded: bool,

        /// Number of overhang combinations to report
        #[arg(long, value_name = "N")]
        max_combinations: Option<usize>,

        /// Share a module's first base with its overhang when they match
        #[arg(long)]
        merge_junction_base: bool,

        /// Also save the report as primers_<timestamp>.tsv in DIR (default: current directory)
        #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
        save: Option<PathBuf>,

        /// Save the report to this exact path
        #[arg(short, long, value_name = "FILE", conflicts_with = "save")]
        output: Option<PathBuf>,
    },

    /// List the registered promoter and donor fusion sites.
    Sites,
}
