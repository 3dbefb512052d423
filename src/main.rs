// src/main.rs
// GGPRIMER: Golden Gate overhang selection and primer design.
// Entry point for the Command Line Interface.
// Handles module input, configuration layering and report output.

mod cli;

use ggprimer::config::DesignConfig;
use ggprimer::fusion::{Donor, FusionCode};
use ggprimer::input::{parse_modules, read_modules};
use ggprimer::order::OrderMode;
use ggprimer::{report, DesignRequest, Designer};
use crate::cli::{Cli, Commands};

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use anyhow::{Context, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    match cli.command {
        // COMMAND: DESIGN
        Commands::Design {
            input, seqs, donor, upstream_overhang, downstream_overhang, order, config,
            seed, max_survivors, unbounded, max_combinations, merge_junction_base, save, output,
        } => {
            // 1. Configuration: file first, flags override
            let mut design_config = match &config {
                Some(path) => DesignConfig::load(path)?,
                None => DesignConfig::default(),
            };
            if seed.is_some() { design_config.seed = seed; }
            if max_survivors.is_some() { design_config.max_survivors_per_step = max_survivors; }
            if unbounded { design_config.max_survivors_per_step = None; }
            if let Some(n) = max_combinations { design_config.max_combinations = n; }
            if merge_junction_base { design_config.merge_junction_base = true; }
            log::debug!("Configuration: {:?}", design_config);

            // 2. Donor
            let donor_code = FusionCode::from_label(&donor)?;
            let donor = if donor_code == FusionCode::CustomDonor {
                Donor::custom(
                    upstream_overhang.as_deref().unwrap_or_default(),
                    downstream_overhang.as_deref().unwrap_or_default(),
                )?
            } else {
                Donor::builtin(donor_code)?
            };

            // 3. Modules
            let modules = if !seqs.is_empty() {
                parse_modules(&seqs.join("\n"))?
            } else if let Some(path) = &input {
                let file = File::open(path).context(format!("Failed to open modules: {}", path.display()))?;
                read_modules(BufReader::new(file))?
            } else {
                read_modules(io::stdin().lock())?
            };

            // 4. Ordering
            let order = match order {
                Some(labels) => OrderMode::Explicit(
                    labels.iter().map(|l| FusionCode::from_label(l)).collect::<Result<_, _>>()?,
                ),
                None => OrderMode::Default,
            };

            let request = DesignRequest { donor, modules, order };
            log::info!("Designing primers for {} modules...", request.modules.len());

            let response = Designer::new(design_config).design(&request)?;
            let text = report::render(&response);
            print!("{}", text);

            // 5. Persistence
            if let Some(path) = &output {
                report::save(&text, path).context(format!("Failed to write report: {}", path.display()))?;
                eprintln!("[✔] The result has been saved in: {}", path.display());
            } else if let Some(dir) = &save {
                let path = report::save_in_dir(&text, dir)
                    .context(format!("Failed to write report into: {}", dir.display()))?;
                eprintln!("[✔] The result has been saved in: {}", path.display());
            }
        }

        // COMMAND: SITES
        Commands::Sites => {
            println!("Label\tRole\tOverhang\tFragment");
            for code in FusionCode::PROMOTERS.iter().chain(FusionCode::DONORS.iter()) {
                let role = if code.is_donor() { "donor" } else { "promoter" };
                println!(
                    "{}\t{}\t{}\t{}",
                    code.label(),
                    role,
                    code.overhang().unwrap_or("user-defined"),
                    code.fragment().unwrap_or("-"),
                );
            }
        }
    }
    Ok(())
}
