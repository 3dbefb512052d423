// src/report.rs
// Renders a design as tab-separated text and writes it to disk.
//
// Columns are padded with spaces for on-screen reading; the saved file collapses any
// run of spaces before a tab so it parses as plain TSV.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::design::DesignResponse;
use crate::error::Result;

const SEQUENCE_COLUMN: usize = 65;
const ANNEALED_SEQUENCE_COLUMN: usize = 30;

pub const ANNEALED_NOTE: &str =
    "Annealed oligonucleotide pair for direct introduction of protospacer without PCR.";

static PADDING_BEFORE_TAB: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\t").expect("static regex"));

pub fn render(response: &DesignResponse) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "The candidate target sequence for every module is:");
    for module in &response.modules {
        let _ = writeln!(out, "Module\t{}:\t{}", module.position, module.candidate);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "The total amount of module is:\t{}", response.modules.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "The donor and the promoter order is:");
    let _ = writeln!(out, "{}", response.order.describe());
    let _ = writeln!(out);

    let name_width = response
        .combinations
        .iter()
        .flat_map(|c| c.primers.iter())
        .map(|p| p.label.len() + 2)
        .max()
        .unwrap_or(0)
        .max("PrimerName".len());

    let with_choice = response.modules.len() >= 3;
    let seq_width = if response.is_annealed() { ANNEALED_SEQUENCE_COLUMN } else { SEQUENCE_COLUMN };

    if with_choice {
        let _ = write!(out, "{:<6}\t", "Choice");
    }
    let _ = writeln!(
        out,
        "{:<nw$}\t{:<sw$}\tLength\t{:<nw$}\t{:<sw$}\tLength",
        "PrimerName", "Forward", "PrimerName", "Reverse",
        nw = name_width, sw = seq_width,
    );

    for (choice, designed) in response.combinations.iter().enumerate() {
        for pair in &designed.primers {
            if with_choice {
                let _ = write!(out, "{:<6}\t", choice + 1);
            }
            let _ = writeln!(
                out,
                "{:<nw$}\t{:<sw$}\t{}\t{:<nw$}\t{:<sw$}\t{}",
                pair.forward_name(), pair.forward, pair.forward.len(),
                pair.reverse_name(), pair.reverse, pair.reverse.len(),
                nw = name_width, sw = seq_width,
            );
        }
        let _ = writeln!(out, "Overhangs:\t{}", designed.overhangs.join(","));
        let _ = writeln!(out);
    }

    if response.is_annealed() {
        let _ = writeln!(out, "{}", ANNEALED_NOTE);
    }
    out
}

/// Strips the on-screen padding: any run of spaces before a tab becomes the tab alone.
pub fn collapse_padding(text: &str) -> String {
    PADDING_BEFORE_TAB.replace_all(text, "\t").into_owned()
}

/// `primers_<YYYY-MM-DD_HH-MM-SS>.tsv`
pub fn default_file_name(now: DateTime<Local>) -> String {
    format!("primers_{}.tsv", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// Writes the collapsed report to `path`.
pub fn save(text: &str, path: &Path) -> Result<()> {
    fs::write(path, collapse_padding(text))?;
    Ok(())
}

/// Writes the collapsed report into `dir` under a timestamped name and returns the path.
pub fn save_in_dir(text: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(default_file_name(Local::now()));
    save(text, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn padding_before_tabs_collapses() {
        assert_eq!(collapse_padding("a   \tb\t c  \td"), "a\tb\t c\td");
        assert_eq!(collapse_padding("no tabs here  "), "no tabs here  ");
    }

    #[test]
    fn file_name_uses_local_timestamp() {
        let when = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(default_file_name(when), "primers_2024-03-09_14-05-07.tsv");
    }

    #[test]
    fn saved_file_has_no_padding() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_in_dir("x    \ty\n", dir.path()).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("primers_"));
        assert_eq!(fs::read_to_string(path).unwrap(), "x\ty\n");
    }
}
