// src/input.rs
use std::io::{self, BufRead};

use crate::error::{DesignError, Result};
use crate::module::Module;

/// Streams modules out of tab-delimited text, one module per line.
///
/// Accepted line shapes:
/// - `name<TAB>sequence`
/// - `sequence` (the module is named after its position)
///
/// Blank lines are skipped and do not advance the position. A line carrying more than
/// one sequence after its name is rejected, since only one target per module is supported.
pub struct ModuleReader<R> {
    lines: io::Lines<R>,
    position: usize,
}

impl<R: BufRead> ModuleReader<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines(), position: 0 }
    }
}

impl<R: BufRead> Iterator for ModuleReader<R> {
    type Item = Result<Module>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw_line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(DesignError::Io(e))),
            };
            let line = raw_line.trim_end_matches('\r');
            if line.trim().is_empty() { continue; }

            self.position += 1;
            return Some(parse_line(self.position, line));
        }
    }
}

fn parse_line(position: usize, line: &str) -> Result<Module> {
    let mut fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    // Spreadsheet exports pad rows with empty cells; `name<TAB>` still means a missing sequence.
    while fields.len() > 2 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    match fields.as_slice() {
        [sequence] => Module::from_candidates(position, None, &[*sequence]),
        [name, candidates @ ..] => Module::from_candidates(position, Some(*name), candidates),
        [] => Err(DesignError::MissingCandidate { module: position }),
    }
}

/// Collects every module from `reader`, failing on the first bad line.
pub fn read_modules<R: BufRead>(reader: R) -> Result<Vec<Module>> {
    let modules = ModuleReader::new(reader).collect::<Result<Vec<_>>>()?;
    if modules.is_empty() {
        return Err(DesignError::NoModules);
    }
    Ok(modules)
}

/// Convenience wrapper for in-memory text.
pub fn parse_modules(text: &str) -> Result<Vec<Module>> {
    read_modules(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_bare_lines() {
        let modules = parse_modules("sgA\tGATTACA\r\nCCATGG\n\nsgC\tTTCAGA\n").unwrap();
        assert_eq!(modules, vec![
            Module::new(1, "sgA", "GATTACA"),
            Module::new(2, "2", "CCATGG"),
            Module::new(3, "sgC", "TTCAGA"),
        ]);
    }

    #[test]
    fn several_candidates_rejected() {
        let err = parse_modules("sgA\tGATTACA\nsgB\tCCATGG\tTTGACC\n").unwrap_err();
        assert!(matches!(err, DesignError::MultipleCandidatesUnsupported { module: 2, count: 2 }));
    }

    #[test]
    fn trailing_tabs_ignored() {
        let modules = parse_modules("sg1\tACGTACGT\t\nsg2\tTTGACC\t\t\r\n").unwrap();
        assert_eq!(modules, vec![
            Module::new(1, "sg1", "ACGTACGT"),
            Module::new(2, "sg2", "TTGACC"),
        ]);
    }

    #[test]
    fn empty_sequence_rejected() {
        let err = parse_modules("sgA\t\n").unwrap_err();
        assert!(matches!(err, DesignError::MissingCandidate { module: 1 }));
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(parse_modules("\n\n"), Err(DesignError::NoModules)));
    }
}
