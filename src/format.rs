// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Line-oriented text format for [`Protein`].
//!
//! ```text
//! PROTEIN <name>
//! ATOM_COUNT <integer>
//! ATOM <name> <x> <y> <z>
//! ```
//!
//! The reader is lenient: lines with an unknown leading token are skipped,
//! `ATOM_COUNT` is informational only, and `ATOM` lines that appear before
//! the `PROTEIN` line are dropped.

use crate::error::CError;
use crate::protein::Protein;
use log::{debug, info, warn};
use phf::{phf_map, Map};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    PROTEIN,
    ATOM_COUNT,
    ATOM,
    // Unknown record type
    UNKNOWN_,
}

static RECORDS: Map<&'static str, Record> = phf_map! {
    "PROTEIN" => Record::PROTEIN,
    "ATOM_COUNT" => Record::ATOM_COUNT,
    "ATOM" => Record::ATOM,
};

pub fn get_record(token: &str) -> Record {
    RECORDS.get(token).copied().unwrap_or(Record::UNKNOWN_)
}

/// Parse a protein from `reader`.
///
/// # Errors
///
/// Returns an error on I/O failure, on a malformed or missing field, or if
/// no `PROTEIN` record was found. Atoms read before the failure are discarded.
pub fn read_protein<R: BufRead>(reader: R) -> Result<Protein, CError> {
    let mut protein: Option<Protein> = None;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };

        match get_record(first) {
            Record::PROTEIN => {
                let name = tokens.next().ok_or(CError::MissingToken)?;
                if let Some(existing) = &protein {
                    warn!(
                        "line {}: ignoring second PROTEIN record '{name}', keeping '{}'",
                        lineno + 1,
                        existing.name()
                    );
                } else {
                    protein = Some(Protein::new(name));
                }
            }
            Record::ATOM => {
                let Some(protein) = protein.as_mut() else {
                    debug!("line {}: ATOM before PROTEIN, skipping", lineno + 1);
                    continue;
                };
                let name = tokens.next().ok_or(CError::MissingToken)?;
                let x: f64 = tokens.next().ok_or(CError::MissingToken)?.parse()?;
                let y: f64 = tokens.next().ok_or(CError::MissingToken)?.parse()?;
                let z: f64 = tokens.next().ok_or(CError::MissingToken)?.parse()?;
                protein.add_atom(name, x, y, z);
            }
            Record::ATOM_COUNT => {}
            Record::UNKNOWN_ => {
                debug!("line {}: unknown record '{first}', skipping", lineno + 1);
            }
        }
    }

    protein.ok_or(CError::MissingProtein)
}

fn check_name(name: &str) -> Result<(), CError> {
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(CError::GenericError(format!(
            "name '{name}' cannot be written: names must be non-empty and contain no whitespace"
        )));
    }
    Ok(())
}

/// Check that every name in `protein` can be written as a single token
pub fn validate(protein: &Protein) -> Result<(), CError> {
    check_name(protein.name())?;
    for atom in protein {
        check_name(&atom.name)?;
    }
    Ok(())
}

/// Write `protein` to `writer`.
///
/// Coordinates use the shortest representation that reads back to the same
/// `f64`, so a save/load cycle is lossless.
pub fn write_protein<W: Write>(writer: &mut W, protein: &Protein) -> Result<(), CError> {
    validate(protein)?;
    writeln!(writer, "PROTEIN {}", protein.name())?;
    writeln!(writer, "ATOM_COUNT {}", protein.size())?;
    for atom in protein {
        writeln!(writer, "ATOM {} {} {} {}", atom.name, atom.x, atom.y, atom.z)?;
    }
    Ok(())
}

/// Save `protein` to the file at `path`, replacing any existing content.
///
/// A protein that cannot be written leaves the file at `path` untouched.
pub fn save_to_file(protein: &Protein, path: &Path) -> Result<(), CError> {
    validate(protein)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_protein(&mut writer, protein)?;
    writer.flush()?;
    info!(
        "saved '{}' ({} atoms) to {}",
        protein.name(),
        protein.size(),
        path.display()
    );
    Ok(())
}

/// Load a protein from the file at `path`.
pub fn load_from_file(path: &Path) -> Result<Protein, CError> {
    let file = File::open(path)?;
    let protein = read_protein(BufReader::new(file))?;
    info!(
        "loaded '{}' ({} atoms) from {}",
        protein.name(),
        protein.size(),
        path.display()
    );
    Ok(protein)
}
