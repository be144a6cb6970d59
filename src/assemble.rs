//! Primer source-plate assembly.
//!
//! Collects every designed primer from the construct table, deduplicates by
//! full sequence (first occurrence keeps the name assigned during table
//! build), and lays the unique set onto a 384-well plate filled down each
//! column. Unfilled wells stay on the plate with empty name/sequence so the
//! order form always describes the complete plate.

use std::collections::HashSet;

use crate::config::DesignConfig;
use crate::construct::ConstructTable;
use crate::error::{Error, Result};
use crate::plate::WellAddress;
use crate::primer::Direction;

/// One well of the primer source plate.
///
/// The modification fields are placeholders required by the order-form
/// layout and are always empty strings.
#[derive(Clone, Debug)]
pub struct PrimerPlateRow {
    pub well: WellAddress,
    pub name: String,
    pub sequence: String,
    pub five_prime_mod: String,
    pub three_prime_mod: String,
}

impl PrimerPlateRow {
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// The assembled primer source plate, one row per physical well.
#[derive(Clone, Debug)]
pub struct PrimerPlate {
    pub rows: Vec<PrimerPlateRow>,
}

impl PrimerPlate {
    /// Wells that actually hold a primer.
    pub fn filled(&self) -> impl Iterator<Item = &PrimerPlateRow> {
        self.rows.iter().filter(|r| !r.is_empty())
    }
}

/// Deduplicate the construct table's primers and place them on the plate.
pub fn assemble(table: &ConstructTable, cfg: &DesignConfig) -> Result<PrimerPlate> {
    // forward primers first, then reverse, preserving table row order
    let mut unique: Vec<(String, String)> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for direction in [Direction::Forward, Direction::Reverse] {
        for row in &table.rows {
            let sequence = row.full_sequence(direction);
            if seen.insert(sequence.to_string()) {
                unique.push((row.primer_name(direction).to_string(), sequence.to_string()));
            }
        }
    }

    let capacity = cfg.primer_plate.capacity();
    if unique.len() > capacity {
        return Err(Error::PlateCapacity {
            plate: "primer",
            have: unique.len(),
            capacity,
        });
    }

    let wells = cfg.primer_plate.wells_column_major();
    let rows = wells
        .into_iter()
        .enumerate()
        .map(|(i, well)| match unique.get(i) {
            Some((name, sequence)) => PrimerPlateRow {
                well,
                name: name.clone(),
                sequence: sequence.clone(),
                five_prime_mod: String::new(),
                three_prime_mod: String::new(),
            },
            None => PrimerPlateRow {
                well,
                name: String::new(),
                sequence: String::new(),
                five_prime_mod: String::new(),
                three_prime_mod: String::new(),
            },
        })
        .collect();
    Ok(PrimerPlate { rows })
}
