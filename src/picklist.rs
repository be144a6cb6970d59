//! Transfer picklist generation.
//!
//! Cross-references each construct's primers against the assembled source
//! plate and emits one transfer per (construct, direction): source well →
//! construct destination well at the fixed volume. The lookup is an exact
//! full-sequence match; a miss is a hard error rather than a blank row,
//! since a picklist with silent gaps dispenses wrong reactions at the bench.

use std::collections::HashMap;

use crate::assemble::PrimerPlate;
use crate::config::DesignConfig;
use crate::construct::ConstructTable;
use crate::error::{Error, Result};
use crate::plate::WellAddress;
use crate::primer::Direction;

/// One liquid transfer for the dispenser.
#[derive(Clone, Debug)]
pub struct TransferRecord {
    pub source_plate_barcode: String,
    pub source_plate_name: String,
    pub source_plate_type: String,
    pub source_well: WellAddress,
    pub destination_plate_barcode: String,
    pub destination_plate_name: String,
    pub destination_well: WellAddress,
    /// Nanoliters.
    pub transfer_volume_nl: f64,
    /// The assigned name of the primer being moved.
    pub sample_name: String,
}

/// The complete transfer table, forward transfers first.
#[derive(Clone, Debug)]
pub struct Picklist {
    pub records: Vec<TransferRecord>,
}

/// Generate the picklist for a construct table against its primer plate.
pub fn generate(
    table: &ConstructTable,
    plate: &PrimerPlate,
    cfg: &DesignConfig,
) -> Result<Picklist> {
    let by_sequence: HashMap<&str, (&WellAddress, &str)> = plate
        .filled()
        .map(|r| (r.sequence.as_str(), (&r.well, r.name.as_str())))
        .collect();

    let volume = cfg.transfer_volume_nl();
    let mut records = Vec::with_capacity(table.rows.len() * 2);
    for direction in [Direction::Forward, Direction::Reverse] {
        for row in &table.rows {
            let sequence = row.full_sequence(direction);
            let (source_well, sample_name) =
                by_sequence
                    .get(sequence)
                    .ok_or_else(|| Error::JoinMismatch {
                        construct: row.construct.name.clone(),
                        direction,
                    })?;
            records.push(TransferRecord {
                source_plate_barcode: cfg.source_plate_barcode.clone(),
                source_plate_name: cfg.source_plate_name.clone(),
                source_plate_type: cfg.source_plate_type.clone(),
                source_well: **source_well,
                destination_plate_barcode: cfg.destination_plate_barcode.clone(),
                destination_plate_name: cfg.destination_plate_name.clone(),
                destination_well: row.well,
                transfer_volume_nl: volume,
                sample_name: sample_name.to_string(),
            });
        }
    }
    Ok(Picklist { records })
}
