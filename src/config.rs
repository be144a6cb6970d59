//! The fixed constants of a planning run, gathered into one immutable value.
//!
//! Every component takes a [`DesignConfig`] reference at its call boundary;
//! there is no mutable module state anywhere in the pipeline.

use crate::data::adapters;
use crate::plate::{PlateFormat, PLATE_384, PLATE_96};

/// Configuration shared across the whole pipeline.
///
/// The defaults reproduce the standard workflow: 60 °C melting-temperature
/// target, 20 nt minimum primer, LIC cloning extensions, 96-well construct
/// plate, 384-well primer source plate, and a 25 µL PCR primed at 0.5 µM
/// from 100 µM stocks.
#[derive(Clone, Debug)]
pub struct DesignConfig {
    /// The rounded melting temperature a primer must exceed (°C).
    pub tm_target_c: f64,
    /// Shortest annealing window considered (nt).
    pub min_primer_len: usize,
    /// 5' extension prepended to every forward annealing sequence.
    pub forward_extension: String,
    /// 5' extension prepended to every reverse annealing sequence.
    pub reverse_extension: String,
    /// Destination layout for constructs.
    pub construct_plate: PlateFormat,
    /// Source layout for ordered primers.
    pub primer_plate: PlateFormat,
    /// PCR reaction volume (µL).
    pub reaction_volume_ul: f64,
    /// Primer concentration required in the reaction (µM).
    pub required_primer_um: f64,
    /// Concentration primers are ordered/stocked at (µM).
    pub stock_primer_um: f64,
    pub source_plate_name: String,
    pub source_plate_barcode: String,
    pub source_plate_type: String,
    pub destination_plate_name: String,
    pub destination_plate_barcode: String,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            tm_target_c: 60.0,
            min_primer_len: 20,
            forward_extension: adapters::LIC_FORWARD.sequence.to_string(),
            reverse_extension: adapters::LIC_REVERSE.sequence.to_string(),
            construct_plate: PLATE_96,
            primer_plate: PLATE_384,
            reaction_volume_ul: 25.0,
            required_primer_um: 0.5,
            stock_primer_um: 100.0,
            source_plate_name: "primer_source_plate".to_string(),
            source_plate_barcode: "PRIMER_SRC_001".to_string(),
            source_plate_type: "384PP_AQ_BP".to_string(),
            destination_plate_name: "pcr_destination_plate".to_string(),
            destination_plate_barcode: "PCR_DEST_001".to_string(),
        }
    }
}

impl DesignConfig {
    /// Volume of primer stock moved into each reaction, in nanoliters:
    /// `required / stock * reaction volume`, scaled from µL.
    pub fn transfer_volume_nl(&self) -> f64 {
        self.required_primer_um / self.stock_primer_um * self.reaction_volume_ul * 1000.0
    }
}
