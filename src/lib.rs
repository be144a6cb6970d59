#![forbid(unsafe_code)]
//! # cutlet
//!
//! Plans laboratory DNA synthesis orders for expressing **protein fragments**
//! ("constructs") of a target protein, and generates the liquid-handling
//! instructions to assemble the PCR reactions from the ordered primers.
//!
//! ## Pipeline
//! 1. reverse-translate the target into a representative DNA template;
//! 2. design a forward and reverse primer per construct (melting-temperature
//!    target + G/C 3' clamp, shortest acceptable window wins);
//! 3. name and deduplicate primers by full sequence, assign plate wells;
//! 4. emit the primer order form (384-well source plate) and the transfer
//!    picklist (source well → reaction well, fixed volume).
//!
//! ## Highlights
//! - ❗ **No feature flags**: all capabilities are always enabled.
//! - 🧭 **Deterministic planning**: constant codon and thermodynamic tables,
//!   sequential naming, reproducible well assignment.
//! - 📋 **Contract-stable artifacts**: order-form and picklist column sets
//!   match the receiving ordering system and dispenser byte for byte.
//!
//! ## Examples
//! ```rust
//! use cutlet::config::DesignConfig;
//! use cutlet::construct::{enumerate_constructs, Construct};
//! use cutlet::fetch::TargetData;
//!
//! let target = TargetData {
//!     identifier: "DEMO1".to_string(),
//!     sequence: format!("{}{}{}", "L".repeat(14), "VASGDADMKGHFDPAKCRYALGMQD", "E"),
//!     structure_url: String::new(),
//! };
//! let cfg = DesignConfig::default();
//! let constructs = enumerate_constructs(&target, &[10], &[40]).unwrap();
//! let plan = cutlet::plan_synthesis(&target, &constructs, &cfg).unwrap();
//! // one whole-target construct plus the 10..40 fragment, two transfers each
//! assert_eq!(plan.picklist.records.len(), 4);
//! assert_eq!(plan.construct_table.rows[0].well.to_string(), "A01");
//! ```
//!
//! ## Version
//! This build is "0.1.0".

pub mod assemble;
pub mod codec;
pub mod config;
pub mod construct;
pub mod error;
pub mod export;
pub mod fetch;
pub mod picklist;
pub mod plate;
pub mod primer;
pub mod thermo;
pub mod data {
    pub mod adapters;
    pub mod codons;
}

pub use error::{Error, Result};

use assemble::PrimerPlate;
use config::DesignConfig;
use construct::{Construct, ConstructTable};
use fetch::TargetData;
use picklist::Picklist;

/// Everything a planning run produces, in dependency order.
#[derive(Clone, Debug)]
pub struct SynthesisPlan {
    pub construct_table: ConstructTable,
    pub primer_plate: PrimerPlate,
    pub picklist: Picklist,
}

/// Run the whole pipeline for one target: design, deduplicate, lay out,
/// and cross-reference. Each stage fully consumes its predecessor; there is
/// no partial-result consumption to reason about.
pub fn plan_synthesis(
    target: &TargetData,
    constructs: &[Construct],
    cfg: &DesignConfig,
) -> Result<SynthesisPlan> {
    let construct_table = ConstructTable::build(constructs, target, cfg)?;
    let primer_plate = assemble::assemble(&construct_table, cfg)?;
    let picklist = picklist::generate(&construct_table, &primer_plate, cfg)?;
    Ok(SynthesisPlan {
        construct_table,
        primer_plate,
        picklist,
    })
}

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use crate::construct::enumerate_constructs;

    fn demo_target() -> TargetData {
        TargetData {
            identifier: "DEMO1".to_string(),
            sequence: format!("{}{}{}", "L".repeat(14), "VASGDADMKGHFDPAKCRYALGMQD", "E"),
            structure_url: String::new(),
        }
    }

    #[test]
    fn end_to_end_reference_scenario() {
        let target = demo_target();
        let cfg = DesignConfig::default();
        let constructs = enumerate_constructs(&target, &[10], &[40]).unwrap();
        let plan = plan_synthesis(&target, &constructs, &cfg).unwrap();

        // construct 2 is the (10, 40) fragment from the reference scenario
        let row = &plan.construct_table.rows[1];
        assert_eq!(row.peptide, "LLLLLVASGDADMKGHFDPAKCRYALGMQD");
        assert_eq!(row.forward_anneal, "TTATTATTATTATTAGTTGCTTCTGGTGATGCTG");
        assert_eq!(
            row.forward_sequence,
            format!("{}{}", cfg.forward_extension, row.forward_anneal)
        );

        // every accepted primer clears the target and ends on G or C
        for r in &plan.construct_table.rows {
            for anneal in [&r.forward_anneal, &r.reverse_anneal] {
                assert!(thermo::melting_temperature(anneal) > cfg.tm_target_c);
                assert!(anneal.ends_with('G') || anneal.ends_with('C'));
            }
        }

        // transfers resolve against the plate with the fixed volume
        assert_eq!(plan.picklist.records.len(), 4);
        for rec in &plan.picklist.records {
            assert_eq!(rec.transfer_volume_nl, 125.0);
        }
    }

    #[test]
    fn plan_is_deterministic() {
        let target = demo_target();
        let cfg = DesignConfig::default();
        let constructs = enumerate_constructs(&target, &[10, 12], &[38, 40]).unwrap();
        let a = plan_synthesis(&target, &constructs, &cfg).unwrap();
        let b = plan_synthesis(&target, &constructs, &cfg).unwrap();
        let names = |p: &SynthesisPlan| -> Vec<String> {
            p.construct_table
                .rows
                .iter()
                .map(|r| format!("{}:{}:{}", r.construct.name, r.forward_name, r.reverse_name))
                .collect()
        };
        assert_eq!(names(&a), names(&b));
    }
}
