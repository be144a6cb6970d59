//! Constructs and the per-construct design table.
//!
//! A construct is a named residue range of the target. The table builder
//! slices each construct's peptide, designs both primers against the shared
//! template, attaches the fixed extensions, assigns order names by grouping
//! on full-sequence equality, and maps each construct to a destination well.
//!
//! Residue ranges are 1-indexed on the way in; the internal slice is the
//! half-open `[start-1, end-1)`, so the produced peptide covers residues
//! `start..end-1` inclusive. That convention is load-bearing for every
//! downstream artifact and must not be "corrected" locally.

use std::collections::HashMap;

use crate::config::DesignConfig;
use crate::error::{Error, Result};
use crate::fetch::TargetData;
use crate::plate::WellAddress;
use crate::primer::{design_primer, Direction};

/// A named residue range of the target protein, 1-indexed, `start <= end`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Construct {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

impl Construct {
    /// Validate the range against the target length.
    pub fn new(name: impl Into<String>, start: usize, end: usize, target_len: usize) -> Result<Self> {
        let name = name.into();
        if start < 1 || end < start || end > target_len {
            return Err(Error::InvalidRange {
                name,
                start,
                end,
                length: target_len,
            });
        }
        Ok(Self { name, start, end })
    }

    /// The construct's peptide under the `[start-1, end-1)` slice convention.
    pub fn peptide<'a>(&self, target_sequence: &'a str) -> &'a str {
        &target_sequence[self.start - 1..self.end - 1]
    }
}

/// Enumerate the construct set for a target: the whole-target construct
/// first, then the cross-product of N-terminal × C-terminal boundary
/// choices (outer loop N-term, inner loop C-term, insertion order).
/// Names run `{target_id}_construct_{n}` with `n` starting at 1.
pub fn enumerate_constructs(
    target: &TargetData,
    n_term_boundaries: &[usize],
    c_term_boundaries: &[usize],
) -> Result<Vec<Construct>> {
    let len = target.sequence_length();
    let name = |n: usize| format!("{}_construct_{}", target.identifier, n);
    let mut out = vec![Construct::new(name(1), 1, len, len)?];
    let mut n = 2;
    for &start in n_term_boundaries {
        for &end in c_term_boundaries {
            out.push(Construct::new(name(n), start, end, len)?);
            n += 1;
        }
    }
    Ok(out)
}

/// One fully designed construct row.
#[derive(Clone, Debug)]
pub struct ConstructRow {
    pub construct: Construct,
    pub peptide: String,
    /// Annealing cores, no extension.
    pub forward_anneal: String,
    pub reverse_anneal: String,
    /// Full order sequences: extension + annealing core.
    pub forward_sequence: String,
    pub reverse_sequence: String,
    /// Order names, shared between rows whose full sequences collide.
    pub forward_name: String,
    pub reverse_name: String,
    /// Destination well on the construct plate.
    pub well: WellAddress,
}

impl ConstructRow {
    pub fn full_sequence(&self, direction: Direction) -> &str {
        match direction {
            Direction::Forward => &self.forward_sequence,
            Direction::Reverse => &self.reverse_sequence,
        }
    }

    pub fn primer_name(&self, direction: Direction) -> &str {
        match direction {
            Direction::Forward => &self.forward_name,
            Direction::Reverse => &self.reverse_name,
        }
    }
}

/// The per-construct design table.
#[derive(Clone, Debug)]
pub struct ConstructTable {
    pub rows: Vec<ConstructRow>,
}

impl ConstructTable {
    /// Design primers for every construct and assemble the table.
    ///
    /// The construct count is checked against the construct plate before
    /// any well is assigned.
    pub fn build(
        constructs: &[Construct],
        target: &TargetData,
        cfg: &DesignConfig,
    ) -> Result<Self> {
        let capacity = cfg.construct_plate.capacity();
        if constructs.len() > capacity {
            return Err(Error::PlateCapacity {
                plate: "construct",
                have: constructs.len(),
                capacity,
            });
        }

        let template = target.dna_template();
        let wells = cfg.construct_plate.wells();
        let mut rows = Vec::with_capacity(constructs.len());
        for (i, construct) in constructs.iter().enumerate() {
            let peptide = construct.peptide(&target.sequence).to_string();
            let forward_anneal = design_primer(&peptide, &template, Direction::Forward, cfg)?;
            let reverse_anneal = design_primer(&peptide, &template, Direction::Reverse, cfg)?;
            rows.push(ConstructRow {
                construct: construct.clone(),
                peptide,
                forward_sequence: format!("{}{}", cfg.forward_extension, forward_anneal),
                reverse_sequence: format!("{}{}", cfg.reverse_extension, reverse_anneal),
                forward_anneal,
                reverse_anneal,
                forward_name: String::new(),
                reverse_name: String::new(),
                well: wells[i],
            });
        }

        assign_names(&mut rows, Direction::Forward);
        assign_names(&mut rows, Direction::Reverse);
        Ok(Self { rows })
    }
}

/// Group rows by exact full-sequence equality and hand each group a
/// sequential `{direction}_primer_{NNN}` name in order of first appearance.
fn assign_names(rows: &mut [ConstructRow], direction: Direction) {
    let mut by_sequence: HashMap<String, String> = HashMap::new();
    let mut next = 1usize;
    for row in rows.iter_mut() {
        let sequence = row.full_sequence(direction).to_string();
        let name = by_sequence
            .entry(sequence)
            .or_insert_with(|| {
                let name = format!("{}_primer_{:03}", direction, next);
                next += 1;
                name
            })
            .clone();
        match direction {
            Direction::Forward => row.forward_name = name,
            Direction::Reverse => row.reverse_name = name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::adapters;
    use crate::fetch::TargetData;

    fn target() -> TargetData {
        TargetData {
            identifier: "TEST1".to_string(),
            sequence: format!("{}{}{}", "L".repeat(14), "VASGDADMKGHFDPAKCRYALGMQD", "E"),
            structure_url: String::new(),
        }
    }

    #[test]
    fn slice_convention_drops_the_end_residue() {
        let t = target();
        let c = Construct::new("TEST1_construct_2", 10, 40, t.sequence_length()).unwrap();
        assert_eq!(c.peptide(&t.sequence), "LLLLLVASGDADMKGHFDPAKCRYALGMQD");
    }

    #[test]
    fn range_validation() {
        assert!(Construct::new("c", 0, 5, 40).is_err());
        assert!(Construct::new("c", 10, 9, 40).is_err());
        assert!(Construct::new("c", 10, 41, 40).is_err());
        assert!(Construct::new("c", 1, 40, 40).is_ok());
    }

    #[test]
    fn enumeration_order_and_names() {
        let t = target();
        let cs = enumerate_constructs(&t, &[10, 12], &[40, 38]).unwrap();
        assert_eq!(cs.len(), 5);
        assert_eq!(cs[0].name, "TEST1_construct_1");
        assert_eq!((cs[0].start, cs[0].end), (1, 40));
        // outer loop over N-term boundaries, inner over C-term
        assert_eq!((cs[1].start, cs[1].end), (10, 40));
        assert_eq!((cs[2].start, cs[2].end), (10, 38));
        assert_eq!((cs[3].start, cs[3].end), (12, 40));
        assert_eq!((cs[4].start, cs[4].end), (12, 38));
        assert_eq!(cs[4].name, "TEST1_construct_5");
    }

    #[test]
    fn build_designs_names_and_wells() {
        let t = target();
        let cfg = DesignConfig::default();
        let cs = vec![
            Construct::new("TEST1_construct_1", 10, 40, 40).unwrap(),
            Construct::new("TEST1_construct_2", 10, 38, 40).unwrap(),
        ];
        let table = ConstructTable::build(&cs, &t, &cfg).unwrap();
        assert_eq!(table.rows.len(), 2);
        let first = &table.rows[0];
        assert_eq!(first.forward_anneal, "TTATTATTATTATTAGTTGCTTCTGGTGATGCTG");
        assert_eq!(
            first.forward_sequence,
            format!("{}{}", adapters::LIC_FORWARD.sequence, first.forward_anneal)
        );
        assert_eq!(first.forward_name, "forward_primer_001");
        assert_eq!(first.reverse_name, "reverse_primer_001");
        assert_eq!(first.well.to_string(), "A01");
        assert_eq!(table.rows[1].well.to_string(), "A02");
    }

    #[test]
    fn identical_primers_share_a_name() {
        let t = target();
        let cfg = DesignConfig::default();
        // same N-terminal boundary, different C-terminal boundaries: the
        // forward anneal is identical, the reverse differs
        let cs = vec![
            Construct::new("a", 10, 40, 40).unwrap(),
            Construct::new("b", 10, 38, 40).unwrap(),
        ];
        let table = ConstructTable::build(&cs, &t, &cfg).unwrap();
        assert_eq!(table.rows[0].forward_sequence, table.rows[1].forward_sequence);
        assert_eq!(table.rows[0].forward_name, table.rows[1].forward_name);
        assert_ne!(table.rows[0].reverse_sequence, table.rows[1].reverse_sequence);
        assert_eq!(table.rows[0].reverse_name, "reverse_primer_001");
        assert_eq!(table.rows[1].reverse_name, "reverse_primer_002");
    }

    #[test]
    fn more_constructs_than_wells_is_signalled() {
        let t = TargetData {
            identifier: "BIG".to_string(),
            sequence: "MKGHFDPAKCRYALGMQDWE".repeat(20),
            structure_url: String::new(),
        };
        let len = t.sequence_length();
        let cfg = DesignConfig::default();
        let cs: Vec<Construct> = (0..97)
            .map(|i| Construct::new(format!("c{i}"), 1, len, len).unwrap())
            .collect();
        let err = ConstructTable::build(&cs, &t, &cfg).unwrap_err();
        assert!(matches!(
            err,
            Error::PlateCapacity { plate: "construct", have: 97, capacity: 96 }
        ));
    }
}
