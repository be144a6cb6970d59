//! Protein↔DNA conversion over the shared codon table.
//!
//! `reverse_translate` produces a *representative* template, not an
//! expression-optimized one: it exists so primer boundaries can be located
//! in nucleotide space, and downstream code relies only on the codon length
//! of 3, never on which synonymous codon was picked.

use crate::data::codons::{CodonChoices, PLACEHOLDER_CODON, STANDARD_CODONS};

fn choices_for(amino_acid: char) -> Option<&'static CodonChoices> {
    let aa = amino_acid.to_ascii_uppercase();
    STANDARD_CODONS.iter().find(|c| c.amino_acid == aa)
}

/// Reverse-translate a protein sequence into a representative DNA sequence.
///
/// Each residue maps to the first codon listed for it in the table;
/// residues the table cannot encode map to `NNN`. The output length is
/// always `3 * residues`.
///
/// # Examples
/// ```
/// use cutlet::codec::reverse_translate;
/// assert_eq!(reverse_translate("LVD"), "TTAGTTGAT");
/// assert_eq!(reverse_translate("LZ"), "TTANNN");
/// ```
pub fn reverse_translate(protein: &str) -> String {
    let mut dna = String::with_capacity(protein.len() * 3);
    for aa in protein.chars() {
        match choices_for(aa) {
            Some(c) => dna.push_str(c.codons[0]),
            None => dna.push_str(PLACEHOLDER_CODON),
        }
    }
    dna
}

/// Translate a DNA sequence to protein, frame 0.
///
/// Unknown triplets (including any with non-ACGT bases) read as `X`; a
/// trailing partial codon is ignored.
pub fn translate(dna: &str) -> String {
    let upper = dna.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    let mut protein = String::with_capacity(bytes.len() / 3);
    for chunk in bytes.chunks(3) {
        if chunk.len() < 3 {
            break;
        }
        let codon = std::str::from_utf8(chunk).unwrap_or("");
        let aa = STANDARD_CODONS
            .iter()
            .find(|c| c.codons.contains(&codon))
            .map(|c| c.amino_acid)
            .unwrap_or('X');
        protein.push(aa);
    }
    protein
}
