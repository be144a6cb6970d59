//! The standard genetic code as an *ordered* table.
//!
//! Order matters twice here:
//! - reverse translation always picks the **first** codon listed for a
//!   residue, so templates are reproducible byte-for-byte across runs;
//! - entries follow the classic T-first codon wheel, which is what fixes
//!   those first choices (L→TTA, V→GTT, A→GCT, S→TCT, G→GGT, D→GAT).
//!
//! The same table answers translation: any listed codon maps back to its
//! amino acid; an unknown triplet reads as `X`.

/// Ordered codon choices for one amino acid.
#[derive(Clone, Copy, Debug)]
pub struct CodonChoices {
    /// One-letter amino acid code (uppercase; `*` for stop).
    pub amino_acid: char,
    /// Synonymous codons, preference order first.
    pub codons: &'static [&'static str],
}

/// Placeholder emitted for residues the table cannot encode.
pub const PLACEHOLDER_CODON: &str = "NNN";

/// Standard genetic code (NCBI table 1), codon-wheel order.
pub const STANDARD_CODONS: &[CodonChoices] = &[
    CodonChoices { amino_acid: 'F', codons: &["TTT", "TTC"] },
    CodonChoices { amino_acid: 'L', codons: &["TTA", "TTG", "CTT", "CTC", "CTA", "CTG"] },
    CodonChoices { amino_acid: 'I', codons: &["ATT", "ATC", "ATA"] },
    CodonChoices { amino_acid: 'M', codons: &["ATG"] },
    CodonChoices { amino_acid: 'V', codons: &["GTT", "GTC", "GTA", "GTG"] },
    CodonChoices { amino_acid: 'S', codons: &["TCT", "TCC", "TCA", "TCG", "AGT", "AGC"] },
    CodonChoices { amino_acid: 'P', codons: &["CCT", "CCC", "CCA", "CCG"] },
    CodonChoices { amino_acid: 'T', codons: &["ACT", "ACC", "ACA", "ACG"] },
    CodonChoices { amino_acid: 'A', codons: &["GCT", "GCC", "GCA", "GCG"] },
    CodonChoices { amino_acid: 'Y', codons: &["TAT", "TAC"] },
    CodonChoices { amino_acid: 'H', codons: &["CAT", "CAC"] },
    CodonChoices { amino_acid: 'Q', codons: &["CAA", "CAG"] },
    CodonChoices { amino_acid: 'N', codons: &["AAT", "AAC"] },
    CodonChoices { amino_acid: 'K', codons: &["AAA", "AAG"] },
    CodonChoices { amino_acid: 'D', codons: &["GAT", "GAC"] },
    CodonChoices { amino_acid: 'E', codons: &["GAA", "GAG"] },
    CodonChoices { amino_acid: 'C', codons: &["TGT", "TGC"] },
    CodonChoices { amino_acid: 'W', codons: &["TGG"] },
    CodonChoices { amino_acid: 'R', codons: &["CGT", "CGC", "CGA", "CGG", "AGA", "AGG"] },
    CodonChoices { amino_acid: 'G', codons: &["GGT", "GGC", "GGA", "GGG"] },
    CodonChoices { amino_acid: '*', codons: &["TAA", "TAG", "TGA"] },
];
