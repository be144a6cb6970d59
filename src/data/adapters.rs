//! Fixed 5' cloning extensions prepended to annealing sequences.
//!
//! These are the ligation-independent cloning (LIC) tails for pMCSG-style
//! expression vectors. They are constants of the workflow, not designed per
//! construct; primer deduplication and naming operate on the full sequence
//! *including* the extension.

/// A named constant extension sequence.
#[derive(Clone, Copy, Debug)]
pub struct ExtensionRecord {
    /// Short stable name (e.g. `"LIC_fwd"`).
    pub name: &'static str,
    /// Uppercase DNA string, written 5'→3'.
    pub sequence: &'static str,
    /// Any helpful notes (vector family, orientation).
    pub notes: &'static str,
}

/// Forward LIC extension. 5'-TACTTCCAATCCAATGCA-3'
pub const LIC_FORWARD: ExtensionRecord = ExtensionRecord {
    name: "LIC_fwd",
    sequence: "TACTTCCAATCCAATGCA",
    notes: "pMCSG-family LIC tail, sense strand; annealing core follows the final A.",
};

/// Reverse LIC extension. 5'-TTATCCACTTCCAATGTTATTA-3'
pub const LIC_REVERSE: ExtensionRecord = ExtensionRecord {
    name: "LIC_rev",
    sequence: "TTATCCACTTCCAATGTTATTA",
    notes: "pMCSG-family LIC tail, antisense strand; carries the stop codon.",
};

/// Convenience: both extensions in direction order.
pub const EXTENSIONS: &[ExtensionRecord] = &[LIC_FORWARD, LIC_REVERSE];
