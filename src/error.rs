//! Error kinds for the planning pipeline.
//!
//! Every core error is deterministic given its inputs; only [`Error::Fetch`]
//! wraps a call with transient-failure character (the upstream lookup), and
//! retry policy for that call is out of scope here.

use thiserror::Error;

use crate::primer::Direction;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of the construct→primer→plate→picklist pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The upstream target lookup did not return a usable prediction.
    /// The message names the identifier and the upstream status.
    #[error("Failed to fetch prediction for target {identifier}. The AlphaFoldDB API returned: {status}")]
    Fetch { identifier: String, status: String },

    /// A construct's peptide is not a substring of the translated template.
    /// This indicates a codon-table or reading-frame mismatch, not a
    /// recoverable condition.
    #[error("peptide `{peptide}` is not a substring of the translated template")]
    SequenceNotFound { peptide: String },

    /// No acceptable primer exists within the bounds of the template.
    #[error("Could not design primer")]
    PrimerDesign,

    /// An expected column is absent from an input table.
    #[error("`{column}` not found in input dataframe.")]
    Schema { column: String },

    /// A construct's primer sequence has no source well on the primer plate.
    #[error("{direction} primer of construct `{construct}` has no matching well in the primer plate")]
    JoinMismatch {
        construct: String,
        direction: Direction,
    },

    /// More rows than the destination plate has wells.
    #[error("{have} rows exceed the {capacity}-well capacity of the {plate} plate")]
    PlateCapacity {
        plate: &'static str,
        have: usize,
        capacity: usize,
    },

    /// A construct range violates `1 <= start <= end <= target length`.
    #[error("construct `{name}`: range {start}..{end} is not within 1..{length}")]
    InvalidRange {
        name: String,
        start: usize,
        end: usize,
        length: usize,
    },

    /// The target FASTA file could not be read or held no record.
    #[error("could not read target FASTA: {0}")]
    Fasta(String),

    /// A constructs CSV row held something other than residue numbers.
    #[error("could not parse constructs table: {0}")]
    ConstructsInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
