//! Target retrieval: the AlphaFoldDB prediction lookup and a local FASTA
//! fallback.
//!
//! The network call is one blocking GET with no retry; everything after the
//! HTTP status is a pure decode, so tests exercise [`parse_prediction`] on
//! canned JSON without touching the network.

use serde::Deserialize;

use crate::codec;
use crate::error::{Error, Result};

/// Base URL for the AlphaFoldDB prediction API.
pub const ALPHAFOLD_BASE_URL: &str = "https://alphafold.ebi.ac.uk/api/prediction";

/// An immutable description of the target protein.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetData {
    /// The accession the target was looked up by (e.g. a UniProt id).
    pub identifier: String,
    /// Full protein sequence, residues 1-indexed in all user-facing ranges.
    pub sequence: String,
    /// Where the predicted structure lives; empty for local FASTA targets.
    pub structure_url: String,
}

impl TargetData {
    pub fn sequence_length(&self) -> usize {
        self.sequence.len()
    }

    /// Representative DNA template for primer-boundary lookup, recomputed
    /// on demand from the sequence.
    pub fn dna_template(&self) -> String {
        codec::reverse_translate(&self.sequence)
    }
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(rename = "uniprotSequence")]
    uniprot_sequence: String,
    #[serde(rename = "pdbUrl")]
    pdb_url: String,
}

/// Decode an AlphaFoldDB prediction response body into [`TargetData`].
///
/// The API returns an array of predictions; the first one is used.
pub fn parse_prediction(identifier: &str, body: &str) -> Result<TargetData> {
    let predictions: Vec<Prediction> =
        serde_json::from_str(body).map_err(|e| Error::Fetch {
            identifier: identifier.to_string(),
            status: format!("an undecodable body ({e})"),
        })?;
    let first = predictions.into_iter().next().ok_or_else(|| Error::Fetch {
        identifier: identifier.to_string(),
        status: "an empty prediction list".to_string(),
    })?;
    Ok(TargetData {
        identifier: identifier.to_string(),
        sequence: first.uniprot_sequence,
        structure_url: first.pdb_url,
    })
}

/// Fetch target data from AlphaFoldDB for the given identifier.
///
/// Synchronous; fails with [`Error::Fetch`] carrying the upstream status on
/// any non-success response. Retry policy is the caller's concern.
pub fn fetch_target_data(identifier: &str) -> Result<TargetData> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(format!("{ALPHAFOLD_BASE_URL}/{identifier}"))
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .map_err(|e| Error::Fetch {
            identifier: identifier.to_string(),
            status: e.to_string(),
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Fetch {
            identifier: identifier.to_string(),
            status: format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
        });
    }
    let body = response.text().map_err(|e| Error::Fetch {
        identifier: identifier.to_string(),
        status: format!("an unreadable body ({e})"),
    })?;
    parse_prediction(identifier, &body)
}

/// Read the first record of a protein FASTA file as the target.
pub fn target_from_fasta(path: &std::path::Path) -> Result<TargetData> {
    let mut reader =
        needletail::parse_fastx_file(path).map_err(|e| Error::Fasta(e.to_string()))?;
    let record = reader
        .next()
        .ok_or_else(|| Error::Fasta(format!("{}: no records", path.display())))?
        .map_err(|e| Error::Fasta(e.to_string()))?;
    let identifier = String::from_utf8_lossy(record.id())
        .split_whitespace()
        .next()
        .unwrap_or("target")
        .to_string();
    let sequence = String::from_utf8_lossy(&record.seq()).to_uppercase();
    Ok(TargetData {
        identifier,
        sequence,
        structure_url: String::new(),
    })
}
