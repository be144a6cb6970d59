//! Primer search: minimal-length annealing windows against a template.
//!
//! The search anchors at a construct boundary in nucleotide space and grows
//! one base at a time from the minimum length until the candidate both
//! clears the melting-temperature target and ends on G or C (the 3' clamp
//! heuristic against mispriming). The first accepted length wins; the loop
//! is bounded by the template, so it always terminates.

use core::fmt;

use crate::codec;
use crate::config::DesignConfig;
use crate::error::{Error, Result};
use crate::thermo;

/// Which strand a primer anneals to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn reverse_complement(window: &[u8]) -> String {
    String::from_utf8(bio::alphabets::dna::revcomp(window)).unwrap_or_default()
}

fn ends_on_gc(candidate: &str) -> bool {
    matches!(candidate.as_bytes().last(), Some(b'G') | Some(b'C'))
}

/// Design one annealing sequence for `peptide` against `template`.
///
/// The peptide must occur literally in the translated template (reading
/// frame 0); its first occurrence fixes the anchor. Forward windows grow
/// rightward from the anchor, reverse windows grow leftward and are
/// returned reverse-complemented, so the string reads 5'→3' on its own
/// strand in both cases. No extension is attached here; that is the
/// caller's concern.
///
/// # Errors
/// [`Error::SequenceNotFound`] when the peptide is absent from the
/// translated template; [`Error::PrimerDesign`] when no window within the
/// template bounds is acceptable.
pub fn design_primer(
    peptide: &str,
    template: &str,
    direction: Direction,
    cfg: &DesignConfig,
) -> Result<String> {
    let template = template.to_ascii_uppercase();
    let translated = codec::translate(&template);
    let residue = translated
        .find(peptide)
        .ok_or_else(|| Error::SequenceNotFound {
            peptide: peptide.to_string(),
        })?;
    let anchor = match direction {
        Direction::Forward => residue * 3,
        Direction::Reverse => (residue + peptide.len()) * 3,
    };

    let bytes = template.as_bytes();
    let mut n = cfg.min_primer_len;
    loop {
        let candidate = match direction {
            Direction::Forward => {
                if anchor + n > bytes.len() {
                    return Err(Error::PrimerDesign);
                }
                template[anchor..anchor + n].to_string()
            }
            Direction::Reverse => {
                if n > anchor {
                    return Err(Error::PrimerDesign);
                }
                reverse_complement(&bytes[anchor - n..anchor])
            }
        };
        if thermo::melting_temperature(&candidate) > cfg.tm_target_c && ends_on_gc(&candidate) {
            return Ok(candidate);
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::reverse_translate;

    fn target() -> String {
        format!("{}{}{}", "L".repeat(14), "VASGDADMKGHFDPAKCRYALGMQD", "E")
    }

    #[test]
    fn forward_matches_reference_vector() {
        let template = reverse_translate(&target());
        let peptide = "LLLLLVASGDADMKGHFDPAKCRYALGMQD";
        let cfg = DesignConfig::default();
        let primer = design_primer(peptide, &template, Direction::Forward, &cfg).unwrap();
        assert_eq!(primer, "TTATTATTATTATTAGTTGCTTCTGGTGATGCTG");
        assert_eq!(primer.len(), 34);
    }

    #[test]
    fn reverse_matches_reference_vector() {
        let template = reverse_translate(&target());
        let peptide = "LLLLLVASGDADMKGHFDPAKCRYALGMQD";
        let cfg = DesignConfig::default();
        let primer = design_primer(peptide, &template, Direction::Reverse, &cfg).unwrap();
        assert_eq!(primer, "ATCTTGCATACCTAAAGCATAACGACATTTAG");
        assert_eq!(primer.len(), 32);
    }

    #[test]
    fn accepted_primer_clears_tm_and_ends_on_gc() {
        let template = reverse_translate(&target());
        let cfg = DesignConfig::default();
        for direction in [Direction::Forward, Direction::Reverse] {
            let p = design_primer("MKGHFDPAKC", &template, direction, &cfg).unwrap();
            assert!(thermo::melting_temperature(&p) > cfg.tm_target_c);
            assert!(ends_on_gc(&p));
        }
    }

    #[test]
    fn accepted_length_is_minimal() {
        let template = reverse_translate(&target());
        let peptide = "LLLLLVASGDADMKGHFDPAKCRYALGMQD";
        let cfg = DesignConfig::default();
        let primer = design_primer(peptide, &template, Direction::Forward, &cfg).unwrap();
        // no shorter window from the same anchor is acceptable
        let anchor = 9 * 3;
        for n in cfg.min_primer_len..primer.len() {
            let shorter = &template[anchor..anchor + n];
            let ok = thermo::melting_temperature(shorter) > cfg.tm_target_c && ends_on_gc(shorter);
            assert!(!ok, "window of {n} nt should have been rejected");
        }
    }

    #[test]
    fn tm_pass_with_at_end_is_rejected() {
        // the 27 nt reverse window clears the Tm target but ends on A, so
        // the search must keep growing past it
        let template = reverse_translate(&target());
        let cfg = DesignConfig::default();
        let primer = design_primer(
            "LLLLLVASGDADMKGHFDPAKCRYALGMQD",
            &template,
            Direction::Reverse,
            &cfg,
        )
        .unwrap();
        assert!(primer.len() > 27);
        let anchor = (9 + 30) * 3;
        let rejected = reverse_complement(&template.as_bytes()[anchor - 27..anchor]);
        assert!(thermo::melting_temperature(&rejected) > cfg.tm_target_c);
        assert!(!ends_on_gc(&rejected));
    }

    #[test]
    fn absent_peptide_is_an_error() {
        let template = reverse_translate(&target());
        let cfg = DesignConfig::default();
        let err = design_primer("WWWWW", &template, Direction::Forward, &cfg).unwrap_err();
        assert!(matches!(err, Error::SequenceNotFound { .. }));
    }

    #[test]
    fn exhausted_template_is_a_design_error() {
        // an AT-only template can never end a window on G or C
        let template = reverse_translate(&"K".repeat(30));
        let cfg = DesignConfig::default();
        let err = design_primer("KKKKKKKK", &template, Direction::Forward, &cfg).unwrap_err();
        assert!(matches!(err, Error::PrimerDesign));
        assert_eq!(err.to_string(), "Could not design primer");
    }
}
