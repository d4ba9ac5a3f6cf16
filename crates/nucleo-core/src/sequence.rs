use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Header used when the input carries no FASTA header line.
pub const UNNAMED_HEADER: &str = "Unnamed Sequence";

/// Bases that share the two-ring purine structure.
pub const PURINES: [char; 2] = ['A', 'G'];
/// Bases that share the single-ring pyrimidine structure.
pub const PYRIMIDINES: [char; 2] = ['C', 'T'];

static INVALID_BASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^ATCG]").expect("literal pattern compiles"));

/// A named nucleotide sequence, as read from FASTA or raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub header: String,
    pub sequence: String,
}

impl SequenceRecord {
    /// Build a record; the sequence is stripped of whitespace and uppercased.
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: clean_sequence(&sequence.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Validate the sequence body of this record.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        validate_dna_sequence(&self.sequence)
    }
}

/// Byte order mark some editors prepend to text files.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Strip all whitespace (byte order marks included) and uppercase.
pub fn clean_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != BYTE_ORDER_MARK)
        .collect::<String>()
        .to_uppercase()
}

/// Check that `raw`, once cleaned, is a non-empty string over {A, T, C, G}.
///
/// Offending characters are reported once each, in order of first appearance.
pub fn validate_dna_sequence(raw: &str) -> Result<(), AnalysisError> {
    let clean = clean_sequence(raw);
    if clean.is_empty() {
        return Err(AnalysisError::EmptySequence);
    }

    let mut invalid: Vec<char> = Vec::new();
    for m in INVALID_BASE.find_iter(&clean) {
        for c in m.as_str().chars() {
            if !invalid.contains(&c) {
                invalid.push(c);
            }
        }
    }

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::InvalidCharacters(invalid))
    }
}

pub fn is_purine(base: char) -> bool {
    PURINES.contains(&base)
}

pub fn is_pyrimidine(base: char) -> bool {
    PYRIMIDINES.contains(&base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_uppercases() {
        let rec = SequenceRecord::new("test", "atcgATCG");
        assert_eq!(rec.header, "test");
        assert_eq!(rec.sequence, "ATCGATCG");
        assert_eq!(rec.len(), 8);
    }

    #[test]
    fn test_new_record_strips_whitespace() {
        let rec = SequenceRecord::new("spaced", "ATG aaa\nTAA ");
        assert_eq!(rec.sequence, "ATGAAATAA");
        assert_eq!(rec.len(), 9);
    }

    #[test]
    fn test_clean_sequence() {
        assert_eq!(clean_sequence(" at\tcg\nAT \r\n"), "ATCGAT");
        assert_eq!(clean_sequence("   "), "");
        assert_eq!(clean_sequence("\u{feff}acg t"), "ACGT");
    }

    #[test]
    fn test_validate_ok() {
        assert!(validate_dna_sequence("ATCG").is_ok());
        assert!(validate_dna_sequence("atc g\n").is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_dna_sequence(""), Err(AnalysisError::EmptySequence));
        assert_eq!(
            validate_dna_sequence(" \n\t "),
            Err(AnalysisError::EmptySequence)
        );
    }

    #[test]
    fn test_validate_reports_x() {
        assert_eq!(
            validate_dna_sequence("ATGX"),
            Err(AnalysisError::InvalidCharacters(vec!['X']))
        );
    }

    #[test]
    fn test_validate_distinct_in_first_appearance_order() {
        // lowercase n is uppercased before checking
        assert_eq!(
            validate_dna_sequence("AUGnNXU"),
            Err(AnalysisError::InvalidCharacters(vec!['U', 'N', 'X']))
        );
    }

    #[test]
    fn test_purine_pyrimidine() {
        assert!(is_purine('A'));
        assert!(is_purine('G'));
        assert!(!is_purine('C'));
        assert!(is_pyrimidine('T'));
        assert!(!is_pyrimidine('G'));
        assert!(!is_purine('-'));
        assert!(!is_pyrimidine('-'));
    }
}
