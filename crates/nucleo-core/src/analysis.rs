//! End-to-end workflows over parsed records: everything a single-sequence
//! view or a two-sequence comparison needs, computed in one call.

use serde::{Deserialize, Serialize};

use crate::alignment::{align_sequences, AlignmentResult};
use crate::codon::{get_codons, translate, Codon, ReadingFrame};
use crate::error::AnalysisError;
use crate::operations::reverse_complement;
use crate::orf::{find_orfs, Orf, DEFAULT_MIN_ORF_LENGTH};
use crate::sequence::{clean_sequence, SequenceRecord};
use crate::stats::{calculate_stats, SequenceStats};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceReport {
    pub header: String,
    pub sequence: String,
    pub stats: SequenceStats,
    pub reverse_complement: String,
    /// 1-based frame used for `codons` and `protein`.
    pub frame: u8,
    pub codons: Vec<Codon>,
    pub protein: String,
    pub orfs: Vec<Orf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub header1: String,
    pub header2: String,
    pub alignment: AlignmentResult,
    pub orfs1: Vec<Orf>,
    pub orfs2: Vec<Orf>,
    pub protein1: String,
    pub protein2: String,
}

/// Validate a record and run every single-sequence analysis on it.
pub fn analyze_sequence(
    record: &SequenceRecord,
    frame: ReadingFrame,
    min_orf_length: usize,
) -> Result<SequenceReport, AnalysisError> {
    record.validate()?;
    let cleaned = clean_sequence(&record.sequence);
    let seq = cleaned.as_str();

    Ok(SequenceReport {
        header: record.header.clone(),
        sequence: seq.to_string(),
        stats: calculate_stats(seq),
        reverse_complement: reverse_complement(seq),
        frame: frame.number(),
        codons: get_codons(seq, frame),
        protein: translate(seq, frame),
        orfs: find_orfs(seq, min_orf_length),
    })
}

/// Validate two records, align them and summarize each one's ORFs and
/// first-frame translation.
pub fn compare_sequences(
    first: &SequenceRecord,
    second: &SequenceRecord,
) -> Result<ComparisonReport, AnalysisError> {
    for (index, record) in [(1, first), (2, second)] {
        record.validate().map_err(|e| AnalysisError::InSequence {
            index,
            source: Box::new(e),
        })?;
    }

    let seq1 = clean_sequence(&first.sequence);
    let seq2 = clean_sequence(&second.sequence);

    Ok(ComparisonReport {
        header1: first.header.clone(),
        header2: second.header.clone(),
        alignment: align_sequences(&seq1, &seq2),
        orfs1: find_orfs(&seq1, DEFAULT_MIN_ORF_LENGTH),
        orfs2: find_orfs(&seq2, DEFAULT_MIN_ORF_LENGTH),
        protein1: translate(&seq1, ReadingFrame::First),
        protein2: translate(&seq2, ReadingFrame::First),
    })
}
