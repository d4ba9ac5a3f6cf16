//! Open reading frame detection over both strands and all three frames.
//!
//! Each (strand, frame) pair is scanned independently by a two-state machine:
//! searching for `ATG`, then accumulating residues until a stop codon closes
//! the candidate. A start codon seen while already inside an ORF does not
//! restart it, so nested ORFs in the same frame are never reported.

use serde::{Deserialize, Serialize};

use crate::codon::{get_codons, ReadingFrame};
use crate::operations::reverse_complement;

/// Minimum ORF length in nucleotides used when the caller has no preference.
pub const DEFAULT_MIN_ORF_LENGTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// Open reading frame result
///
/// `start` and `end` are inclusive offsets into the scanned strand: the input
/// itself for `+`, its reverse complement for `-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orf {
    /// Discovery index, 1-based, assigned before sorting.
    pub id: usize,
    pub start: usize,
    pub end: usize,
    /// Length in nucleotides, stop codon included.
    pub length: usize,
    /// Reading frame, 1 to 3.
    pub frame: u8,
    pub strand: Strand,
    pub sequence: String,
    /// Translated residues without the terminating `*`.
    pub protein_sequence: String,
}

impl Orf {
    /// Whether the ORF closes on a stop codon rather than running off the end.
    pub fn is_terminated(&self) -> bool {
        self.length >= 6
            && self.length % 3 == 0
            && matches!(
                self.sequence.get(self.length - 3..),
                Some("TAA" | "TAG" | "TGA")
            )
    }
}

enum ScanState {
    Searching,
    InOrf { start: usize, protein: String },
}

struct OrfCollector {
    min_length: usize,
    next_id: usize,
    orfs: Vec<Orf>,
}

impl OrfCollector {
    fn new(min_length: usize) -> Self {
        Self {
            min_length,
            next_id: 1,
            orfs: Vec::new(),
        }
    }

    fn offer(
        &mut self,
        bases: &str,
        strand: Strand,
        frame: ReadingFrame,
        start: usize,
        end: usize,
        protein: String,
    ) {
        let length = end + 1 - start;
        if length < self.min_length {
            return;
        }
        self.orfs.push(Orf {
            id: self.next_id,
            start,
            end,
            length,
            frame: frame.number(),
            strand,
            sequence: bases[start..=end].to_string(),
            protein_sequence: protein,
        });
        self.next_id += 1;
    }

    fn scan(&mut self, bases: &str, strand: Strand, frame: ReadingFrame) {
        let before = self.orfs.len();
        let mut state = ScanState::Searching;

        for codon in get_codons(bases, frame) {
            state = match state {
                ScanState::Searching if codon.is_start => ScanState::InOrf {
                    start: codon.position,
                    protein: codon.amino_acid.to_string(),
                },
                ScanState::Searching => ScanState::Searching,
                ScanState::InOrf { start, protein } if codon.is_stop => {
                    self.offer(bases, strand, frame, start, codon.position + 2, protein);
                    ScanState::Searching
                }
                ScanState::InOrf { start, mut protein } => {
                    protein.push(codon.amino_acid);
                    ScanState::InOrf { start, protein }
                }
            };
        }

        // No stop codon before the end of the strand
        if let ScanState::InOrf { start, protein } = state {
            self.offer(bases, strand, frame, start, bases.len() - 1, protein);
        }

        log::debug!(
            "strand {} frame {}: {} ORF(s)",
            strand,
            frame,
            self.orfs.len() - before
        );
    }
}

/// Find ORFs of at least `min_length` nucleotides on both strands.
///
/// Results are ordered by length, longest first; equal lengths keep discovery
/// order (`+` before `-`, frames 1, 2, 3).
pub fn find_orfs(seq: &str, min_length: usize) -> Vec<Orf> {
    let forward = seq.to_ascii_uppercase();
    let reverse = reverse_complement(&forward);

    let mut collector = OrfCollector::new(min_length);
    for (strand, bases) in [(Strand::Forward, &forward), (Strand::Reverse, &reverse)] {
        for frame in ReadingFrame::ALL {
            collector.scan(bases, strand, frame);
        }
    }

    let mut orfs = collector.orfs;
    orfs.sort_by(|a, b| b.length.cmp(&a.length));
    orfs
}
