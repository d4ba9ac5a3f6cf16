use serde::{Deserialize, Serialize};

use crate::mutation::{classify_mutations, Mutation, GAP};

/// Scoring parameters for Needleman-Wunsch alignment with a linear gap penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringParams {
    /// Score awarded for a matching base pair.
    pub match_score: i32,
    /// Penalty for a mismatching base pair (should be negative).
    pub mismatch_score: i32,
    /// Penalty per gap position (should be negative).
    pub gap: i32,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            match_score: 2,
            mismatch_score: -1,
            gap: -2,
        }
    }
}

impl ScoringParams {
    fn substitution(&self, a: char, b: char) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

/// Two gapped sequences of equal length and the score of the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalAlignment {
    pub aligned_seq1: String,
    pub aligned_seq2: String,
    pub score: i32,
}

/// Global alignment of two sequences with its mutation breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentResult {
    pub aligned_seq1: String,
    pub aligned_seq2: String,
    pub score: i32,
    pub mutations: Vec<Mutation>,
    pub total_mutations: usize,
    /// Mutations per aligned column, as a percentage.
    pub mutation_rate: f64,
    pub transitions: usize,
    pub transversions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl AlignmentResult {
    /// Number of aligned columns, gaps included.
    pub fn alignment_length(&self) -> usize {
        self.aligned_seq1.chars().count()
    }

    /// Percent identity: fraction of aligned columns that are matches.
    pub fn percent_identity(&self) -> f64 {
        let length = self.alignment_length();
        if length == 0 {
            return 0.0;
        }
        let matches = self
            .aligned_seq1
            .chars()
            .zip(self.aligned_seq2.chars())
            .filter(|(a, b)| a == b && *a != GAP)
            .count();
        matches as f64 / length as f64 * 100.0
    }
}

/// Dynamic-programming score matrix stored as one flat row-major buffer.
struct ScoreMatrix {
    cols: usize,
    cells: Vec<i32>,
}

impl ScoreMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![0; rows * cols],
        }
    }

    fn get(&self, i: usize, j: usize) -> i32 {
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: i32) {
        self.cells[i * self.cols + j] = value;
    }
}

/// Needleman-Wunsch global alignment.
///
/// Traceback runs from the bottom-right corner and prefers, at every cell, a
/// diagonal step, then an up step (gap in `seq2`), then a left step (gap in
/// `seq1`). That order decides between co-optimal alignments.
pub fn needleman_wunsch(seq1: &str, seq2: &str, params: &ScoringParams) -> GlobalAlignment {
    let s1: Vec<char> = seq1.to_ascii_uppercase().chars().collect();
    let s2: Vec<char> = seq2.to_ascii_uppercase().chars().collect();
    let m = s1.len();
    let n = s2.len();

    let mut score = ScoreMatrix::new(m + 1, n + 1);
    for i in 0..=m {
        score.set(i, 0, i as i32 * params.gap);
    }
    for j in 0..=n {
        score.set(0, j, j as i32 * params.gap);
    }

    for i in 1..=m {
        for j in 1..=n {
            let diag = score.get(i - 1, j - 1) + params.substitution(s1[i - 1], s2[j - 1]);
            let up = score.get(i - 1, j) + params.gap;
            let left = score.get(i, j - 1) + params.gap;
            score.set(i, j, diag.max(up).max(left));
        }
    }

    let mut aligned1 = Vec::with_capacity(m + n);
    let mut aligned2 = Vec::with_capacity(m + n);
    let (mut i, mut j) = (m, n);

    while i > 0 || j > 0 {
        let current = score.get(i, j);
        if i > 0
            && j > 0
            && current == score.get(i - 1, j - 1) + params.substitution(s1[i - 1], s2[j - 1])
        {
            aligned1.push(s1[i - 1]);
            aligned2.push(s2[j - 1]);
            i -= 1;
            j -= 1;
        } else if i > 0 && current == score.get(i - 1, j) + params.gap {
            aligned1.push(s1[i - 1]);
            aligned2.push(GAP);
            i -= 1;
        } else {
            aligned1.push(GAP);
            aligned2.push(s2[j - 1]);
            j -= 1;
        }
    }

    let result = GlobalAlignment {
        aligned_seq1: aligned1.into_iter().rev().collect(),
        aligned_seq2: aligned2.into_iter().rev().collect(),
        score: score.get(m, n),
    };

    log::debug!(
        "aligned {}x{} bases: score {}, {} columns",
        m,
        n,
        result.score,
        result.aligned_seq1.chars().count()
    );

    result
}

/// Align two sequences with the fixed scoring scheme and classify every
/// differing column.
pub fn align_sequences(seq1: &str, seq2: &str) -> AlignmentResult {
    let alignment = needleman_wunsch(seq1, seq2, &ScoringParams::default());
    let profile = classify_mutations(&alignment.aligned_seq1, &alignment.aligned_seq2);

    AlignmentResult {
        aligned_seq1: alignment.aligned_seq1,
        aligned_seq2: alignment.aligned_seq2,
        score: alignment.score,
        mutations: profile.mutations,
        total_mutations: profile.total_mutations,
        mutation_rate: profile.mutation_rate,
        transitions: profile.transitions,
        transversions: profile.transversions,
        insertions: profile.insertions,
        deletions: profile.deletions,
    }
}
