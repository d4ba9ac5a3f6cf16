use serde::{Deserialize, Serialize};

use crate::sequence::{is_purine, is_pyrimidine};

/// Gap symbol used in aligned sequences.
pub const GAP: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationType {
    Substitution,
    /// Base present in the second sequence only.
    Insertion,
    /// Base present in the first sequence only.
    Deletion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Purine to purine or pyrimidine to pyrimidine.
    Transition,
    /// Purine to pyrimidine or the reverse.
    Transversion,
}

/// A differing column of an alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    /// 0-based column in the gapped alignment.
    pub position: usize,
    pub original: char,
    pub mutated: char,
    #[serde(rename = "type")]
    pub mutation_type: MutationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

/// Mutations found in an alignment and their tallies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MutationProfile {
    pub mutations: Vec<Mutation>,
    pub total_mutations: usize,
    /// Percentage of alignment columns carrying a mutation.
    pub mutation_rate: f64,
    pub transitions: usize,
    pub transversions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

/// Classify a base substitution by purine/pyrimidine class.
pub fn classify_substitution(original: char, mutated: char) -> Classification {
    let same_class = (is_purine(original) && is_purine(mutated))
        || (is_pyrimidine(original) && is_pyrimidine(mutated));
    if same_class {
        Classification::Transition
    } else {
        Classification::Transversion
    }
}

/// Walk two equal-length gapped sequences column by column.
pub fn classify_mutations(aligned_seq1: &str, aligned_seq2: &str) -> MutationProfile {
    let mut profile = MutationProfile::default();
    let mut columns = 0usize;

    let pairs = aligned_seq1.chars().zip(aligned_seq2.chars());
    for (position, (original, mutated)) in pairs.enumerate() {
        columns += 1;
        if original == mutated {
            continue;
        }

        let (mutation_type, classification) = if original == GAP {
            profile.insertions += 1;
            (MutationType::Insertion, None)
        } else if mutated == GAP {
            profile.deletions += 1;
            (MutationType::Deletion, None)
        } else {
            let class = classify_substitution(original, mutated);
            match class {
                Classification::Transition => profile.transitions += 1,
                Classification::Transversion => profile.transversions += 1,
            }
            (MutationType::Substitution, Some(class))
        };

        profile.mutations.push(Mutation {
            position,
            original,
            mutated,
            mutation_type,
            classification,
        });
    }

    profile.total_mutations = profile.mutations.len();
    profile.mutation_rate = if columns > 0 {
        profile.total_mutations as f64 / columns as f64 * 100.0
    } else {
        0.0
    };
    profile
}
