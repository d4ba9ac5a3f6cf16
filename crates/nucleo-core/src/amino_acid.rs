use serde::{Deserialize, Serialize};

/// Side-chain chemistry grouping used for residue coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AminoAcidClass {
    Hydrophobic,
    Polar,
    Positive,
    Negative,
    Special,
}

impl std::fmt::Display for AminoAcidClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AminoAcidClass::Hydrophobic => write!(f, "hydrophobic"),
            AminoAcidClass::Polar => write!(f, "polar"),
            AminoAcidClass::Positive => write!(f, "positive"),
            AminoAcidClass::Negative => write!(f, "negative"),
            AminoAcidClass::Special => write!(f, "special"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AminoAcidInfo {
    pub code: char,
    pub class: AminoAcidClass,
    pub name: &'static str,
    pub abbreviation: &'static str,
}

const fn info(
    code: char,
    class: AminoAcidClass,
    name: &'static str,
    abbreviation: &'static str,
) -> AminoAcidInfo {
    AminoAcidInfo {
        code,
        class,
        name,
        abbreviation,
    }
}

use AminoAcidClass::*;

/// The 20 standard residues plus the stop symbol.
pub const AMINO_ACIDS: [AminoAcidInfo; 21] = [
    info('A', Hydrophobic, "Alanine", "Ala"),
    info('V', Hydrophobic, "Valine", "Val"),
    info('I', Hydrophobic, "Isoleucine", "Ile"),
    info('L', Hydrophobic, "Leucine", "Leu"),
    info('M', Hydrophobic, "Methionine", "Met"),
    info('F', Hydrophobic, "Phenylalanine", "Phe"),
    info('W', Hydrophobic, "Tryptophan", "Trp"),
    info('P', Hydrophobic, "Proline", "Pro"),
    info('G', Special, "Glycine", "Gly"),
    info('S', Polar, "Serine", "Ser"),
    info('T', Polar, "Threonine", "Thr"),
    info('C', Polar, "Cysteine", "Cys"),
    info('Y', Polar, "Tyrosine", "Tyr"),
    info('N', Polar, "Asparagine", "Asn"),
    info('Q', Polar, "Glutamine", "Gln"),
    info('K', Positive, "Lysine", "Lys"),
    info('R', Positive, "Arginine", "Arg"),
    info('H', Positive, "Histidine", "His"),
    info('D', Negative, "Aspartic acid", "Asp"),
    info('E', Negative, "Glutamic acid", "Glu"),
    info('*', Special, "Stop", "Stop"),
];

/// Look up a one-letter residue code (case-insensitive).
pub fn amino_acid_info(residue: char) -> Option<&'static AminoAcidInfo> {
    let code = residue.to_ascii_uppercase();
    AMINO_ACIDS.iter().find(|aa| aa.code == code)
}

pub fn amino_acid_class(residue: char) -> Option<AminoAcidClass> {
    amino_acid_info(residue).map(|aa| aa.class)
}
