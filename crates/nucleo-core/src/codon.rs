use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Residue reported for a triplet the table does not cover.
pub const UNKNOWN_RESIDUE: char = '?';
/// Residue reported for a stop codon.
pub const STOP_RESIDUE: char = '*';

static STANDARD: LazyLock<CodonTable> = LazyLock::new(CodonTable::standard);

/// Shared instance of the standard genetic code.
pub fn standard_table() -> &'static CodonTable {
    &STANDARD
}

/// Codon to amino acid mapping plus the start/stop codon sets.
pub struct CodonTable {
    table: HashMap<String, char>,
    start_codons: Vec<String>,
    stop_codons: Vec<String>,
}

impl CodonTable {
    /// Standard genetic code (NCBI table 1), ATG as the only start codon
    pub fn standard() -> Self {
        let mut table = HashMap::with_capacity(64);
        let codons = [
            ("TTT", 'F'), ("TTC", 'F'), ("TTA", 'L'), ("TTG", 'L'),
            ("CTT", 'L'), ("CTC", 'L'), ("CTA", 'L'), ("CTG", 'L'),
            ("ATT", 'I'), ("ATC", 'I'), ("ATA", 'I'), ("ATG", 'M'),
            ("GTT", 'V'), ("GTC", 'V'), ("GTA", 'V'), ("GTG", 'V'),
            ("TCT", 'S'), ("TCC", 'S'), ("TCA", 'S'), ("TCG", 'S'),
            ("CCT", 'P'), ("CCC", 'P'), ("CCA", 'P'), ("CCG", 'P'),
            ("ACT", 'T'), ("ACC", 'T'), ("ACA", 'T'), ("ACG", 'T'),
            ("GCT", 'A'), ("GCC", 'A'), ("GCA", 'A'), ("GCG", 'A'),
            ("TAT", 'Y'), ("TAC", 'Y'), ("TAA", '*'), ("TAG", '*'),
            ("CAT", 'H'), ("CAC", 'H'), ("CAA", 'Q'), ("CAG", 'Q'),
            ("AAT", 'N'), ("AAC", 'N'), ("AAA", 'K'), ("AAG", 'K'),
            ("GAT", 'D'), ("GAC", 'D'), ("GAA", 'E'), ("GAG", 'E'),
            ("TGT", 'C'), ("TGC", 'C'), ("TGA", '*'), ("TGG", 'W'),
            ("CGT", 'R'), ("CGC", 'R'), ("CGA", 'R'), ("CGG", 'R'),
            ("AGT", 'S'), ("AGC", 'S'), ("AGA", 'R'), ("AGG", 'R'),
            ("GGT", 'G'), ("GGC", 'G'), ("GGA", 'G'), ("GGG", 'G'),
        ];

        for (codon, aa) in &codons {
            table.insert(codon.to_string(), *aa);
        }

        CodonTable {
            table,
            start_codons: vec!["ATG".to_string()],
            stop_codons: vec!["TAA".to_string(), "TAG".to_string(), "TGA".to_string()],
        }
    }

    /// Translate a single uppercase codon, `?` when unmapped
    pub fn translate_codon(&self, codon: &str) -> char {
        self.table.get(codon).copied().unwrap_or(UNKNOWN_RESIDUE)
    }

    pub fn is_start_codon(&self, codon: &str) -> bool {
        self.start_codons.iter().any(|c| c == codon)
    }

    pub fn is_stop_codon(&self, codon: &str) -> bool {
        self.stop_codons.iter().any(|c| c == codon)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// One of the three reading-frame offsets of a strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingFrame {
    First,
    Second,
    Third,
}

impl ReadingFrame {
    pub const ALL: [ReadingFrame; 3] = [
        ReadingFrame::First,
        ReadingFrame::Second,
        ReadingFrame::Third,
    ];

    /// 0-based offset of the first codon.
    pub fn offset(&self) -> usize {
        match self {
            ReadingFrame::First => 0,
            ReadingFrame::Second => 1,
            ReadingFrame::Third => 2,
        }
    }

    /// 1-based frame number used in reports.
    pub fn number(&self) -> u8 {
        self.offset() as u8 + 1
    }
}

impl TryFrom<usize> for ReadingFrame {
    type Error = AnalysisError;

    /// Convert a 0-based offset.
    fn try_from(offset: usize) -> Result<Self, Self::Error> {
        match offset {
            0 => Ok(ReadingFrame::First),
            1 => Ok(ReadingFrame::Second),
            2 => Ok(ReadingFrame::Third),
            other => Err(AnalysisError::InvalidParameter(format!(
                "reading frame offset must be 0, 1 or 2, got {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ReadingFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// An in-frame triplet of a scanned sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Codon {
    pub sequence: String,
    /// 0-based offset of the first base in the scanned sequence.
    pub position: usize,
    pub amino_acid: char,
    pub is_start: bool,
    pub is_stop: bool,
}

/// Split a sequence into codons from the given frame offset.
///
/// Trailing bases that do not complete a codon are dropped.
pub fn get_codons(seq: &str, frame: ReadingFrame) -> Vec<Codon> {
    let table = standard_table();
    let upper = seq.to_ascii_uppercase();
    let bases = upper.as_bytes();
    let mut codons = Vec::with_capacity(bases.len() / 3);

    let mut i = frame.offset();
    while i + 3 <= bases.len() {
        let codon = String::from_utf8_lossy(&bases[i..i + 3]).into_owned();
        codons.push(Codon {
            amino_acid: table.translate_codon(&codon),
            is_start: table.is_start_codon(&codon),
            is_stop: table.is_stop_codon(&codon),
            sequence: codon,
            position: i,
        });
        i += 3;
    }

    codons
}

/// Translate every codon of a frame, stop codons included as `*`.
pub fn translate(seq: &str, frame: ReadingFrame) -> String {
    get_codons(seq, frame)
        .iter()
        .map(|c| c.amino_acid)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = CodonTable::standard();
        assert_eq!(table.len(), 64);
        assert_eq!(table.translate_codon("ATG"), 'M');
        assert_eq!(table.translate_codon("TAA"), '*');
        assert_eq!(table.translate_codon("GCT"), 'A');
        assert_eq!(table.translate_codon("XXX"), '?');
    }

    #[test]
    fn test_start_stop_codons() {
        let table = standard_table();
        assert!(table.is_start_codon("ATG"));
        assert!(!table.is_start_codon("CTG"));
        assert!(!table.is_start_codon("AAA"));
        assert!(table.is_stop_codon("TAA"));
        assert!(table.is_stop_codon("TAG"));
        assert!(table.is_stop_codon("TGA"));
        assert!(!table.is_stop_codon("TGG"));
    }

    #[test]
    fn test_reading_frame_conversion() {
        assert_eq!(ReadingFrame::try_from(0usize).unwrap(), ReadingFrame::First);
        assert_eq!(ReadingFrame::try_from(2usize).unwrap().number(), 3);
        assert!(matches!(
            ReadingFrame::try_from(3usize),
            Err(AnalysisError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_get_codons_start_stop() {
        let codons = get_codons("ATGTAA", ReadingFrame::First);
        assert_eq!(
            codons,
            vec![
                Codon {
                    sequence: "ATG".to_string(),
                    position: 0,
                    amino_acid: 'M',
                    is_start: true,
                    is_stop: false,
                },
                Codon {
                    sequence: "TAA".to_string(),
                    position: 3,
                    amino_acid: '*',
                    is_start: false,
                    is_stop: true,
                },
            ]
        );
    }

    #[test]
    fn test_get_codons_offset_drops_partial() {
        let codons = get_codons("AATGAAAT", ReadingFrame::Second);
        assert_eq!(codons.len(), 2);
        assert_eq!(codons[0].sequence, "ATG");
        assert_eq!(codons[0].position, 1);
        assert_eq!(codons[1].sequence, "AAA");
        assert_eq!(codons[1].position, 4);
    }

    #[test]
    fn test_get_codons_short_input() {
        assert!(get_codons("AT", ReadingFrame::First).is_empty());
        assert!(get_codons("ATG", ReadingFrame::Second).is_empty());
        assert!(get_codons("", ReadingFrame::Third).is_empty());
    }

    #[test]
    fn test_get_codons_lowercase() {
        let codons = get_codons("atg", ReadingFrame::First);
        assert_eq!(codons[0].sequence, "ATG");
        assert!(codons[0].is_start);
    }

    #[test]
    fn test_translate_runs_through_stops() {
        assert_eq!(translate("ATGAAATTT", ReadingFrame::First), "MKF");
        assert_eq!(translate("ATGTAAGGG", ReadingFrame::First), "M*G");
        assert_eq!(translate("AT", ReadingFrame::First), "");
        assert_eq!(translate("CATGAAA", ReadingFrame::Second), "MK");
    }

    #[test]
    fn test_codon_serialization() {
        let codons = get_codons("ATG", ReadingFrame::First);
        let json = serde_json::to_value(&codons[0]).unwrap();
        assert_eq!(json["aminoAcid"], "M");
        assert_eq!(json["isStart"], true);
        assert_eq!(json["isStop"], false);
    }
}
