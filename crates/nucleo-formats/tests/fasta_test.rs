use nucleo_core::alignment::align_sequences;
use nucleo_core::codon::{translate, ReadingFrame};
use nucleo_core::mutation::Classification;
use nucleo_core::orf::{find_orfs, Strand, DEFAULT_MIN_ORF_LENGTH};
use nucleo_core::stats::calculate_stats;
use nucleo_formats::{fasta, parse_validated};
use pretty_assertions::assert_eq;

const INSULIN: &str = include_str!("fixtures/insulin.fasta");
const ORIGINAL: &str = include_str!("fixtures/original.fasta");
const MUTATED: &str = include_str!("fixtures/mutated.fasta");

#[test]
fn test_parse_insulin_fragment() {
    let record = parse_validated(INSULIN).unwrap();
    assert_eq!(record.header, "Human_Insulin_Gene_Fragment");
    assert_eq!(record.len(), 333);
    assert!(record.sequence.starts_with("ATGGCCCTGTGGATG"));
    assert!(record.sequence.ends_with("AACTAG"));
}

#[test]
fn test_insulin_stats() {
    let record = fasta::parse(INSULIN);
    let stats = calculate_stats(&record.sequence);
    assert_eq!(stats.count_a, 57);
    assert_eq!(stats.count_t, 61);
    assert_eq!(stats.count_c, 106);
    assert_eq!(stats.count_g, 109);
    assert!((stats.gc_content - 215.0 / 333.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_insulin_translation() {
    let record = fasta::parse(INSULIN);
    assert_eq!(
        translate(&record.sequence, ReadingFrame::First),
        "MALWMRLLPLLALLALWGPDPAAAFVNQHLCGSHLVEALYLVCGERGFFYTPKTRREAEDLQVGQVELGGGPGAGSLQPLALEGSLQKRGIVEQCCTSICSLYQLENYCN*"
    );
}

#[test]
fn test_insulin_orfs() {
    let record = fasta::parse(INSULIN);
    let orfs = find_orfs(&record.sequence, DEFAULT_MIN_ORF_LENGTH);
    assert_eq!(orfs.len(), 3);

    let summary: Vec<(usize, usize, usize, usize, u8, Strand)> = orfs
        .iter()
        .map(|o| (o.id, o.start, o.end, o.length, o.frame, o.strand))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, 0, 332, 333, 1, Strand::Forward),
            (3, 37, 186, 150, 2, Strand::Reverse),
            (2, 281, 332, 52, 3, Strand::Forward),
        ]
    );

    assert_eq!(orfs[0].protein_sequence.len(), 110);
    assert!(orfs[0].is_terminated());
    // frame 3 runs off the end without a stop codon
    assert_eq!(orfs[2].protein_sequence, "MLYQHLLPLPAGELLQL");
    assert!(!orfs[2].is_terminated());
    assert_eq!(
        orfs[1].protein_sequence,
        "MLVQHCSTMPRFCRDPSRAKGCRLPAPGPPPSSTCPTCRSSASRRVLGV"
    );
}

#[test]
fn test_compare_sample_pair() {
    let original = parse_validated(ORIGINAL).unwrap();
    let mutated = parse_validated(MUTATED).unwrap();
    assert_eq!(original.len(), 219);
    assert_eq!(mutated.len(), 219);

    let result = align_sequences(&original.sequence, &mutated.sequence);
    assert_eq!(result.aligned_seq1, original.sequence);
    assert_eq!(result.aligned_seq2, mutated.sequence);
    assert_eq!(result.score, 432);
    assert_eq!(result.total_mutations, 2);
    assert_eq!(result.transitions, 1);
    assert_eq!(result.transversions, 1);

    let first = &result.mutations[0];
    assert_eq!((first.position, first.original, first.mutated), (121, 'T', 'A'));
    assert_eq!(first.classification, Some(Classification::Transversion));
    let second = &result.mutations[1];
    assert_eq!((second.position, second.original, second.mutated), (217, 'G', 'A'));
    assert_eq!(second.classification, Some(Classification::Transition));
}

#[test]
fn test_serialize_roundtrip() {
    let record = fasta::parse(INSULIN);
    let reparsed = fasta::parse(&fasta::serialize(&record));
    assert_eq!(reparsed, record);
}
