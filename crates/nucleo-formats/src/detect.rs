use crate::fasta::strip_byte_order_mark;
use crate::InputFormat;

/// Auto-detect input format from content
pub fn detect_format(content: &str) -> InputFormat {
    if strip_byte_order_mark(content).trim_start().starts_with('>') {
        InputFormat::Fasta
    } else {
        InputFormat::Raw
    }
}

/// Detect format from file extension
pub fn detect_format_from_extension(path: &str) -> InputFormat {
    let lower = path.to_lowercase();
    if lower.ends_with(".fa")
        || lower.ends_with(".fasta")
        || lower.ends_with(".fna")
        || lower.ends_with(".fsa")
    {
        InputFormat::Fasta
    } else if lower.ends_with(".txt") || lower.ends_with(".seq") {
        InputFormat::Raw
    } else {
        InputFormat::Unknown
    }
}
