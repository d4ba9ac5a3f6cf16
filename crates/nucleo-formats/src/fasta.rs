use nucleo_core::operations::{format_sequence, DEFAULT_LINE_LENGTH};
use nucleo_core::sequence::{clean_sequence, SequenceRecord, BYTE_ORDER_MARK, UNNAMED_HEADER};

/// Parse single-record FASTA, or raw sequence text when there is no header.
///
/// With several `>` lines the last one names the record and every other line
/// is concatenated into one sequence. No validation happens here.
pub fn parse(input: &str) -> SequenceRecord {
    let input = strip_byte_order_mark(input);
    let mut header = String::new();
    let mut sequence = String::new();

    for line in input.trim().lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix('>') {
            header = rest.trim().to_string();
        } else {
            sequence.push_str(&clean_sequence(trimmed));
        }
    }

    if header.is_empty() && !input.trim_start().starts_with('>') {
        return SequenceRecord {
            header: UNNAMED_HEADER.to_string(),
            sequence: clean_sequence(input),
        };
    }

    SequenceRecord { header, sequence }
}

/// Drop a leading UTF-8 byte order mark.
pub fn strip_byte_order_mark(input: &str) -> &str {
    input.strip_prefix(BYTE_ORDER_MARK).unwrap_or(input)
}

/// Serialize a record to FASTA, wrapping the sequence at 60 columns.
pub fn serialize(record: &SequenceRecord) -> String {
    let capacity = record.header.len() + record.len() + record.len() / DEFAULT_LINE_LENGTH + 3;
    let mut out = String::with_capacity(capacity);

    out.push('>');
    out.push_str(&record.header);
    out.push('\n');

    if !record.sequence.is_empty() {
        out.push_str(&format_sequence(&record.sequence, DEFAULT_LINE_LENGTH));
        out.push('\n');
    }

    out
}
