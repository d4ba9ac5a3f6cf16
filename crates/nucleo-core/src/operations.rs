/// Default width used when wrapping sequences for display.
pub const DEFAULT_LINE_LENGTH: usize = 60;

/// Complement a single DNA base. Anything outside A/T/C/G passes through.
pub fn complement_base(base: char) -> char {
    match base.to_ascii_uppercase() {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        other => other,
    }
}

/// Complement of a DNA sequence, read in the original order
pub fn complement(seq: &str) -> String {
    seq.chars().map(complement_base).collect()
}

/// Reverse complement of a DNA sequence (the antiparallel strand, read 5'->3')
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}

/// Break a sequence into lines of `line_length` characters.
pub fn format_sequence(seq: &str, line_length: usize) -> String {
    if line_length == 0 {
        return seq.to_string();
    }

    seq.as_bytes()
        .chunks(line_length)
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join("\n")
}
