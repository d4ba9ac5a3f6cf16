use serde::{Deserialize, Serialize};

/// Base composition of a sequence.
///
/// Content values are percentages in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceStats {
    pub length: usize,
    pub count_a: usize,
    pub count_t: usize,
    pub count_c: usize,
    pub count_g: usize,
    pub gc_content: f64,
    pub at_content: f64,
}

/// Count bases and compute GC/AT content of an uppercase sequence.
pub fn calculate_stats(seq: &str) -> SequenceStats {
    let (mut a, mut t, mut c, mut g) = (0usize, 0usize, 0usize, 0usize);
    for base in seq.bytes() {
        match base.to_ascii_uppercase() {
            b'A' => a += 1,
            b'T' => t += 1,
            b'C' => c += 1,
            b'G' => g += 1,
            _ => {}
        }
    }

    let length = seq.len();
    let (gc_content, at_content) = if length > 0 {
        (
            (g + c) as f64 / length as f64 * 100.0,
            (a + t) as f64 / length as f64 * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    SequenceStats {
        length,
        count_a: a,
        count_t: t,
        count_c: c,
        count_g: g,
        gc_content,
        at_content,
    }
}
