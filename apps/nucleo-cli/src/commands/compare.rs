use anyhow::Context;
use nucleo_core::analysis;

use crate::input::{emit, load_record};

/// Align two inputs and report mutations, ORFs and translations of each.
pub fn align(first: &str, second: &str, pretty: bool) -> anyhow::Result<()> {
    let record1 = load_record(first)?;
    let record2 = load_record(second)?;

    let report = analysis::compare_sequences(&record1, &record2)
        .with_context(|| format!("Cannot compare {} and {}", first, second))?;
    log::info!(
        "{} mutation(s) over {} columns ({:.2}%)",
        report.alignment.total_mutations,
        report.alignment.alignment_length(),
        report.alignment.mutation_rate
    );

    emit(&report, pretty)
}
