use nucleo_core::{analysis, codon, operations, orf, stats as composition};
use serde::Serialize;

use super::reading_frame;
use crate::input::{emit, load_record, load_valid_record};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StrandOutput {
    header: String,
    reverse: bool,
    sequence: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProteinOutput {
    header: String,
    frame: u8,
    protein: String,
}

pub fn stats(input: &str, pretty: bool) -> anyhow::Result<()> {
    let record = load_valid_record(input)?;
    emit(&composition::calculate_stats(&record.sequence), pretty)
}

pub fn complement(input: &str, reverse: bool, pretty: bool) -> anyhow::Result<()> {
    let record = load_valid_record(input)?;
    let sequence = if reverse {
        operations::reverse_complement(&record.sequence)
    } else {
        operations::complement(&record.sequence)
    };
    emit(
        &StrandOutput {
            header: record.header,
            reverse,
            sequence,
        },
        pretty,
    )
}

pub fn codons(input: &str, frame: u8, pretty: bool) -> anyhow::Result<()> {
    let record = load_valid_record(input)?;
    emit(&codon::get_codons(&record.sequence, reading_frame(frame)?), pretty)
}

pub fn translate(input: &str, frame: u8, pretty: bool) -> anyhow::Result<()> {
    let record = load_valid_record(input)?;
    let protein = codon::translate(&record.sequence, reading_frame(frame)?);
    emit(
        &ProteinOutput {
            header: record.header,
            frame,
            protein,
        },
        pretty,
    )
}

pub fn orfs(input: &str, min_length: usize, pretty: bool) -> anyhow::Result<()> {
    let record = load_valid_record(input)?;
    let orfs = orf::find_orfs(&record.sequence, min_length);
    log::info!("{} ORF(s) of at least {} nt", orfs.len(), min_length);
    emit(&orfs, pretty)
}

pub fn analyze(input: &str, frame: u8, min_length: usize, pretty: bool) -> anyhow::Result<()> {
    let record = load_record(input)?;
    let report = analysis::analyze_sequence(&record, reading_frame(frame)?, min_length)?;
    emit(&report, pretty)
}
