use std::io::Read;

use anyhow::Context;
use nucleo_core::SequenceRecord;
use nucleo_formats::fasta;

fn read_stdin() -> anyhow::Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;
    Ok(content)
}

/// Read a record from a path, or stdin when the path is `-`.
///
/// Validation is left to the caller.
pub fn load_record(source: &str) -> anyhow::Result<SequenceRecord> {
    if source == "-" {
        return Ok(fasta::parse(&read_stdin()?));
    }

    nucleo_formats::read_record(source).with_context(|| format!("Failed to read {}", source))
}

/// Load and validate a record.
pub fn load_valid_record(source: &str) -> anyhow::Result<SequenceRecord> {
    let record = if source == "-" {
        nucleo_formats::parse_validated(&read_stdin()?)?
    } else {
        nucleo_formats::read_validated(source)
            .with_context(|| format!("Failed to load {}", source))?
    };
    log::info!("{}: '{}', {} bp", source, record.header, record.len());
    Ok(record)
}

/// Write a value as JSON to stdout.
pub fn emit<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
