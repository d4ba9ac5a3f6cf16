pub mod detect;
pub mod fasta;

use std::path::Path;

use nucleo_core::{AnalysisError, SequenceRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Fasta,
    Raw,
    Unknown,
}

/// Parse FASTA or raw text, then validate the sequence body.
pub fn parse_validated(content: &str) -> Result<SequenceRecord, ParseError> {
    let record = fasta::parse(content);
    record.validate()?;
    Ok(record)
}

/// Read a sequence file and parse it.
pub fn read_record(path: impl AsRef<Path>) -> Result<SequenceRecord, ParseError> {
    Ok(fasta::parse(&read_content(path.as_ref())?))
}

/// Read a sequence file, parse it and validate the sequence body.
pub fn read_validated(path: impl AsRef<Path>) -> Result<SequenceRecord, ParseError> {
    parse_validated(&read_content(path.as_ref())?)
}

/// The extension is only consulted for diagnostics; content decides the format.
fn read_content(path: &Path) -> Result<String, ParseError> {
    let content = std::fs::read_to_string(path)?;

    let by_extension = detect::detect_format_from_extension(&path.to_string_lossy());
    let by_content = detect::detect_format(&content);
    if by_extension != InputFormat::Unknown && by_extension != by_content {
        log::warn!(
            "{} looks like {:?} by extension but {:?} by content",
            path.display(),
            by_extension,
            by_content
        );
    }

    Ok(content)
}
