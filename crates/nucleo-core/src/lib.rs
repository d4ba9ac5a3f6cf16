pub mod alignment;
pub mod amino_acid;
pub mod analysis;
pub mod codon;
pub mod error;
pub mod mutation;
pub mod operations;
pub mod orf;
pub mod sequence;
pub mod stats;

pub use error::AnalysisError;
pub use sequence::*;
