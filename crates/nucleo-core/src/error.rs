use thiserror::Error;

/// Errors reported by the analysis engine.
///
/// Every other operation in this crate is total over a validated sequence, so
/// these only surface from validation and from parameter conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Sequence is empty")]
    EmptySequence,
    #[error("Invalid characters found: {}. Only A, T, C, G are allowed.", join_chars(.0))]
    InvalidCharacters(Vec<char>),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Failure of one input in a multi-sequence workflow, 1-based index.
    #[error("Sequence {index}: {source}")]
    InSequence {
        index: usize,
        #[source]
        source: Box<AnalysisError>,
    },
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_characters_message() {
        let err = AnalysisError::InvalidCharacters(vec!['X', 'N']);
        assert_eq!(
            err.to_string(),
            "Invalid characters found: X, N. Only A, T, C, G are allowed."
        );
    }

    #[test]
    fn test_labelled_message() {
        let err = AnalysisError::InSequence {
            index: 2,
            source: Box::new(AnalysisError::EmptySequence),
        };
        assert_eq!(err.to_string(), "Sequence 2: Sequence is empty");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(AnalysisError::EmptySequence.to_string(), "Sequence is empty");
    }
}
