use std::path::PathBuf;

/// Errors while reading or writing FASTA files
#[derive(Debug, thiserror::Error)]
pub enum FastaError {
    #[error("I/O error: {source} ({path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("sequence data before the first header at line {line}")]
    MissingHeader { line: usize },

    #[error("header without identifier at line {line}")]
    EmptyIdentifier { line: usize },

    #[error("invalid sequence symbol 0x{byte:02x} at line {line}")]
    InvalidSymbol { byte: u8, line: usize },

    #[error("header is not valid UTF-8 at line {line}")]
    InvalidHeader { line: usize },

    #[error("{source} ({path})")]
    Located {
        source: Box<FastaError>,
        path: PathBuf,
    },
}

impl FastaError {
    /// Wraps an `io::Error` with the path of the affected file
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

impl From<std::io::Error> for FastaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            source: err,
            path: PathBuf::from("<stream>"),
        }
    }
}

/// Errors that abort an exon merge run
///
/// Both `MalformedIdentifier` and `OutOfSequenceExon` indicate input that cannot
/// be merged safely. They are never recovered from.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("cannot split identifier `{id}` on `{delimiter}` into stem and exon number")]
    MalformedIdentifier { id: String, delimiter: String },

    #[error("Expected {expected} but got {found}")]
    OutOfSequenceExon { expected: String, found: String },

    #[error("the exon delimiter must not be empty")]
    EmptyDelimiter,

    #[error(transparent)]
    Fasta(#[from] FastaError),

    #[error("cannot write merge summary: {0}")]
    Summary(#[from] serde_json::Error),
}

impl From<std::io::Error> for MergeError {
    fn from(err: std::io::Error) -> Self {
        Self::Fasta(FastaError::from(err))
    }
}

impl From<std::convert::Infallible> for MergeError {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_sequence_message() {
        let err = MergeError::OutOfSequenceExon {
            expected: "tx.3".to_string(),
            found: "tx.4".to_string(),
        };
        assert_eq!(err.to_string(), "Expected tx.3 but got tx.4");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = FastaError::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            "exons.fasta",
        );
        assert_eq!(err.to_string(), "I/O error: missing (exons.fasta)");
    }

    #[test]
    fn test_located_error() {
        let err = FastaError::Located {
            source: Box::new(FastaError::InvalidSymbol {
                byte: 0xff,
                line: 2,
            }),
            path: PathBuf::from("exons.fasta"),
        };
        assert_eq!(
            err.to_string(),
            "invalid sequence symbol 0xff at line 2 (exons.fasta)"
        );
    }

    #[test]
    fn test_fasta_error_is_transparent() {
        let err = MergeError::from(FastaError::MissingHeader { line: 1 });
        assert_eq!(
            err.to_string(),
            "sequence data before the first header at line 1"
        );
    }
}
