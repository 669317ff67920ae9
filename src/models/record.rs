use std::fmt;

use crate::models::Sequence;
use crate::utils::errors::FastaError;

/// A single FASTA record: identifier, optional description and sequence
///
/// # Examples
///
/// ```rust
/// use exonmerge::models::FastaRecord;
///
/// let record = FastaRecord::from_parts("tx.1", "ATGCCC").unwrap()
///     .with_description("first exon");
///
/// assert_eq!(record.id(), "tx.1");
/// assert_eq!(record.description(), Some("first exon"));
/// assert_eq!(record.header(), "tx.1 first exon");
/// assert_eq!(record.sequence().len(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FastaRecord {
    id: String,
    description: Option<String>,
    sequence: Sequence,
}

impl FastaRecord {
    pub fn new(id: impl Into<String>, sequence: Sequence) -> Self {
        FastaRecord {
            id: id.into(),
            description: None,
            sequence,
        }
    }

    /// Creates a record from an identifier and a sequence string
    pub fn from_parts(id: &str, sequence: &str) -> Result<Self, FastaError> {
        Ok(Self::new(id, sequence.parse()?))
    }

    /// Sets the free-text description of the record
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Consumes the record and returns only its sequence
    pub fn into_sequence(self) -> Sequence {
        self.sequence
    }

    /// The header line content, without the leading `>`
    pub fn header(&self) -> String {
        match &self.description {
            Some(desc) if !desc.is_empty() => format!("{} {}", self.id, desc),
            _ => self.id.clone(),
        }
    }
}

impl fmt::Display for FastaRecord {
    /// Single-line FASTA representation, without line wrapping
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, ">{}\n{}", self.header(), self.sequence)
    }
}
