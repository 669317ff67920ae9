use std::convert::Infallible;
use std::io::Write;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::merge::MergeConfig;
use crate::models::{ExonKey, FastaRecord, Sequence};
use crate::utils::errors::MergeError;

/// A merged sequence whose length is not a whole number of codons
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameWarning {
    pub stem: String,
    pub length: usize,
}

/// Statistics of a merge run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    /// Number of merged records produced
    pub records: usize,
    /// Number of exon records consumed into merged records
    pub exons: usize,
    /// Merged records with a length that is not a multiple of 3
    pub warnings: Vec<FrameWarning>,
}

impl MergeSummary {
    /// Writes the summary as pretty-printed JSON
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exonmerge::merge::ExonMerger;
    /// use exonmerge::tests::records::exon_records;
    ///
    /// let mut merger = ExonMerger::from_records(exon_records(), ".");
    /// merger.by_ref().for_each(drop);
    ///
    /// let mut output = Vec::new();
    /// merger.summary().write_json(&mut output).unwrap();
    /// let json = String::from_utf8(output).unwrap();
    /// assert!(json.contains("\"records\": 1"));
    /// ```
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), MergeError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Exons of one transcript collected so far
struct ExonGroup {
    stem: String,
    sequence: Sequence,
    exons: usize,
}

impl ExonGroup {
    fn new(stem: String, sequence: Sequence) -> Self {
        ExonGroup {
            stem,
            sequence,
            exons: 1,
        }
    }

    fn push(&mut self, sequence: Sequence) {
        self.sequence.append(sequence);
        self.exons += 1;
    }
}

type Infallibly<I> = std::iter::Map<I, fn(FastaRecord) -> Result<FastaRecord, Infallible>>;

/// Merges adjacent exon records of the same transcript into one record
///
/// `ExonMerger` wraps an iterator of exon records and is itself an iterator
/// of merged records. Exons are grouped by the stem of their identifier
/// (see [`ExonKey`]). A merged record is yielded as soon as a record with a
/// different stem is read, or the input ends. Within a group, exon numbers
/// must continue `2, 3, 4, ...`; the number of the first exon is not checked.
///
/// The merger stops after the first error: malformed identifiers,
/// out-of-sequence exons and errors of the underlying record source are all fatal.
///
/// # Examples
///
/// ```rust
/// use exonmerge::merge::ExonMerger;
/// use exonmerge::tests::records::two_stem_records;
///
/// let mut merger = ExonMerger::from_records(two_stem_records(), ".");
///
/// let a = merger.next().unwrap().unwrap();
/// assert_eq!(a.id(), "a");
/// assert_eq!(a.sequence().to_string(), "ACGT");
/// assert_eq!(a.description(), Some("merged from 2 exons"));
///
/// let b = merger.next().unwrap().unwrap();
/// assert_eq!(b.id(), "b");
/// assert!(merger.next().is_none());
///
/// // neither ACGT nor TTTT are complete codons
/// assert_eq!(merger.summary().warnings.len(), 2);
/// ```
pub struct ExonMerger<I> {
    records: I,
    delimiter: String,
    group: Option<ExonGroup>,
    summary: MergeSummary,
    finished: bool,
}

impl<I> ExonMerger<I> {
    /// Creates a merger over a fallible record source
    pub fn new(records: I, delimiter: impl Into<String>) -> Self {
        ExonMerger {
            records,
            delimiter: delimiter.into(),
            group: None,
            summary: MergeSummary::default(),
            finished: false,
        }
    }

    pub fn with_config(records: I, config: &MergeConfig) -> Self {
        Self::new(records, config.delimiter())
    }

    /// Statistics of all merged records yielded so far
    pub fn summary(&self) -> &MergeSummary {
        &self.summary
    }

    pub fn into_summary(self) -> MergeSummary {
        self.summary
    }

    /// Concatenates the exons of `group` into a single record
    fn flush(&mut self, group: ExonGroup) -> FastaRecord {
        let ExonGroup {
            stem,
            sequence,
            exons,
        } = group;

        if !sequence.is_in_frame() {
            warn!("{} length {} not a multiple of 3", stem, sequence.len());
            self.summary.warnings.push(FrameWarning {
                stem: stem.clone(),
                length: sequence.len(),
            });
        }
        debug!("merged {} exons of {} into {} residues", exons, stem, sequence.len());

        self.summary.records += 1;
        self.summary.exons += exons;
        FastaRecord::new(stem, sequence).with_description(format!("merged from {} exons", exons))
    }

    /// Adds a record to the open group, or opens a new one
    ///
    /// Returns the previous group as merged record when a new group is opened.
    fn push(&mut self, record: FastaRecord) -> Result<Option<FastaRecord>, MergeError> {
        let key = ExonKey::parse(record.id(), &self.delimiter)?;

        if let Some(group) = self.group.as_mut() {
            if group.stem == key.stem() {
                let expected = group.exons + 1;
                if key.part() != expected {
                    return Err(MergeError::OutOfSequenceExon {
                        expected: ExonKey::identifier(&group.stem, &self.delimiter, expected),
                        found: record.id().to_string(),
                    });
                }
                group.push(record.into_sequence());
                return Ok(None);
            }
        }

        let previous = self
            .group
            .replace(ExonGroup::new(key.into_stem(), record.into_sequence()));
        Ok(previous.map(|group| self.flush(group)))
    }

    fn fail(&mut self, err: MergeError) -> Option<Result<FastaRecord, MergeError>> {
        self.finished = true;
        self.group = None;
        Some(Err(err))
    }
}

impl<I: Iterator<Item = FastaRecord>> ExonMerger<Infallibly<I>> {
    /// Creates a merger over plain records that cannot fail to be read
    pub fn from_records<T>(records: T, delimiter: impl Into<String>) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        let records = records
            .into_iter()
            .map(Ok as fn(FastaRecord) -> Result<FastaRecord, Infallible>);
        Self::new(records, delimiter)
    }
}

impl<I, E> Iterator for ExonMerger<I>
where
    I: Iterator<Item = Result<FastaRecord, E>>,
    E: Into<MergeError>,
{
    type Item = Result<FastaRecord, MergeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.delimiter.is_empty() {
            return self.fail(MergeError::EmptyDelimiter);
        }

        loop {
            let record = match self.records.next() {
                Some(Ok(record)) => record,
                Some(Err(err)) => return self.fail(err.into()),
                None => {
                    self.finished = true;
                    return self.group.take().map(|group| Ok(self.flush(group)));
                }
            };
            match self.push(record) {
                Ok(Some(merged)) => return Some(Ok(merged)),
                Ok(None) => continue,
                Err(err) => return self.fail(err),
            }
        }
    }
}
