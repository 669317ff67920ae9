//! Records, sequences and exon keys
//!
//! [`FastaRecord`] is the only record type of the crate. It is used for the
//! exon fragments that are read and for the merged coding sequences that are
//! written. [`ExonKey`] is derived from a record identifier and tells which
//! transcript (stem) and which exon (part) a fragment belongs to.

mod exon_key;
mod record;
mod sequence;

pub use crate::models::exon_key::ExonKey;
pub use crate::models::record::FastaRecord;
pub use crate::models::sequence::Sequence;

/// Trait for writers of [`FastaRecord`]s
pub trait RecordWrite {
    /// Writes a single record, including the trailing newline
    fn write_record(&mut self, record: &FastaRecord) -> Result<(), std::io::Error>;

    /// Writes records from a fallible iterator and returns how many were written
    ///
    /// Writing stops at the first `Err` item, which is returned to the caller.
    /// Records that were written before that remain in the output.
    fn write_records<I, E>(&mut self, records: I) -> Result<usize, E>
    where
        I: IntoIterator<Item = Result<FastaRecord, E>>,
        E: From<std::io::Error>,
    {
        let mut count = 0;
        for record in records {
            self.write_record(&record?)?;
            count += 1;
        }
        Ok(count)
    }
}
