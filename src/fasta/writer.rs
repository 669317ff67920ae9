use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::{FastaRecord, RecordWrite};
use crate::utils::errors::FastaError;

/// Default number of sequence symbols per output line
pub const LINE_WIDTH: usize = 60;

/// Writes [`FastaRecord`]s into a `BufWriter`
///
/// # Examples
///
/// ```rust
/// use exonmerge::fasta::Writer;
/// use exonmerge::models::{FastaRecord, RecordWrite};
///
/// let record = FastaRecord::from_parts("tx", "ATGCCCTAA").unwrap()
///     .with_description("merged from 3 exons");
///
/// let output = Vec::new(); // substitute this with proper IO (io::stdout())
/// let mut writer = Writer::new(output);
/// writer.line_width(4);
/// writer.write_record(&record).unwrap();
///
/// let written_output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
/// assert_eq!(written_output, ">tx merged from 3 exons\nATGC\nCCTA\nA\n");
/// ```
pub struct Writer<W: std::io::Write> {
    inner: BufWriter<W>,
    line_width: usize,
}

impl Writer<File> {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FastaError> {
        let path = path.as_ref();
        match File::create(path) {
            Ok(file) => Ok(Self::new(file)),
            Err(err) => Err(FastaError::io(err, path)),
        }
    }
}

impl<W: std::io::Write> Writer<W> {
    /// Creates a new generic Writer for any `std::io::Write` object
    ///
    /// Use this method when you want to write to stdout or
    /// a remote source, e.g. via HTTP
    pub fn new(writer: W) -> Self {
        Writer::from_buf_writer(BufWriter::new(writer))
    }

    fn from_buf_writer(writer: BufWriter<W>) -> Self {
        Writer {
            inner: writer,
            line_width: LINE_WIDTH,
        }
    }

    /// Sets the number of sequence symbols per line.
    ///
    /// `0` writes every sequence on a single line.
    pub fn line_width(&mut self, width: usize) {
        self.line_width = width
    }

    pub fn flush(&mut self) -> Result<(), FastaError> {
        Ok(self.inner.flush()?)
    }

    pub fn into_inner(self) -> Result<W, FastaError> {
        match self.inner.into_inner() {
            Ok(res) => Ok(res),
            Err(err) => Err(FastaError::from(err.into_error())),
        }
    }
}

impl<W: std::io::Write> RecordWrite for Writer<W> {
    fn write_record(&mut self, record: &FastaRecord) -> Result<(), std::io::Error> {
        self.inner.write_all(b">")?;
        self.inner.write_all(record.header().as_bytes())?;
        self.inner.write_all(b"\n")?;

        let sequence = record.sequence();
        if sequence.is_empty() {
            return Ok(());
        }
        if self.line_width == 0 {
            self.inner.write_all(sequence.as_bytes())?;
            return self.inner.write_all(b"\n");
        }
        for line in sequence.chunks(self.line_width) {
            self.inner.write_all(line)?;
            self.inner.write_all(b"\n")?;
        }
        Ok(())
    }
}
