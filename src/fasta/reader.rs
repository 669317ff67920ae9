use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::models::{FastaRecord, Sequence};
use crate::utils::errors::FastaError;

/// Lazily parses [`FastaRecord`]s from any `BufRead` source
///
/// Sequence lines are concatenated and stripped of whitespace. The
/// identifier is the first word of the header line, the remaining text is
/// the description. The reader is fused after the first error.
///
/// # Examples
///
/// ```rust
/// use exonmerge::fasta::Reader;
///
/// let data = b">tx.1 first\nATG\nCC\n>tx.2\nCTAA\n";
/// let records: Vec<_> = Reader::new(&data[..]).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].id(), "tx.1");
/// assert_eq!(records[0].description(), Some("first"));
/// assert_eq!(records[0].sequence().to_string(), "ATGCC");
/// assert_eq!(records[1].sequence().to_string(), "CTAA");
/// ```
pub struct Reader<R> {
    inner: R,
    /// Source file, used to locate errors
    path: Option<PathBuf>,
    line: Vec<u8>,
    line_number: usize,
    /// Header of the record that is read next (without `>`) and its line number
    next_header: Option<(String, usize)>,
    finished: bool,
}

impl Reader<BufReader<File>> {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FastaError> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                let mut reader = Self::new(file);
                reader.path = Some(path.to_path_buf());
                Ok(reader)
            }
            Err(err) => Err(FastaError::io(err, path)),
        }
    }
}

impl<R: Read> Reader<BufReader<R>> {
    /// Creates a new Reader for any `std::io::Read` object
    pub fn new(reader: R) -> Self {
        Reader::from_buf_reader(BufReader::new(reader))
    }
}

impl<R: BufRead> Reader<R> {
    /// Creates a Reader from an already buffered source
    pub fn from_buf_reader(reader: R) -> Self {
        Reader {
            inner: reader,
            path: None,
            line: Vec::new(),
            line_number: 0,
            next_header: None,
            finished: false,
        }
    }

    /// Reads the next line into `self.line`, returns `false` at EOF
    fn read_line(&mut self) -> Result<bool, FastaError> {
        self.line.clear();
        let bytes = match self.inner.read_until(b'\n', &mut self.line) {
            Ok(bytes) => bytes,
            Err(err) => {
                return Err(match &self.path {
                    Some(path) => FastaError::io(err, path),
                    None => FastaError::from(err),
                })
            }
        };
        if bytes > 0 {
            self.line_number += 1;
        }
        Ok(bytes > 0)
    }

    fn is_blank_line(&self) -> bool {
        self.line.iter().all(|b| b.is_ascii_whitespace())
    }

    /// Returns the header text if the current line is a header line
    fn header(&self) -> Result<Option<String>, FastaError> {
        let start = self
            .line
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(self.line.len());
        match self.line[start..].strip_prefix(b">") {
            Some(header) => match std::str::from_utf8(header) {
                Ok(text) => Ok(Some(text.trim().to_string())),
                Err(_) => Err(FastaError::InvalidHeader {
                    line: self.line_number,
                }),
            },
            None => Ok(None),
        }
    }

    /// Skips blank lines up to the first header line
    fn find_first_header(&mut self) -> Result<Option<(String, usize)>, FastaError> {
        while self.read_line()? {
            if self.is_blank_line() {
                continue;
            }
            return match self.header()? {
                Some(header) => Ok(Some((header, self.line_number))),
                None => Err(FastaError::MissingHeader {
                    line: self.line_number,
                }),
            };
        }
        Ok(None)
    }

    fn read_record(&mut self) -> Result<Option<FastaRecord>, FastaError> {
        let (header, header_line) = match self.next_header.take() {
            Some(next) => next,
            None => match self.find_first_header()? {
                Some(first) => first,
                None => return Ok(None),
            },
        };

        let mut sequence = Sequence::new();
        while self.read_line()? {
            if let Some(next) = self.header()? {
                self.next_header = Some((next, self.line_number));
                break;
            }
            let line = self.line_number;
            sequence
                .extend_from_raw_bytes(&self.line)
                .map_err(|byte| FastaError::InvalidSymbol { byte, line })?;
        }

        let mut words = header.splitn(2, char::is_whitespace);
        let id = match words.next() {
            Some(id) if !id.is_empty() => id,
            _ => return Err(FastaError::EmptyIdentifier { line: header_line }),
        };
        let record = FastaRecord::new(id, sequence);
        Ok(Some(match words.next().map(str::trim) {
            Some(desc) if !desc.is_empty() => record.with_description(desc),
            _ => record,
        }))
    }

    /// Adds the source file to parse errors of file-backed readers
    fn locate(&self, err: FastaError) -> FastaError {
        match &self.path {
            Some(path) if !matches!(err, FastaError::Io { .. }) => FastaError::Located {
                path: path.clone(),
                source: Box::new(err),
            },
            _ => err,
        }
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<FastaRecord, FastaError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(self.locate(err)))
            }
        }
    }
}
