//! Read and write FASTA files
//!
//! [`Reader`] is a lazy iterator of [`FastaRecord`](crate::models::FastaRecord)s,
//! [`Writer`] writes records with sequence lines wrapped at a fixed width.
//!
//! ```rust
//! use exonmerge::fasta::{Reader, Writer};
//! use exonmerge::models::RecordWrite;
//!
//! let input = b">tx.1\nATGC\nCC\n";
//! let mut writer = Writer::new(Vec::new());
//! writer.line_width(3);
//! let count = writer.write_records(Reader::new(&input[..])).unwrap();
//!
//! assert_eq!(count, 1);
//! assert_eq!(writer.into_inner().unwrap(), b">tx.1\nATG\nCCC\n");
//! ```

mod reader;
mod writer;

pub use crate::fasta::reader::Reader;
pub use crate::fasta::writer::{Writer, LINE_WIDTH};
