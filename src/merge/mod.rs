//! Merge exon records into coding sequences
//!
//! Exon records of one transcript share a stem and carry their exon number
//! after the last delimiter:
//!
//! ```text
//! >cds.GPLIN_000008300.t1.1     stem: cds.GPLIN_000008300.t1   exon: 1
//! >cds.GPLIN_000008300.t1.2     stem: cds.GPLIN_000008300.t1   exon: 2
//! >cds.GPLIN_000008400.t1.1     stem: cds.GPLIN_000008400.t1   exon: 1
//! ```
//!
//! [`ExonMerger`] concatenates the sequences of adjacent records with the same
//! stem and yields one record per stem, in input order. The input is never
//! sorted, so exons must already be adjacent and in ascending order.
//!
//! ```rust
//! use exonmerge::merge::ExonMerger;
//! use exonmerge::tests::records::exon_records;
//!
//! let merged: Vec<_> = ExonMerger::from_records(exon_records(), ".")
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].to_string(), ">id merged from 3 exons\nAAATTTGGG");
//! ```

mod config;
mod merger;

pub use crate::merge::config::{MergeConfig, DEFAULT_DELIMITER};
pub use crate::merge::merger::{ExonMerger, FrameWarning, MergeSummary};
