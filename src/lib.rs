#![doc = include_str!("../README.md")]

pub mod fasta;
pub mod merge;
pub mod models;
pub mod tests;
pub mod utils;

use std::path::Path;

use log::info;

use crate::merge::{ExonMerger, MergeConfig, MergeSummary};
use crate::models::RecordWrite;
use crate::utils::errors::MergeError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Merges all exon records of `input` and writes the merged records to `output`
///
/// Records are streamed: every merged record is written as soon as the
/// last exon of its transcript was read. If the run aborts with an error,
/// `output` keeps the records that were written before.
///
/// # Examples
///
/// ```no_run
/// use exonmerge::merge::MergeConfig;
///
/// let summary = exonmerge::merge_files(
///     "exons.fasta",
///     "cds.fasta",
///     &MergeConfig::default(),
/// ).unwrap();
/// println!("{} transcripts", summary.records);
/// ```
pub fn merge_files<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &MergeConfig,
) -> Result<MergeSummary, MergeError> {
    let reader = fasta::Reader::from_file(input.as_ref())?;
    let mut writer = fasta::Writer::from_file(output.as_ref())?;
    writer.line_width(config.line_width());

    let mut merger = ExonMerger::with_config(reader, config);
    let written = writer.write_records(merger.by_ref())?;
    writer.flush()?;

    let summary = merger.into_summary();
    info!(
        "Merged {} exons into {} records ({} not a multiple of 3) from {}",
        summary.exons,
        written,
        summary.warnings.len(),
        input.as_ref().display()
    );
    Ok(summary)
}
