use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use exonmerge::fasta::LINE_WIDTH;
use exonmerge::merge::{MergeConfig, DEFAULT_DELIMITER};

/// Merge consecutive exon FASTA records into one CDS record per transcript
#[derive(Parser, Debug)]
#[command(name = "exonmerge", version)]
struct Args {
    /// FASTA file with one record per exon, e.g. `>tx1.1`, `>tx1.2`, ...
    input: PathBuf,

    /// FASTA file for the merged records
    output: PathBuf,

    /// Separator between transcript name and exon number
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,

    /// Sequence characters per output line (0 = no wrapping)
    #[arg(long, default_value_t = LINE_WIDTH)]
    line_width: usize,

    /// Write run statistics and frame warnings as JSON to this file
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("exonmerge v{}", exonmerge::VERSION);
    let config = MergeConfig::with_delimiter(args.delimiter)?.with_line_width(args.line_width);

    let summary = exonmerge::merge_files(&args.input, &args.output, &config)?;
    info!(
        "Wrote {} merged records to {}",
        summary.records,
        args.output.display()
    );

    if let Some(path) = args.summary {
        let file = File::create(&path)
            .with_context(|| format!("cannot create summary file {}", path.display()))?;
        summary.write_json(file)?;
    }
    Ok(())
}
