//! The strip command: run the pipeline on one file and report.

use crate::output;
use crate::strip::{DeletionSet, StripReport, Stripper};

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

/// Options for one strip run, after CLI and config are merged.
#[derive(Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct StripOptions {
    /// Target file.
    pub file: PathBuf,
    /// Raw bytes of the deletion-set argument.
    pub chars: Vec<u8>,
    /// Leave the file untouched.
    pub dry_run: bool,
    /// Bytes per read/write call.
    pub chunk_size: usize,
    /// Directory for the unnamed scratch file.
    pub scratch_dir: Option<PathBuf>,
    /// Emit the report as JSON.
    pub json: bool,
    /// Print the summary table.
    pub summary: bool,
    /// Verbose diagnostics.
    pub verbose: bool,
    /// Show a progress bar.
    pub progress: bool,
}

/// Delete `options.chars` from `options.file` and write any requested report.
///
/// Nothing is written on success unless JSON, a summary, or a dry run was
/// requested.
///
/// # Errors
///
/// Returns the pipeline's [`crate::strip::StripError`] (wrapped in
/// `anyhow`) or an error writing the report.
pub fn run_strip<W: Write>(options: &StripOptions, mut writer: W) -> Result<StripReport> {
    let set = DeletionSet::from_bytes(&options.chars);

    if options.verbose {
        eprintln!(
            "[VERBOSE] Deletion set ({} distinct bytes): {set:?}",
            set.len()
        );
        if options.dry_run {
            eprintln!("[VERBOSE] Dry run: target opened read-only");
        }
    }

    let progress_bar = (options.progress && !options.json).then(output::create_progress_bar);

    let report = Stripper::default()
        .with_chunk_size(options.chunk_size)
        .with_scratch_dir(options.scratch_dir.clone())
        .with_dry_run(options.dry_run)
        .with_verbose(options.verbose)
        .with_progress_bar(progress_bar)
        .run(&options.file, &set)?;

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else if options.dry_run {
        output::print_dry_run_header(&mut writer)?;
        output::print_summary(&mut writer, &report)?;
    } else if options.summary {
        output::print_summary(&mut writer, &report)?;
    }
    writer.flush()?;

    Ok(report)
}
