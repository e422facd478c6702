//! In-place byte deletion.
//!
//! The pipeline runs strictly in order:
//! - `opener`: open the target read/write and allocate an unnamed scratch file
//! - `filter`: stream the target into the scratch file, dropping deleted bytes
//! - `replacer`: copy the scratch file over the target, then truncate it
//!
//! Nothing touches the target until the replacer starts, so open and filter
//! failures leave it unmodified.
//!
//! ```no_run
//! use charstrip::strip::{DeletionSet, Stripper};
//! use std::path::Path;
//!
//! let report = Stripper::default()
//!     .run(Path::new("notes.txt"), &DeletionSet::from_bytes(b"\r"))
//!     .expect("strip failed");
//! println!("removed {} bytes", report.removed);
//! ```

mod error;
mod filter;
mod opener;
mod replacer;
mod set;
/// Report types produced by a run.
pub mod types;

pub use error::{Stage, StripError};
pub use filter::{filter_into, FilterReport};
pub use opener::{open, open_read_only, TargetHandles};
pub use replacer::{replace_contents, Truncate};
pub use set::DeletionSet;
pub use types::{RemovedByte, StripReport};

use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::utils::normalize_display_path;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// Runs the open, filter and replace stages over one file.
#[derive(Debug, Clone)]
pub struct Stripper {
    /// Bytes read or written per I/O call. Zero is treated as one.
    pub chunk_size: usize,
    /// Directory for the unnamed scratch file. System temp dir when `None`.
    pub scratch_dir: Option<PathBuf>,
    /// Filter only; never open the target for writing.
    pub dry_run: bool,
    /// Emit `[VERBOSE]` diagnostics on stderr.
    pub verbose: bool,
    /// Byte progress for the filter and copy passes.
    pub progress_bar: Option<ProgressBar>,
}

impl Default for Stripper {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            scratch_dir: None,
            dry_run: false,
            verbose: false,
            progress_bar: None,
        }
    }
}

impl Stripper {
    /// Builder-style method to set the chunk size.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Builder-style method to set the scratch directory.
    #[must_use]
    pub fn with_scratch_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.scratch_dir = dir;
        self
    }

    /// Builder-style method to enable dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builder-style method to set verbose mode.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builder-style method to attach a progress bar.
    #[must_use]
    pub fn with_progress_bar(mut self, progress_bar: Option<ProgressBar>) -> Self {
        self.progress_bar = progress_bar;
        self
    }

    /// Delete every byte in `set` from the file at `path`.
    ///
    /// In dry-run mode the target is opened read-only and only the filter
    /// stage runs; the report carries the length the file would end up with.
    ///
    /// # Errors
    ///
    /// Returns the [`StripError`] of the first step that failed. If
    /// [`StripError::target_may_be_modified`] is true the target may be
    /// partially overwritten.
    pub fn run(&self, path: &Path, set: &DeletionSet) -> Result<StripReport, StripError> {
        let scratch_dir = self.scratch_dir.as_deref();
        let mut handles = if self.dry_run {
            open_read_only(path, scratch_dir)?
        } else {
            open(path, scratch_dir)?
        };

        let display = normalize_display_path(&handles.path);
        if self.verbose {
            eprintln!(
                "[VERBOSE] Opened {display} (chunk size {} bytes)",
                self.chunk_size
            );
        }

        let pb = self.progress_bar.clone().unwrap_or_else(ProgressBar::hidden);
        if let Ok(meta) = handles.target.metadata() {
            pb.set_length(meta.len());
        }

        pb.set_message("filtering");
        let filtered = filter_into(
            pb.wrap_read(&mut handles.target),
            &mut handles.scratch,
            set,
            self.chunk_size,
        )?;

        if self.verbose {
            eprintln!(
                "[VERBOSE] Filter: {} bytes read, {} kept, {} removed",
                filtered.bytes_read,
                filtered.bytes_kept,
                filtered.bytes_removed()
            );
        }

        if self.dry_run {
            pb.finish_and_clear();
            return Ok(StripReport::new(display, true, &filtered, filtered.bytes_kept));
        }

        pb.set_message("rewriting");
        pb.set_length(filtered.bytes_kept);
        let final_len = replace_contents(
            pb.wrap_read(&mut handles.scratch),
            &mut handles.target,
            self.chunk_size,
        )?;
        pb.finish_and_clear();

        if self.verbose {
            eprintln!("[VERBOSE] Replace: target truncated to {final_len} bytes");
        }

        Ok(StripReport::new(display, false, &filtered, final_len))
    }
}
