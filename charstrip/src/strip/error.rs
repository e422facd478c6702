//! Errors raised by the strip pipeline.

use std::io;
use std::path::PathBuf;

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Opening the target or allocating the scratch file.
    Open,
    /// Streaming the target through the deletion set.
    Filter,
    /// Copying the scratch file back over the target.
    Replace,
}

/// A fatal failure in one step of the pipeline.
///
/// Each variant names the step that failed and carries the OS error.
#[derive(Debug, thiserror::Error)]
pub enum StripError {
    /// The target file could not be opened.
    #[error("failed to open original file '{}': {source}", .path.display())]
    OpenTarget {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
    /// The unnamed scratch file could not be created.
    #[error("failed to create temporary file: {0}")]
    CreateScratch(#[source] io::Error),
    /// Reading the target failed during filtering.
    #[error("failed to read from original file: {0}")]
    ReadTarget(#[source] io::Error),
    /// Writing the scratch file failed during filtering.
    #[error("failed to write to temporary file: {0}")]
    WriteScratch(#[source] io::Error),
    /// The scratch length could not be measured.
    #[error("failed to get temporary file size: {0}")]
    ScratchSize(#[source] io::Error),
    /// Seeking either file back to its start failed.
    #[error("failed to rewind files: {0}")]
    Rewind(#[source] io::Error),
    /// Copying scratch bytes over the target failed.
    #[error("failed to copy file contents: {0}")]
    Copy(#[source] io::Error),
    /// Flushing the target failed.
    #[error("failed to flush original file: {0}")]
    Flush(#[source] io::Error),
    /// Truncating the target to the filtered length failed.
    #[error("failed to truncate file: {0}")]
    Truncate(#[source] io::Error),
}

impl StripError {
    /// Returns the pipeline stage this error belongs to.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::OpenTarget { .. } | Self::CreateScratch(_) => Stage::Open,
            Self::ReadTarget(_) | Self::WriteScratch(_) => Stage::Filter,
            Self::ScratchSize(_)
            | Self::Rewind(_)
            | Self::Copy(_)
            | Self::Flush(_)
            | Self::Truncate(_) => Stage::Replace,
        }
    }

    /// Whether the target file may have been partially overwritten.
    ///
    /// Only replace-stage failures happen after the overwrite has begun.
    #[must_use]
    pub const fn target_may_be_modified(&self) -> bool {
        matches!(self.stage(), Stage::Replace)
    }

    /// The underlying OS error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::OpenTarget { source, .. } => source,
            Self::CreateScratch(e)
            | Self::ReadTarget(e)
            | Self::WriteScratch(e)
            | Self::ScratchSize(e)
            | Self::Rewind(e)
            | Self::Copy(e)
            | Self::Flush(e)
            | Self::Truncate(e) => e,
        }
    }
}
