//! Streams the target through the deletion set into the scratch file.

use super::error::StripError;
use super::set::DeletionSet;
use std::io::{ErrorKind, Read, Write};

/// Byte counts gathered while filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    /// Bytes consumed from the target.
    pub bytes_read: u64,
    /// Bytes written to the scratch file.
    pub bytes_kept: u64,
    /// Removed occurrences, indexed by byte value.
    pub removed_by_byte: [u64; 256],
}

impl FilterReport {
    fn new() -> Self {
        Self {
            bytes_read: 0,
            bytes_kept: 0,
            removed_by_byte: [0; 256],
        }
    }

    /// Bytes dropped because they were in the deletion set.
    #[must_use]
    pub const fn bytes_removed(&self) -> u64 {
        self.bytes_read - self.bytes_kept
    }
}

/// Copy every byte of `reader` not in `set` to `writer`, preserving order.
///
/// Reads from the reader's current position to end of stream, `chunk_size`
/// bytes at a time, and flushes the writer before returning.
///
/// # Errors
///
/// [`StripError::ReadTarget`] on a read failure and
/// [`StripError::WriteScratch`] on a write or flush failure. The reader is
/// never written to.
pub fn filter_into<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    set: &DeletionSet,
    chunk_size: usize,
) -> Result<FilterReport, StripError> {
    let mut input = vec![0u8; chunk_size.max(1)];
    let mut kept = Vec::with_capacity(input.len());
    let mut report = FilterReport::new();

    loop {
        let n = match reader.read(&mut input) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(StripError::ReadTarget(e)),
        };

        kept.clear();
        for &b in &input[..n] {
            if set.contains(b) {
                report.removed_by_byte[usize::from(b)] += 1;
            } else {
                kept.push(b);
            }
        }

        writer.write_all(&kept).map_err(StripError::WriteScratch)?;
        report.bytes_read += n as u64;
        report.bytes_kept += kept.len() as u64;
    }

    writer.flush().map_err(StripError::WriteScratch)?;
    Ok(report)
}
