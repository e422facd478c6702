use serde::Serialize;

use super::filter::FilterReport;

/// Occurrences of one deleted byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedByte {
    /// Byte value.
    pub byte: u8,
    /// Printable form (`a`, `\n`, `\xff`).
    pub display: String,
    /// Number of occurrences removed.
    pub count: u64,
}

/// Outcome of one run over a target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripReport {
    /// Target path as given.
    pub file: String,
    /// True when the target was left untouched on purpose.
    pub dry_run: bool,
    /// Length of the target before the run.
    pub original_len: u64,
    /// Length after the run (or the length it would have, for a dry run).
    pub final_len: u64,
    /// Total bytes removed.
    pub removed: u64,
    /// Per-byte breakdown, ascending by byte value, zero counts omitted.
    pub removed_by_byte: Vec<RemovedByte>,
}

impl StripReport {
    pub(crate) fn new(file: String, dry_run: bool, filter: &FilterReport, final_len: u64) -> Self {
        let removed_by_byte = filter
            .removed_by_byte
            .iter()
            .zip(0..=u8::MAX)
            .filter(|(count, _)| **count > 0)
            .map(|(&count, byte)| RemovedByte {
                byte,
                display: std::ascii::escape_default(byte).to_string(),
                count,
            })
            .collect();

        Self {
            file,
            dry_run,
            original_len: filter.bytes_read,
            final_len,
            removed: filter.bytes_removed(),
            removed_by_byte,
        }
    }

    /// True when no byte was removed.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.removed == 0
    }
}
