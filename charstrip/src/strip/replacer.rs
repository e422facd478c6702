//! Copies the scratch file back over the target and truncates it.
//!
//! The overwrite happens directly on the target handle. A failure partway
//! through the copy or the truncate leaves the target partially rewritten;
//! every error from this module reports that via
//! [`StripError::target_may_be_modified`].

use super::error::StripError;
use std::fs::File;
use std::io::{self, Cursor, ErrorKind, Read, Seek, SeekFrom, Write};

/// Storage whose length can be cut down to a given size.
pub trait Truncate {
    /// Set the length to exactly `len` bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
}

impl Truncate for File {
    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

impl Truncate for Cursor<Vec<u8>> {
    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len).map_err(|e| io::Error::new(ErrorKind::InvalidInput, e))?;
        self.get_mut().resize(len, 0);
        Ok(())
    }
}

impl<T: Truncate + ?Sized> Truncate for &mut T {
    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        (**self).truncate_to(len)
    }
}

/// Overwrite `target` with the full contents of `scratch`.
///
/// Steps, in order: measure the scratch length, rewind both sides, copy in
/// `chunk_size` pieces, flush the target, truncate it to the measured
/// length. Returns the final length of the target.
///
/// # Errors
///
/// One of [`StripError::ScratchSize`], [`StripError::Rewind`],
/// [`StripError::Copy`], [`StripError::Flush`] or [`StripError::Truncate`],
/// named after the step that failed.
pub fn replace_contents<S, T>(
    mut scratch: S,
    mut target: T,
    chunk_size: usize,
) -> Result<u64, StripError>
where
    S: Read + Seek,
    T: Write + Seek + Truncate,
{
    let len = scratch
        .seek(SeekFrom::End(0))
        .map_err(StripError::ScratchSize)?;

    target.rewind().map_err(StripError::Rewind)?;
    scratch.rewind().map_err(StripError::Rewind)?;

    copy_chunks(&mut scratch, &mut target, chunk_size).map_err(StripError::Copy)?;

    target.flush().map_err(StripError::Flush)?;
    target.truncate_to(len).map_err(StripError::Truncate)?;
    Ok(len)
}

fn copy_chunks<R: Read, W: Write>(src: &mut R, dest: &mut W, chunk_size: usize) -> io::Result<u64> {
    let mut buffer = vec![0u8; chunk_size.max(1)];
    let mut total = 0u64;
    loop {
        let n = match src.read(&mut buffer) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        dest.write_all(&buffer[..n])?;
        total += n as u64;
    }
}
