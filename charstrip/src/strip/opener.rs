//! Opens the target file and allocates the unnamed scratch file.

use super::error::StripError;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// The target file and its scratch buffer, owned together.
///
/// Both handles close when this value is dropped, on every exit path.
#[derive(Debug)]
pub struct TargetHandles {
    /// The file being filtered.
    pub target: File,
    /// Anonymous scratch file holding the filtered bytes.
    pub scratch: File,
    /// Path the target was opened from.
    pub path: PathBuf,
}

/// Open `path` for reading and writing and create a scratch file.
///
/// The target must already exist. The scratch file has no name in the
/// filesystem and is reclaimed by the OS once closed.
///
/// # Errors
///
/// Returns [`StripError::OpenTarget`] if the target cannot be opened, or
/// [`StripError::CreateScratch`] if no scratch file can be created.
pub fn open(path: &Path, scratch_dir: Option<&Path>) -> Result<TargetHandles, StripError> {
    let target = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| StripError::OpenTarget {
            path: path.to_path_buf(),
            source,
        })?;
    finish(target, path, scratch_dir)
}

/// Open `path` read-only, for runs that must not modify the target.
///
/// # Errors
///
/// Same as [`open`].
pub fn open_read_only(
    path: &Path,
    scratch_dir: Option<&Path>,
) -> Result<TargetHandles, StripError> {
    let target = File::open(path).map_err(|source| StripError::OpenTarget {
        path: path.to_path_buf(),
        source,
    })?;
    finish(target, path, scratch_dir)
}

fn finish(
    target: File,
    path: &Path,
    scratch_dir: Option<&Path>,
) -> Result<TargetHandles, StripError> {
    let scratch = match scratch_dir {
        Some(dir) => tempfile::tempfile_in(dir),
        None => tempfile::tempfile(),
    }
    .map_err(StripError::CreateScratch)?;

    Ok(TargetHandles {
        target,
        scratch,
        path: path.to_path_buf(),
    })
}
