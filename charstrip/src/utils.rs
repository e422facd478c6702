//! Small helpers shared across the crate.

use std::ffi::OsString;
use std::path::Path;

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use charstrip::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\notes\\todo.txt")), "notes/todo.txt");
/// assert_eq!(normalize_display_path(Path::new("./src/data.csv")), "src/data.csv");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Raw bytes of a command-line argument.
///
/// On Unix this is the exact byte string the process received. Elsewhere
/// it is the platform's self-synchronizing encoding, which matches UTF-8
/// for valid text.
#[must_use]
pub fn os_arg_bytes(arg: OsString) -> Vec<u8> {
    arg.into_encoded_bytes()
}
