/// Name of the per-project configuration file.
pub const CONFIG_FILENAME: &str = ".charstrip.toml";

/// Bytes moved per read/write call when nothing else is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Upper bound on the chunk size; larger requests are clamped.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Program name used in usage and version output.
pub const PROGRAM_NAME: &str = "charstrip";

/// Exit status for usage errors and fatal I/O failures.
pub const EXIT_FAILURE: i32 = 1;
