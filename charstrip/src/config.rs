use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[charstrip]` section.
    pub charstrip: CharstripConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for charstrip.
pub struct CharstripConfig {
    /// Bytes per read/write call. Zero is ignored.
    pub chunk_size: Option<usize>,
    /// Directory in which the unnamed scratch file is created.
    pub scratch_dir: Option<PathBuf>,
    /// Print `[VERBOSE]` diagnostics.
    pub verbose: Option<bool>,
    /// Print the removal summary table.
    pub summary: Option<bool>,
    /// Show a progress bar.
    pub progress: Option<bool>,
}

impl CharstripConfig {
    /// Configured chunk size, or the default when unset or zero.
    #[must_use]
    pub fn effective_chunk_size(&self) -> usize {
        match self.chunk_size {
            Some(n) if n > 0 => n.min(MAX_CHUNK_SIZE),
            _ => DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// A file path starts the search in its parent directory. Unreadable or
    /// malformed files are skipped.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() || (!current.exists() && current.parent().is_some()) {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_path_no_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.charstrip.chunk_size.is_none());
        assert!(config.config_file_path.is_none());
        assert_eq!(config.charstrip.effective_chunk_size(), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_load_from_path_charstrip_toml() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(
            file,
            r"[charstrip]
chunk_size = 512
verbose = true
"
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(config.charstrip.chunk_size, Some(512));
        assert_eq!(config.charstrip.verbose, Some(true));
        assert_eq!(config.charstrip.effective_chunk_size(), 512);
        assert_eq!(
            config.config_file_path,
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("raw");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[charstrip]\nsummary = true\n",
        )
        .unwrap();

        let config = Config::load_from_path(&nested);
        assert_eq!(config.charstrip.summary, Some(true));
    }

    #[test]
    fn test_load_from_file_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[charstrip]\nscratch_dir = \"/var/tmp\"\n",
        )
        .unwrap();
        let target = dir.path().join("input.txt");
        std::fs::write(&target, "x").unwrap();

        let config = Config::load_from_path(&target);
        assert_eq!(
            config.charstrip.scratch_dir,
            Some(PathBuf::from("/var/tmp"))
        );
    }

    #[test]
    fn test_zero_chunk_size_ignored() {
        let config: Config = toml::from_str("[charstrip]\nchunk_size = 0\n").unwrap();
        assert_eq!(config.charstrip.effective_chunk_size(), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_huge_chunk_size_clamped() {
        let config: Config = toml::from_str("[charstrip]\nchunk_size = 999999999999\n").unwrap();
        assert_eq!(config.charstrip.effective_chunk_size(), MAX_CHUNK_SIZE);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "[charstrip\nchunk").unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_missing_target_searches_its_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "[charstrip]\nprogress = true\n").unwrap();

        let config = Config::load_from_path(&dir.path().join("not-yet-there.txt"));
        assert_eq!(config.charstrip.progress, Some(true));
    }
}
