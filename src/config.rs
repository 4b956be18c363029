//! Cache location configuration.
//!
//! The two backing files (roster JSON and freshness marker) are explicit
//! configuration rather than module constants, so multiple stores with
//! different backing paths can coexist and tests can point a store at a
//! throwaway directory.

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Application name used for the default cache directory path
const APP_NAME: &str = "rostercache";

/// File name for the cached roster snapshot
const DATASET_FILE: &str = "players_data.json";

/// File name for the freshness marker
const MARKER_FILE: &str = "cache_date.txt";

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// JSON file holding the last persisted roster snapshot.
    pub dataset_path: PathBuf,
    /// Text file holding the `YYYY-MM-DD` date of the last refresh.
    pub marker_path: PathBuf,
}

impl CacheConfig {
    /// Place both cache files under `dir` using the standard file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            dataset_path: dir.join(DATASET_FILE),
            marker_path: dir.join(MARKER_FILE),
        }
    }

    /// Platform cache directory, e.g. `~/.cache/rostercache` on Linux.
    pub fn default_location() -> Result<Self> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(Self::in_dir(cache_dir.join(APP_NAME)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_joins_standard_names() {
        let config = CacheConfig::in_dir("/tmp/roster");
        assert_eq!(
            config.dataset_path,
            PathBuf::from("/tmp/roster/players_data.json")
        );
        assert_eq!(config.marker_path, PathBuf::from("/tmp/roster/cache_date.txt"));
    }
}
