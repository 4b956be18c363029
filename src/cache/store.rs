use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{FetchError, RosterSource};
use crate::config::CacheConfig;
use crate::models::Dataset;

/// Date format of the freshness marker file.
const MARKER_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum CacheError {
    /// The remote refresh failed. Persisted state is untouched.
    #[error("remote fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The persisted snapshot exists per the marker but cannot be read or
    /// parsed. Never silently degraded to an empty dataset.
    #[error("cache file {path} is corrupt or unreadable")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to write {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Owns the on-disk roster snapshot and its freshness marker.
///
/// The snapshot and marker are one logical unit: on refresh the dataset
/// file is written before the marker, so a crash between the two writes
/// can never leave a marker claiming freshness for data that was not
/// persisted.
pub struct CacheStore {
    config: CacheConfig,
}

impl CacheStore {
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        for path in [&config.dataset_path, &config.marker_path] {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| CacheError::Persist {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(Self { config })
    }

    /// Return the current roster, refreshing from `source` if the snapshot
    /// was not persisted today.
    ///
    /// Performs at most one remote fetch per call, with no retry. On fetch
    /// failure the previous persisted state is left intact.
    pub async fn get_dataset<S: RosterSource>(&self, source: &S) -> Result<Dataset, CacheError> {
        let today = Local::now().date_naive();

        if self.is_expired(today) {
            info!("Cache expired, fetching roster");
            let players = source.fetch_players().await?;
            // Dataset first, marker second
            self.write_dataset(&players)?;
            self.write_marker(today)?;
            info!(count = players.len(), "Roster refreshed");
            Ok(players)
        } else {
            debug!(path = %self.config.dataset_path.display(), "Using cached roster");
            self.read_dataset()
        }
    }

    /// Overwrite the persisted snapshot unconditionally, e.g. to persist a
    /// cleansed roster as the new baseline. The freshness marker is not
    /// touched.
    pub fn save_dataset(&self, players: &Dataset) -> Result<(), CacheError> {
        self.write_dataset(players)?;
        info!(
            count = players.len(),
            path = %self.config.dataset_path.display(),
            "Saved roster"
        );
        Ok(())
    }

    /// Date of the last successful refresh, if one is recorded.
    pub fn last_refresh(&self) -> Option<NaiveDate> {
        self.read_marker()
    }

    fn is_expired(&self, today: NaiveDate) -> bool {
        match self.read_marker() {
            // Any mismatch counts as expired, future dates included
            Some(marker) => marker != today,
            None => true,
        }
    }

    fn read_marker(&self) -> Option<NaiveDate> {
        let raw = match fs::read_to_string(&self.config.marker_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(
                    path = %self.config.marker_path.display(),
                    error = %e,
                    "Failed to read freshness marker, treating cache as expired"
                );
                return None;
            }
        };
        match NaiveDate::parse_from_str(raw.trim(), MARKER_FORMAT) {
            Ok(date) => Some(date),
            Err(e) => {
                warn!(
                    path = %self.config.marker_path.display(),
                    error = %e,
                    "Unparsable freshness marker, treating cache as expired"
                );
                None
            }
        }
    }

    fn write_marker(&self, date: NaiveDate) -> Result<(), CacheError> {
        write_atomic(
            &self.config.marker_path,
            date.format(MARKER_FORMAT).to_string().as_bytes(),
        )
    }

    fn read_dataset(&self) -> Result<Dataset, CacheError> {
        let path = &self.config.dataset_path;
        let contents = fs::read_to_string(path).map_err(|e| CacheError::Corrupt {
            path: path.clone(),
            source: Box::new(e),
        })?;
        serde_json::from_str(&contents).map_err(|e| CacheError::Corrupt {
            path: path.clone(),
            source: Box::new(e),
        })
    }

    fn write_dataset(&self, players: &Dataset) -> Result<(), CacheError> {
        let contents = serde_json::to_vec(players).map_err(|e| CacheError::Persist {
            path: self.config.dataset_path.clone(),
            source: io::Error::other(e),
        })?;
        write_atomic(&self.config.dataset_path, &contents)
    }
}

/// Write through a sibling temp file and rename, so a crash mid-write
/// never leaves a truncated file at the final path.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), CacheError> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents).map_err(|source| CacheError::Persist {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| CacheError::Persist {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Tests
// ============================================================================
