//! Remote roster fetching.
//!
//! This module provides the [`SleeperClient`] for pulling the full NFL
//! player map from the Sleeper API, behind the [`RosterSource`] seam so
//! the cache layer can be exercised without a network.

pub mod client;
pub mod error;

pub use client::SleeperClient;
pub use error::FetchError;

use crate::models::Dataset;

/// Collaborator that can produce a complete roster snapshot.
///
/// [`CacheStore`](crate::CacheStore) refreshes through this seam. A failed
/// fetch must leave no side effects; the store relies on that to keep the
/// previous persisted snapshot authoritative on error.
#[allow(async_fn_in_trait)]
pub trait RosterSource {
    async fn fetch_players(&self) -> Result<Dataset, FetchError>;
}
