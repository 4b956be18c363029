//! Local caching of the roster snapshot.
//!
//! This module provides the [`CacheStore`] that decides, per request,
//! whether the persisted snapshot is still usable or a remote refresh is
//! needed. Freshness is whole-calendar-day: a snapshot refreshed today is
//! served from disk; anything else triggers exactly one fetch.

pub mod store;

pub use store::{CacheError, CacheStore};
