//! Daily-cached snapshot of the Sleeper NFL player roster.
//!
//! The Sleeper roster endpoint returns the complete player map (several
//! megabytes) and Sleeper asks clients to call it at most once per day.
//! [`CacheStore`] enforces that: it keeps the last snapshot on disk next to
//! a calendar-date freshness marker and only goes back to the network when
//! the marker does not match today. The [`filter`] module provides the pure
//! views layered on top: dropping non-fantasy positions and ad-hoc
//! name/position/team lookups.
//!
//! A front-end consumes [`CacheStore::get_dataset`] and the filter
//! functions; nothing in this crate knows about presentation concerns.

pub mod api;
pub mod cache;
pub mod config;
pub mod filter;
pub mod models;

pub use api::{FetchError, RosterSource, SleeperClient};
pub use cache::{CacheError, CacheStore};
pub use config::CacheConfig;
pub use models::{Dataset, Player};
