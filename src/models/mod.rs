//! Domain models for roster records.
//!
//! A [`Dataset`] is the complete keyed player map as returned by the
//! Sleeper API and as persisted in the cache. Records are best-effort
//! typed: every field is optional and unrecognized upstream fields are
//! preserved verbatim so a cache round-trip loses nothing.

pub mod player;

pub use player::{Dataset, Player};
