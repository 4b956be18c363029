//! Pure, side-effect-free views over a roster [`Dataset`].
//!
//! Nothing here mutates the input; filtering produces a new, smaller map
//! and matching borrows records out of the existing one.

use std::collections::BTreeSet;

use crate::models::{Dataset, Player};

/// Positions dropped by the daily cleansing pass: defensive and line
/// positions that never score in standard fantasy formats. The `"None"`
/// entry catches records with no position at all, which compare as the
/// literal string "None" (see [`exclude_by_position`]).
pub const DEFAULT_EXCLUDED_POSITIONS: &[&str] = &[
    "LB", "CB", "SS", "FS", "DT", "DE", "C", "OG", "OT", "OL", "ILB", "OLB", "LS", "NT", "DB",
    "None", "S", "DL",
];

/// The default exclusion set as an owned set, ready to pass to
/// [`exclude_by_position`]. Callers wanting a different policy build their
/// own set; the algorithm takes whatever it is given.
pub fn default_excluded_positions() -> BTreeSet<String> {
    DEFAULT_EXCLUDED_POSITIONS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

/// Which record field a query matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    /// Case-insensitive substring containment against `full_name`.
    FullName,
    /// Case-insensitive exact equality against `position`.
    Position,
    /// Case-insensitive exact equality against `team`.
    Team,
}

/// Return a new dataset containing every player whose `position` is not in
/// `excluded` and none of whose `fantasy_positions` entries is in
/// `excluded`.
///
/// A missing or null `position` compares as the literal string `"None"`,
/// so such players are dropped exactly when `"None"` is in the set. A
/// missing `fantasy_positions` is an empty sequence. Kept records are
/// unchanged.
pub fn exclude_by_position(dataset: &Dataset, excluded: &BTreeSet<String>) -> Dataset {
    dataset
        .iter()
        .filter(|(_, player)| keep(player, excluded))
        .map(|(id, player)| (id.clone(), player.clone()))
        .collect()
}

fn keep(player: &Player, excluded: &BTreeSet<String>) -> bool {
    let position = player.position.as_deref().unwrap_or("None");
    if excluded.contains(position) {
        return false;
    }
    player
        .fantasy_positions
        .iter()
        .flatten()
        .all(|p| !excluded.contains(p.as_str()))
}

/// Return every player matching `query` on `field`, in dataset iteration
/// order. All ties are returned; callers wanting only the first match
/// reduce the result themselves.
pub fn match_by_field<'a>(dataset: &'a Dataset, field: MatchField, query: &str) -> Vec<&'a Player> {
    let needle = query.to_lowercase();
    dataset
        .values()
        .filter(|player| {
            let value = match field {
                MatchField::FullName => player.full_name.as_deref(),
                MatchField::Position => player.position.as_deref(),
                MatchField::Team => player.team.as_deref(),
            };
            match (field, value) {
                (_, None) => false,
                (MatchField::FullName, Some(name)) => name.to_lowercase().contains(&needle),
                (_, Some(value)) => value.eq_ignore_ascii_case(query),
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
