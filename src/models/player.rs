use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The complete keyed roster snapshot at a point in time.
///
/// Keyed by player id. A `BTreeMap` keeps serialization deterministic, so
/// persisting the same snapshot twice produces identical bytes.
pub type Dataset = BTreeMap<String, Player>;

/// One roster entry.
///
/// Only the fields the filter and display layers actually consume are
/// typed; everything else Sleeper sends lands in `extra` and survives a
/// cache round-trip untouched. All fields may be absent or null upstream,
/// so none of them are required here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Primary position code, e.g. "QB". Null for unplaced players.
    #[serde(default)]
    pub position: Option<String>,
    /// Positions the player is eligible for in fantasy lineups.
    #[serde(default)]
    pub fantasy_positions: Option<Vec<String>>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub years_exp: Option<i32>,
    /// `YYYY-MM-DD`, when known.
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Player {
    /// Name for display, with the documented fallback for nameless records.
    /// Default substitution happens here at the presentation boundary, not
    /// in the cache or filter logic.
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Unknown Player".to_string())
    }

    pub fn team_display(&self) -> String {
        self.team.clone().unwrap_or_else(|| "N/A".to_string())
    }

    pub fn position_display(&self) -> String {
        self.position.clone().unwrap_or_else(|| "N/A".to_string())
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.birth_date
            .as_deref()
            .and_then(|dob| NaiveDate::parse_from_str(dob, "%Y-%m-%d").ok())
    }

    pub fn age(&self) -> Option<i32> {
        self.date_of_birth().map(|dob| {
            let today = Utc::now().date_naive();
            let mut age = today.year() - dob.year();
            if today.ordinal() < dob.ordinal() {
                age -= 1;
            }
            age
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sleeper_record() {
        let json = r#"{
            "player_id": "4046",
            "full_name": "Patrick Mahomes",
            "position": "QB",
            "fantasy_positions": ["QB"],
            "team": "KC",
            "years_exp": 8,
            "birth_date": "1995-09-17",
            "status": "Active",
            "number": 15
        }"#;

        let player: Player = serde_json::from_str(json).expect("Failed to parse player JSON");
        assert_eq!(player.full_name.as_deref(), Some("Patrick Mahomes"));
        assert_eq!(player.position.as_deref(), Some("QB"));
        assert_eq!(player.team.as_deref(), Some("KC"));

        // Unrecognized fields are preserved, not dropped
        assert_eq!(
            player.extra.get("status").and_then(|v| v.as_str()),
            Some("Active")
        );
        assert_eq!(player.extra.get("number").and_then(|v| v.as_i64()), Some(15));
    }

    #[test]
    fn test_parse_sparse_record() {
        // Team defenses and practice-squad entries come back with most
        // fields null or missing entirely
        let json = r#"{"player_id": "KC", "position": null, "fantasy_positions": null}"#;
        let player: Player = serde_json::from_str(json).expect("Failed to parse sparse player");
        assert!(player.full_name.is_none());
        assert!(player.position.is_none());
        assert!(player.fantasy_positions.is_none());
    }

    #[test]
    fn test_display_fallbacks() {
        let player: Player = serde_json::from_str("{}").expect("Failed to parse empty player");
        assert_eq!(player.display_name(), "Unknown Player");
        assert_eq!(player.team_display(), "N/A");
        assert_eq!(player.position_display(), "N/A");
        assert!(player.date_of_birth().is_none());
        assert!(player.age().is_none());
    }

    #[test]
    fn test_round_trip_is_deterministic() {
        let json = r#"{"2": {"full_name": "B", "depth_chart_order": 1}, "1": {"full_name": "A"}}"#;
        let dataset: Dataset = serde_json::from_str(json).expect("Failed to parse dataset");

        let first = serde_json::to_string(&dataset).expect("serialize");
        let reparsed: Dataset = serde_json::from_str(&first).expect("reparse");
        let second = serde_json::to_string(&reparsed).expect("serialize again");
        assert_eq!(first, second);
    }
}
