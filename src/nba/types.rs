use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::cli::types::{PlayerId, TeamId};


/// One player's stat categories for a season, keyed by the API's header
/// names (`PTS`, `REB`, `AST`, ...). Non-numeric cells are dropped.
pub type StatLine = BTreeMap<String, f64>;

/// An NBA franchise from the embedded static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub full_name: &'static str,
    pub abbreviation: &'static str,
}

/// The roster columns consumed from `commonteamroster`.
#[derive(Debug, Clone, Serialize)]
pub struct RosterPlayer {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub height: String,
    pub weight: String,
}

/// Top-level envelope every stats.nba.com endpoint responds with.
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

/// A tabular result set: column headers plus rows of loosely-typed cells.
#[derive(Debug, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Zip headers with one row, keeping only numeric cells.
    fn row_to_stat_line(&self, row: &[Value]) -> StatLine {
        self.headers
            .iter()
            .zip(row.iter())
            .filter_map(|(h, v)| v.as_f64().map(|n| (h.clone(), n)))
            .collect()
    }
}

impl StatsEnvelope {
    /// The last row of the first result set as a stat line; the career
    /// endpoint lists seasons oldest-first, so the last row is the most
    /// recent season. `None` when the player has no recorded rows.
    pub fn latest_season_line(&self) -> Option<StatLine> {
        let set = self.result_sets.first()?;
        let row = set.row_set.last()?;
        Some(set.row_to_stat_line(row))
    }

    /// Project the roster columns out of the first result set.
    /// Rows missing a player id are skipped.
    pub fn roster_players(&self) -> Vec<RosterPlayer> {
        let Some(set) = self.result_sets.first() else {
            return Vec::new();
        };
        let Some(id_col) = set.column("PLAYER_ID") else {
            return Vec::new();
        };
        let name_col = set.column("PLAYER");
        let position_col = set.column("POSITION");
        let height_col = set.column("HEIGHT");
        let weight_col = set.column("WEIGHT");

        let cell_string = |row: &[Value], col: Option<usize>| {
            col.and_then(|i| row.get(i)).map_or_else(String::new, |v| {
                match v {
                    Value::String(s) => s.clone(),
                    // WEIGHT sometimes arrives as a bare number
                    Value::Number(n) => n.to_string(),
                    _ => String::new(),
                }
            })
        };

        set.row_set
            .iter()
            .filter_map(|row| {
                let id = row.get(id_col)?.as_u64()?;
                Some(RosterPlayer {
                    id: PlayerId::new(id),
                    name: cell_string(row, name_col),
                    position: cell_string(row, position_col),
                    height: cell_string(row, height_col),
                    weight: cell_string(row, weight_col),
                })
            })
            .collect()
    }
}
