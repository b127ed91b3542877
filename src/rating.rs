//! Player rating calculation.

use crate::nba::types::StatLine;


/// Fixed per-category weights applied to a player's latest season line.
/// Turnovers count against the rating.
const WEIGHTS: [(&str, f64); 6] = [
    ("PTS", 1.0),
    ("REB", 0.8),
    ("AST", 0.7),
    ("STL", 1.2),
    ("BLK", 1.1),
    ("TOV", -1.0),
];

/// Weighted sum of a player's stat line, scaled by 10 and rounded to two
/// decimals. Missing categories contribute nothing; a missing line rates
/// as 0. Never fails.
pub fn player_rating(stats: Option<&StatLine>) -> f64 {
    let Some(stats) = stats else {
        return 0.0;
    };

    let raw: f64 = WEIGHTS
        .iter()
        .map(|(category, weight)| stats.get(*category).copied().unwrap_or(0.0) * weight)
        .sum();

    round2(raw * 10.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
