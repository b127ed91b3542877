//! Error types for the courtside CLI

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CourtsideError>;

#[derive(Error, Debug)]
pub enum CourtsideError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("no ratings checkpoint at {} - run `courtside generate-ratings` first", path.display())]
    CheckpointMissing { path: PathBuf },

    #[error("expected exactly 2 teams, got {count}")]
    BadTeamCount { count: usize },

    #[error("invalid season: {value} (expected e.g. 2024 or 2024-25)")]
    InvalidSeason { value: String },

    #[error("could not resolve a matchup for tokens: {}", tokens.join(", "))]
    MatchupNotResolvable { tokens: Vec<String> },

    #[error("provider returned no usable data for {subject}")]
    NoData { subject: String },

    #[error("narrative service returned an unusable response: {message}")]
    BadNarrative { message: String },
}
