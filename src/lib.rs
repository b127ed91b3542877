//! Courtside: NBA team ratings, matchup odds, and analysis
//!
//! A CLI and library that scores every NBA franchise from its current
//! roster's player statistics, converts a pair of team scores into
//! fractional betting odds, and asks a language-model service for a
//! short matchup analysis.
//!
//! ## How it fits together
//!
//! - **Ratings batch**: walks all 30 teams sequentially, rating each
//!   rostered player's latest season with a fixed linear weighting.
//!   Progress is checkpointed after every team; interrupted runs resume.
//! - **Prediction**: loads the checkpoint, resolves two (possibly
//!   partial) team names against it, prices the matchup with a logistic
//!   odds transform, and renders an analysis paragraph.
//!
//! ## Quick start
//!
//! ```bash
//! courtside generate-ratings            # long-running, resumable
//! courtside predict -t Bulls -t Raptors
//! ```
//!
//! ## Environment configuration
//!
//! ```bash
//! export OPENAI_API_KEY=...      # matchup analysis
//! export SPORTRADAR_API_KEY=...  # schedule lookups for `predict --date`
//! export COURTSIDE_DATA_DIR=...  # checkpoint/report location (optional)
//! ```

pub mod batch;
pub mod checkpoint;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod narrative;
pub mod nba;
pub mod odds;
pub mod rating;
pub mod resolver;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, TeamRatingEntry};
pub use cli::types::{PlayerId, Season, TeamId};
pub use config::Config;
pub use error::{CourtsideError, Result};

pub const SPORTRADAR_KEY_ENV_VAR: &str = "SPORTRADAR_API_KEY";
pub const OPENAI_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
pub const DATA_DIR_ENV_VAR: &str = "COURTSIDE_DATA_DIR";
