//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::Season;

#[derive(Debug, Parser)]
#[clap(name = "courtside", about = "NBA team ratings, matchup odds, and analysis CLI")]
pub struct Courtside {
    /// Log filter when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[clap(long, default_value = "info")]
    pub log_level: String,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rate every franchise from its current roster and write a ranked report.
    ///
    /// Walks all 30 teams sequentially, scoring each rostered player's
    /// latest season. Progress is checkpointed after every team, so an
    /// interrupted run resumes where it left off.
    GenerateRatings {
        /// Checkpoint file (default: processed_teams.json under the data dir).
        #[clap(long)]
        checkpoint: Option<PathBuf>,

        /// Ranked report file (default: team_ratings.txt under the data dir).
        #[clap(long)]
        report: Option<PathBuf>,

        /// Delay before each player-stats request, in milliseconds.
        #[clap(long, default_value_t = 500)]
        pacing_ms: u64,

        /// Ignore any existing checkpoint and rate every team from scratch.
        #[clap(long)]
        fresh: bool,

        /// Season to rate rosters for (e.g. 2024 or 2024-25).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,
    },

    /// Resolve a matchup, compute fractional odds, and print an analysis.
    Predict {
        /// Exactly two team names or fragments: `-t Bulls -t Raptors`.
        #[clap(long, short = 't', value_delimiter = ',')]
        teams: Option<Vec<String>>,

        /// Sportradar game id to pull the matchup from the schedule.
        #[clap(long)]
        game_id: Option<String>,

        /// Date (YYYY-MM-DD) whose first scheduled game is predicted.
        #[clap(long)]
        date: Option<NaiveDate>,

        /// Checkpoint file written by generate-ratings.
        #[clap(long)]
        checkpoint: Option<PathBuf>,

        /// Print the resolved matchup and odds without calling the
        /// language-model analysis service.
        #[clap(long)]
        no_narrative: bool,
    },
}
