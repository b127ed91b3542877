//! Durable batch progress: the ratings checkpoint and the ranked report.
//!
//! The checkpoint is rewritten wholesale after every team. That caps how
//! large a league the batch can serve, but it keeps crash recovery
//! trivial: the file on disk is always a complete, valid snapshot.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::warn;

use crate::error::{CourtsideError, Result};


/// One rated team. Serialized as a `[name, score, players]` array, the
/// layout the checkpoint file has always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRatingEntry(String, f64, u32);

impl TeamRatingEntry {
    pub fn new(name: impl Into<String>, score: f64, players: u32) -> Self {
        Self(name.into(), score, players)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn score(&self) -> f64 {
        self.1
    }

    pub fn players(&self) -> u32 {
        self.2
    }

    /// One line of the ranked report.
    pub fn report_line(&self) -> String {
        format!("{}: {:.2} (Num Players: {})", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    pub team_ratings: Vec<TeamRatingEntry>,
    /// Unix seconds of the last save.
    pub timestamp: f64,
}

impl Default for Checkpoint {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkpoint {
    pub fn new() -> Self {
        Self {
            team_ratings: Vec::new(),
            timestamp: now_epoch(),
        }
    }

    /// Load a checkpoint that must exist (the predict path).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CourtsideError::CheckpointMissing {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load previous progress if present and readable, else start empty.
    /// An unreadable file is logged and treated as a fresh start, the
    /// same as no file at all.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(cp) => cp,
            Err(CourtsideError::CheckpointMissing { .. }) => Self::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable checkpoint");
                Self::new()
            }
        }
    }

    /// Names of teams already rated; the batch driver skips these.
    pub fn processed_names(&self) -> HashSet<String> {
        self.team_ratings
            .iter()
            .map(|e| e.name().to_string())
            .collect()
    }

    pub fn push(&mut self, entry: TeamRatingEntry) {
        self.team_ratings.push(entry);
    }

    pub fn sort_by_score_desc(&mut self) {
        self.team_ratings
            .sort_by(|a, b| b.score().total_cmp(&a.score()));
    }

    /// Rewrite the whole file, stamping the save time. Parent directories
    /// are created as needed.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.timestamp = now_epoch();
        let json = serde_json::to_string_pretty(self)?;
        write_string(path, &json)
    }

    /// Ranked report lines in current entry order; call
    /// `sort_by_score_desc` first for the final report.
    pub fn report_lines(&self) -> Vec<String> {
        self.team_ratings.iter().map(|e| e.report_line()).collect()
    }

    pub fn write_report(&self, path: &Path) -> Result<()> {
        let mut body = self.report_lines().join("\n");
        if !body.is_empty() {
            body.push('\n');
        }
        write_string(path, &body)
    }
}

fn now_epoch() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Write a string to a file, creating parent directories first.
fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())?;
    Ok(())
}
