//! Process-lifetime configuration.
//!
//! Everything here is read once at startup from the environment and never
//! mutated; collaborators borrow what they need at construction time.

use std::env;
use std::path::PathBuf;

use crate::error::{CourtsideError, Result};
use crate::{DATA_DIR_ENV_VAR, OPENAI_KEY_ENV_VAR, SPORTRADAR_KEY_ENV_VAR};

/// Base path for the NBA stats API.
pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Base path for the Sportradar NBA trial API (season schedules).
pub const SPORTRADAR_BASE_URL: &str = "https://api.sportradar.com/nba/trial/v8/en";

/// Default OpenAI-compatible chat completions endpoint.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

const CHECKPOINT_FILE: &str = "processed_teams.json";
const REPORT_FILE: &str = "team_ratings.txt";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the checkpoint and report files.
    pub data_dir: PathBuf,
    pub stats_base_url: String,
    pub schedule_base_url: String,
    pub openai_base_url: String,
    pub openai_model: String,
    /// Unset keys only fail when the feature needing them is used.
    pub sportradar_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: default_data_dir(),
            stats_base_url: NBA_STATS_BASE_URL.to_string(),
            schedule_base_url: SPORTRADAR_BASE_URL.to_string(),
            openai_base_url: OPENAI_BASE_URL.to_string(),
            openai_model: "gpt-4o".to_string(),
            sportradar_api_key: env::var(SPORTRADAR_KEY_ENV_VAR).ok(),
            openai_api_key: env::var(OPENAI_KEY_ENV_VAR).ok(),
        }
    }

    pub fn checkpoint_path(&self) -> PathBuf {
        self.data_dir.join(CHECKPOINT_FILE)
    }

    pub fn report_path(&self) -> PathBuf {
        self.data_dir.join(REPORT_FILE)
    }

    pub fn sportradar_api_key(&self) -> Result<&str> {
        self.sportradar_api_key
            .as_deref()
            .ok_or_else(|| CourtsideError::MissingApiKey {
                env_var: SPORTRADAR_KEY_ENV_VAR.to_string(),
            })
    }

    pub fn openai_api_key(&self) -> Result<&str> {
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| CourtsideError::MissingApiKey {
                env_var: OPENAI_KEY_ENV_VAR.to_string(),
            })
    }
}

/// Path: `$COURTSIDE_DATA_DIR`, else `~/.local/share/courtside` (platform
/// equivalent), else the working directory.
fn default_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|base| base.join("courtside"))
        .unwrap_or_else(|| PathBuf::from("."))
}
