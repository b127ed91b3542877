//! Matchup prediction command: resolve two teams, compute odds, and ask
//! the narrative service for an analysis paragraph.

use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::warn;

use crate::checkpoint::Checkpoint;
use crate::cli::types::Season;
use crate::config::Config;
use crate::error::CourtsideError;
use crate::narrative::{Narrator, OpenAiNarrator};
use crate::nba::ScheduleClient;
use crate::odds::fractional_odds;
use crate::resolver::{self, ResolvedMatchup};
use crate::Result;

/// Teams used when neither explicit tokens nor a schedule lookup pan
/// out, so the command stays usable offline.
const DEFAULT_TOKENS: [&str; 2] = ["Bulls", "Raptors"];

pub struct PredictParams {
    pub teams: Option<Vec<String>>,
    pub game_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub checkpoint: Option<PathBuf>,
    pub no_narrative: bool,
}

pub async fn handle_predict(config: &Config, params: PredictParams) -> Result<()> {
    let path = params
        .checkpoint
        .clone()
        .unwrap_or_else(|| config.checkpoint_path());
    let checkpoint = Checkpoint::load(&path)?;

    let tokens = matchup_tokens(config, &params).await?;
    let (matchup, odds) = predict_matchup(&checkpoint, &tokens)?;

    println!("Matchup: {}", matchup.describe());
    println!("Odds: {odds}");

    if !params.no_narrative {
        let narrator = OpenAiNarrator::new(
            &config.openai_base_url,
            config.openai_api_key()?,
            &config.openai_model,
        )?;
        let analysis = narrator.explain(&matchup.describe(), &odds).await?;
        println!("\n{analysis}");
    }

    Ok(())
}

/// Resolve the matchup against the checkpoint and price it.
pub fn predict_matchup(
    checkpoint: &Checkpoint,
    tokens: &[String],
) -> Result<(ResolvedMatchup, String)> {
    let matchup = resolver::resolve(checkpoint, tokens)?;
    let odds = fractional_odds(matchup.first.score(), matchup.second.score());
    Ok((matchup, odds))
}

/// Pick the two team tokens for this request.
///
/// Explicit `--teams` wins and must name exactly two. Otherwise the
/// Sportradar schedule is consulted for the game id or date; a failed or
/// empty lookup falls back to the default pair with a warning rather
/// than aborting.
async fn matchup_tokens(config: &Config, params: &PredictParams) -> Result<Vec<String>> {
    if let Some(teams) = &params.teams {
        if teams.len() != 2 {
            return Err(CourtsideError::BadTeamCount { count: teams.len() });
        }
        return Ok(teams.clone());
    }

    match schedule_lookup(config, params).await {
        Ok(Some([home, away])) => Ok(vec![home, away]),
        Ok(None) => {
            warn!("no scheduled game matched the request, using default teams");
            println!("Warning: Using default teams because the schedule lookup found no game.");
            Ok(DEFAULT_TOKENS.map(str::to_string).to_vec())
        }
        Err(e) => {
            warn!(error = %e, "schedule lookup failed, using default teams");
            println!("Warning: Using default teams because the schedule request failed.");
            Ok(DEFAULT_TOKENS.map(str::to_string).to_vec())
        }
    }
}

async fn schedule_lookup(config: &Config, params: &PredictParams) -> Result<Option<[String; 2]>> {
    let client = ScheduleClient::new(
        &config.schedule_base_url,
        config.sportradar_api_key()?,
        Season::default(),
    )?;
    client
        .matchup_teams(params.game_id.as_deref(), params.date)
        .await
}
