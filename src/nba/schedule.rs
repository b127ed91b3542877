//! Sportradar season-schedule lookups.
//!
//! Used by the predict path to turn a game id or date into a pair of
//! team names when the caller does not supply them directly.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::cli::types::Season;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct ScheduleEnvelope {
    #[serde(default)]
    games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledGame {
    pub id: String,
    #[serde(default)]
    pub status: String,
    /// Kickoff in RFC 3339, e.g. `2025-01-15T00:00:00Z`.
    #[serde(default)]
    pub scheduled: String,
    pub home: ScheduledTeam,
    pub away: ScheduledTeam,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledTeam {
    pub name: String,
    #[serde(default)]
    pub alias: String,
}

impl ScheduledGame {
    fn on_date(&self, date: NaiveDate) -> bool {
        // Compare the calendar-date prefix of the scheduled timestamp.
        self.scheduled
            .split('T')
            .next()
            .is_some_and(|d| d == date.format("%Y-%m-%d").to_string())
    }
}

pub struct ScheduleClient {
    client: Client,
    base_url: String,
    api_key: String,
    season: Season,
}

impl ScheduleClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, season: Season) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            season,
        })
    }

    /// Regular-season games, optionally narrowed to one date. The trial
    /// API only exposes a whole-season schedule, so filtering happens
    /// client-side.
    pub async fn games(&self, date: Option<NaiveDate>) -> Result<Vec<ScheduledGame>> {
        let url = format!(
            "{}/games/{}/REG/schedule.json",
            self.base_url,
            self.season.start_year()
        );
        debug!(%url, "schedule request");

        let envelope = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<ScheduleEnvelope>()
            .await?;

        let games = match date {
            Some(d) => envelope.games.into_iter().filter(|g| g.on_date(d)).collect(),
            None => envelope.games,
        };
        Ok(games)
    }

    /// Team-name pair for a specific game, or for the first game of the
    /// day when no id is given. `None` when nothing matches.
    pub async fn matchup_teams(
        &self,
        game_id: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Result<Option<[String; 2]>> {
        let games = self.games(date).await?;

        let game = match game_id {
            Some(id) => games.iter().find(|g| g.id == id),
            None => games.first(),
        };

        Ok(game.map(|g| [g.home.name.clone(), g.away.name.clone()]))
    }
}
