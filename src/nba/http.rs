//! HTTP client for the stats.nba.com endpoints.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::cli::types::{PlayerId, Season};
use crate::error::Result;
use crate::nba::types::{RosterPlayer, StatLine, StatsEnvelope, Team};

/// Upstream data source for rosters and per-player season stats.
///
/// The batch driver only sees this trait, so tests can drive it with a
/// scripted provider instead of the live API.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Current roster for a franchise.
    async fn roster(&self, team: &Team) -> Result<Vec<RosterPlayer>>;

    /// The player's most recent recorded season, or `None` when the
    /// career endpoint has no rows for them.
    async fn latest_season_stats(&self, player: PlayerId) -> Result<Option<StatLine>>;
}

pub struct NbaClient {
    client: Client,
    base_url: String,
    season: Season,
}

impl NbaClient {
    /// The stats endpoints reject requests without browser-looking
    /// headers, so they are set as client defaults.
    pub fn new(base_url: impl Into<String>, season: Season) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
            ),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(REFERER, HeaderValue::from_static("https://stats.nba.com/"));
        headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
        headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            season,
        })
    }

    async fn get_envelope(&self, endpoint: &str, params: &[(&str, String)]) -> Result<StatsEnvelope> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, ?params, "stats request");

        let envelope = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsEnvelope>()
            .await?;

        Ok(envelope)
    }
}

#[async_trait]
impl StatsProvider for NbaClient {
    async fn roster(&self, team: &Team) -> Result<Vec<RosterPlayer>> {
        let envelope = self
            .get_envelope(
                "commonteamroster",
                &[
                    ("TeamID", team.id.to_string()),
                    ("Season", self.season.to_string()),
                ],
            )
            .await?;
        Ok(envelope.roster_players())
    }

    async fn latest_season_stats(&self, player: PlayerId) -> Result<Option<StatLine>> {
        let envelope = self
            .get_envelope(
                "playercareerstats",
                &[
                    ("PlayerID", player.to_string()),
                    ("PerMode", "Totals".to_string()),
                ],
            )
            .await?;
        Ok(envelope.latest_season_line())
    }
}
