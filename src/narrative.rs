//! Matchup analysis via an OpenAI-compatible chat service.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{CourtsideError, Result};

const PROMPT_TEMPLATE: &str = "\
You are a statistical analyst for the NBA. Based on the following team ratings and the given \
team matchup, as well as the odds given, return your thoughts on the matchup. \
Mention which team has the higher team rating, and why the odds are unusual or not given the \
history (that you have access to) of the teams matchups and how a new roster could affect (or \
not) the historical outcome. \
IMPORTANT: RETURN NO MORE THAN A SINGLE PARAGRAPH OF ANALYSIS, CONSISTING OF, AT MOST, 4 \
SENTENCES. DO NOT TALK ABOUT THE BOOKMAKERS, THESE ODDS ARE ONES CALCULATED WITHIN THE PROGRAM

The matchup is: {matchup}
The odds are: {odds}
";

/// Free-text analysis of a resolved matchup. Expected to stay within one
/// paragraph of at most four sentences; the prompt enforces that, not us.
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn explain(&self, matchup: &str, odds: &str) -> Result<String>;
}

pub struct OpenAiNarrator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiNarrator {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

fn render_prompt(matchup: &str, odds: &str) -> String {
    PROMPT_TEMPLATE
        .replace("{matchup}", matchup)
        .replace("{odds}", odds)
}

#[async_trait]
impl Narrator for OpenAiNarrator {
    async fn explain(&self, matchup: &str, odds: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: render_prompt(matchup, odds),
            }],
        };

        debug!(model = %self.model, "requesting matchup analysis");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| CourtsideError::BadNarrative {
                message: "response contained no choices".to_string(),
            })?;

        Ok(content)
    }
}
