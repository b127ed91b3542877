//! Entry point: parse CLI, set up logging, dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use courtside::{
    cli::{Commands, Courtside},
    commands::{
        generate_ratings::{handle_generate_ratings, GenerateRatingsParams},
        predict::{handle_predict, PredictParams},
    },
    Config,
};

#[tokio::main]
async fn main() -> Result<()> {
    let app = Courtside::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&app.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();

    match app.command {
        Commands::GenerateRatings {
            checkpoint,
            report,
            pacing_ms,
            fresh,
            season,
        } => {
            handle_generate_ratings(
                &config,
                GenerateRatingsParams {
                    checkpoint,
                    report,
                    pacing_ms,
                    fresh,
                    season,
                },
            )
            .await?
        }

        Commands::Predict {
            teams,
            game_id,
            date,
            checkpoint,
            no_narrative,
        } => {
            handle_predict(
                &config,
                PredictParams {
                    teams,
                    game_id,
                    date,
                    checkpoint,
                    no_narrative,
                },
            )
            .await?
        }
    }

    Ok(())
}
