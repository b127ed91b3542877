//! League-wide ratings generation command.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::batch::{run_league_batch, BatchOptions};
use crate::cli::types::Season;
use crate::config::Config;
use crate::nba::{all_teams, NbaClient};
use crate::Result;

pub struct GenerateRatingsParams {
    pub checkpoint: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub pacing_ms: u64,
    pub fresh: bool,
    pub season: Season,
}

/// Rate all 30 franchises sequentially and write the ranked report.
///
/// Ctrl-C is handled gracefully: the in-flight team finishes, the
/// checkpoint is saved, and the run exits so a later invocation resumes
/// where this one stopped.
pub async fn handle_generate_ratings(config: &Config, params: GenerateRatingsParams) -> Result<()> {
    let opts = BatchOptions {
        checkpoint_path: params
            .checkpoint
            .unwrap_or_else(|| config.checkpoint_path()),
        report_path: params.report.unwrap_or_else(|| config.report_path()),
        pacing: Duration::from_millis(params.pacing_ms),
        fresh: params.fresh,
    };
    info!(
        checkpoint = %opts.checkpoint_path.display(),
        season = %params.season,
        "starting ratings batch"
    );

    let provider = NbaClient::new(&config.stats_base_url, params.season)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            flag.store(true, Ordering::SeqCst);
        }
    });

    let outcome = run_league_batch(&provider, all_teams(), &opts, shutdown).await?;
    if !outcome.completed {
        println!("Process interrupted by user.");
    }

    Ok(())
}
