//! League-wide ratings batch: roster aggregation and the resumable
//! per-team driver.
//!
//! The upstream stats API is rate limited, so everything here is
//! strictly sequential: one team at a time, one player at a time, with a
//! pacing sleep before every stats request. Progress is saved to the
//! checkpoint after every team, so at most one team's work can be lost.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::checkpoint::{Checkpoint, TeamRatingEntry};
use crate::error::Result;
use crate::nba::{StatsProvider, Team};
use crate::rating::player_rating;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub checkpoint_path: PathBuf,
    pub report_path: PathBuf,
    /// Wait before each player-stats request.
    pub pacing: Duration,
    /// Ignore any existing checkpoint and start over.
    pub fresh: bool,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub checkpoint: Checkpoint,
    /// False when a shutdown request stopped the run early; the
    /// checkpoint is saved but unsorted, so a later run can resume.
    pub completed: bool,
    /// Teams rated in this run (excludes skipped and no-data teams).
    pub rated: usize,
}

/// Rate one team's roster: fetch players, rate each latest season, sum.
///
/// `None` means "no data" - a failed or empty roster fetch, or zero
/// players with a recorded season. Individual player failures are
/// logged and skipped; they never fail the team.
pub async fn rate_team<P: StatsProvider + ?Sized>(
    provider: &P,
    team: &Team,
    pacing: Duration,
) -> Option<TeamRatingEntry> {
    let roster = match provider.roster(team).await {
        Ok(roster) => roster,
        Err(e) => {
            warn!(team = team.full_name, error = %e, "roster fetch failed");
            return None;
        }
    };

    if roster.is_empty() {
        warn!(team = team.full_name, "roster came back empty");
        return None;
    }

    let mut total = 0.0;
    let mut contributing = 0u32;

    for player in &roster {
        sleep(pacing).await;
        match provider.latest_season_stats(player.id).await {
            Ok(Some(stats)) => {
                total += player_rating(Some(&stats));
                contributing += 1;
            }
            Ok(None) => {
                debug!(player = %player.name, "no recorded season, skipping");
            }
            Err(e) => {
                warn!(player = %player.name, error = %e, "stats fetch failed, skipping");
            }
        }
    }

    if contributing == 0 {
        return None;
    }
    Some(TeamRatingEntry::new(team.full_name, total, contributing))
}

/// Run the ratings batch over `teams` in the given order.
///
/// Resumes from the checkpoint file when present. The `shutdown` flag is
/// checked before each team; once set, the driver saves and returns with
/// `completed == false` instead of sorting and reporting.
pub async fn run_league_batch<P: StatsProvider + ?Sized>(
    provider: &P,
    teams: &[Team],
    opts: &BatchOptions,
    shutdown: Arc<AtomicBool>,
) -> Result<BatchOutcome> {
    let mut checkpoint = if opts.fresh {
        Checkpoint::new()
    } else {
        Checkpoint::load_or_empty(&opts.checkpoint_path)
    };
    let mut processed = checkpoint.processed_names();
    if !processed.is_empty() {
        info!(teams = processed.len(), "resuming from checkpoint");
    }

    let mut rated = 0usize;
    let mut interrupted = false;

    for team in teams {
        if shutdown.load(Ordering::SeqCst) {
            interrupted = true;
            break;
        }

        if processed.contains(team.full_name) {
            println!("Skipping already processed team: {}", team.full_name);
            continue;
        }

        println!("Processing {}...", team.full_name);
        match rate_team(provider, team, opts.pacing).await {
            Some(entry) => {
                processed.insert(entry.name().to_string());
                checkpoint.push(entry);
                rated += 1;
                println!("{} processed successfully", team.full_name);
            }
            None => {
                println!("No player stats found for {}", team.full_name);
            }
        }

        // Save after every team, whatever happened to it.
        save_best_effort(&mut checkpoint, &opts.checkpoint_path);
    }

    if interrupted {
        println!("Shutdown requested; progress saved.");
        save_best_effort(&mut checkpoint, &opts.checkpoint_path);
        return Ok(BatchOutcome {
            checkpoint,
            completed: false,
            rated,
        });
    }

    // Final pass: rank, report, and persist the sorted order.
    checkpoint.sort_by_score_desc();
    save_best_effort(&mut checkpoint, &opts.checkpoint_path);
    if let Err(e) = checkpoint.write_report(&opts.report_path) {
        warn!(path = %opts.report_path.display(), error = %e, "report write failed");
    }
    for line in checkpoint.report_lines() {
        println!("{line}");
    }
    println!(
        "Team scores saved to {}. Processed {} teams.",
        opts.report_path.display(),
        checkpoint.team_ratings.len()
    );

    Ok(BatchOutcome {
        checkpoint,
        completed: true,
        rated,
    })
}

/// Checkpoint persistence is best effort: a failed save costs at most
/// one team on the next resume and must not abort the batch.
fn save_best_effort(checkpoint: &mut Checkpoint, path: &Path) {
    if let Err(e) = checkpoint.save(path) {
        warn!(path = %path.display(), error = %e, "checkpoint save failed");
    }
}
