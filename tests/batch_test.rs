//! Integration tests for the ratings batch: aggregation, checkpointing,
//! resume, and graceful shutdown, driven by a scripted provider.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

use courtside::batch::{rate_team, run_league_batch, BatchOptions};
use courtside::nba::{RosterPlayer, StatLine, StatsProvider, Team};
use courtside::{Checkpoint, CourtsideError, PlayerId, Result, TeamId};

const fn team(id: u32, name: &'static str, abbr: &'static str) -> Team {
    Team {
        id: TeamId(id),
        full_name: name,
        abbreviation: abbr,
    }
}

const LEAGUE: [Team; 5] = [
    team(1, "Chicago Bulls", "CHI"),
    team(2, "Toronto Raptors", "TOR"),
    team(3, "Miami Heat", "MIA"),
    team(4, "Utah Jazz", "UTA"),
    team(5, "Orlando Magic", "ORL"),
];

fn player(id: u64, name: &str) -> RosterPlayer {
    RosterPlayer {
        id: PlayerId::new(id),
        name: name.to_string(),
        position: "G".to_string(),
        height: "6-5".to_string(),
        weight: "200".to_string(),
    }
}

fn stat_line(points: f64) -> StatLine {
    let mut line = BTreeMap::new();
    line.insert("PTS".to_string(), points);
    line
}

/// Scripted provider: every team gets two players whose only stat is
/// PTS equal to `10 * team id` and `20 * team id`, so each team scores
/// `300 * id` and the final ranking is highest team id first.
#[derive(Default)]
struct ScriptedProvider {
    /// Teams whose roster fetch errors out.
    failing_rosters: HashSet<u32>,
    /// Players whose stats fetch errors out.
    failing_players: HashSet<u64>,
    /// Players with no recorded season.
    statless_players: HashSet<u64>,
    roster_calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn rosters_fetched(&self) -> Vec<String> {
        self.roster_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsProvider for ScriptedProvider {
    async fn roster(&self, team: &Team) -> Result<Vec<RosterPlayer>> {
        self.roster_calls
            .lock()
            .unwrap()
            .push(team.full_name.to_string());

        if self.failing_rosters.contains(&team.id.as_u32()) {
            return Err(CourtsideError::NoData {
                subject: format!("roster for {}", team.full_name),
            });
        }

        let base = team.id.as_u32() as u64 * 100;
        Ok(vec![
            player(base + 1, "First Player"),
            player(base + 2, "Second Player"),
        ])
    }

    async fn latest_season_stats(&self, player: PlayerId) -> Result<Option<StatLine>> {
        let id = player.as_u64();
        if self.failing_players.contains(&id) {
            return Err(CourtsideError::NoData {
                subject: format!("stats for player {id}"),
            });
        }
        if self.statless_players.contains(&id) {
            return Ok(None);
        }
        // First player of team N scores 10N points, second 20N.
        let team_id = id / 100;
        let slot = id % 100;
        Ok(Some(stat_line((team_id * slot * 10) as f64)))
    }
}

fn options(dir: &Path, fresh: bool) -> BatchOptions {
    BatchOptions {
        checkpoint_path: dir.join("processed_teams.json"),
        report_path: dir.join("team_ratings.txt"),
        pacing: Duration::ZERO,
        fresh,
    }
}

fn no_shutdown() -> Arc<AtomicBool> {
    Arc::new(AtomicBool::new(false))
}

#[tokio::test]
async fn rate_team_sums_contributing_players() {
    let provider = ScriptedProvider::default();
    // Team 3: players 301 and 302 score 30 and 60 PTS; ratings 300 and
    // 600; team total 900 from 2 contributors.
    let entry = rate_team(&provider, &LEAGUE[2], Duration::ZERO)
        .await
        .unwrap();
    assert_eq!(entry.name(), "Miami Heat");
    assert_eq!(entry.score(), 900.0);
    assert_eq!(entry.players(), 2);
}

#[tokio::test]
async fn rate_team_skips_failing_player_without_failing_team() {
    let provider = ScriptedProvider {
        failing_players: HashSet::from([301]),
        ..Default::default()
    };
    let entry = rate_team(&provider, &LEAGUE[2], Duration::ZERO)
        .await
        .unwrap();
    assert_eq!(entry.score(), 600.0);
    assert_eq!(entry.players(), 1);
}

#[tokio::test]
async fn rate_team_roster_failure_is_no_data() {
    let provider = ScriptedProvider {
        failing_rosters: HashSet::from([3]),
        ..Default::default()
    };
    assert!(rate_team(&provider, &LEAGUE[2], Duration::ZERO)
        .await
        .is_none());
}

#[tokio::test]
async fn rate_team_zero_contributors_is_no_data() {
    let provider = ScriptedProvider {
        statless_players: HashSet::from([301, 302]),
        ..Default::default()
    };
    assert!(rate_team(&provider, &LEAGUE[2], Duration::ZERO)
        .await
        .is_none());
}

#[tokio::test]
async fn full_run_writes_sorted_checkpoint_and_report() {
    let dir = tempdir().unwrap();
    let provider = ScriptedProvider::default();
    let opts = options(dir.path(), false);

    let outcome = run_league_batch(&provider, &LEAGUE, &opts, no_shutdown())
        .await
        .unwrap();
    assert!(outcome.completed);
    assert_eq!(outcome.rated, 5);

    // Checkpoint on disk is the sorted final state.
    let saved = Checkpoint::load(&opts.checkpoint_path).unwrap();
    let names: Vec<&str> = saved.team_ratings.iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec![
            "Orlando Magic",
            "Utah Jazz",
            "Miami Heat",
            "Toronto Raptors",
            "Chicago Bulls"
        ]
    );

    let report = std::fs::read_to_string(&opts.report_path).unwrap();
    let first = report.lines().next().unwrap();
    assert_eq!(first, "Orlando Magic: 1500.00 (Num Players: 2)");
    assert_eq!(report.lines().count(), 5);
}

#[tokio::test]
async fn failed_team_is_omitted_and_stays_eligible_for_resume() {
    let dir = tempdir().unwrap();
    let provider = ScriptedProvider {
        failing_rosters: HashSet::from([2]),
        ..Default::default()
    };
    let opts = options(dir.path(), false);

    let outcome = run_league_batch(&provider, &LEAGUE, &opts, no_shutdown())
        .await
        .unwrap();
    assert!(outcome.completed);
    assert_eq!(outcome.rated, 4);

    let saved = Checkpoint::load(&opts.checkpoint_path).unwrap();
    assert!(!saved.processed_names().contains("Toronto Raptors"));

    // A healthy rerun picks up only the missing team.
    let healthy = ScriptedProvider::default();
    run_league_batch(&healthy, &LEAGUE, &opts, no_shutdown())
        .await
        .unwrap();
    assert_eq!(healthy.rosters_fetched(), vec!["Toronto Raptors"]);

    let saved = Checkpoint::load(&opts.checkpoint_path).unwrap();
    assert_eq!(saved.team_ratings.len(), 5);
}

#[tokio::test]
async fn resume_skips_checkpointed_teams_and_matches_fresh_run() {
    let fresh_dir = tempdir().unwrap();
    let resume_dir = tempdir().unwrap();

    // Reference: one uninterrupted run.
    let provider = ScriptedProvider::default();
    let fresh_opts = options(fresh_dir.path(), false);
    run_league_batch(&provider, &LEAGUE, &fresh_opts, no_shutdown())
        .await
        .unwrap();

    // Resumed run: checkpoint already covers the first three teams.
    let resume_opts = options(resume_dir.path(), false);
    {
        let mut partial = Checkpoint::new();
        for entry in &Checkpoint::load(&fresh_opts.checkpoint_path)
            .unwrap()
            .team_ratings
        {
            if ["Chicago Bulls", "Toronto Raptors", "Miami Heat"].contains(&entry.name()) {
                partial.push(entry.clone());
            }
        }
        assert_eq!(partial.team_ratings.len(), 3);
        partial.save(&resume_opts.checkpoint_path).unwrap();
    }

    let provider = ScriptedProvider::default();
    let outcome = run_league_batch(&provider, &LEAGUE, &resume_opts, no_shutdown())
        .await
        .unwrap();
    assert_eq!(outcome.rated, 2);
    assert_eq!(provider.rosters_fetched(), vec!["Utah Jazz", "Orlando Magic"]);

    // Both paths end in the identical ranked report.
    let fresh_report = std::fs::read_to_string(&fresh_opts.report_path).unwrap();
    let resumed_report = std::fs::read_to_string(&resume_opts.report_path).unwrap();
    assert_eq!(fresh_report, resumed_report);
}

#[tokio::test]
async fn fresh_flag_ignores_existing_checkpoint() {
    let dir = tempdir().unwrap();
    let opts = options(dir.path(), true);

    let mut stale = Checkpoint::new();
    stale.push(courtside::TeamRatingEntry::new("Chicago Bulls", 1.0, 1));
    stale.save(&opts.checkpoint_path).unwrap();

    let provider = ScriptedProvider::default();
    let outcome = run_league_batch(&provider, &LEAGUE, &opts, no_shutdown())
        .await
        .unwrap();
    assert_eq!(outcome.rated, 5);
    assert_eq!(provider.rosters_fetched().len(), 5);
}

#[tokio::test]
async fn unwritable_checkpoint_does_not_abort_the_run() {
    let dir = tempdir().unwrap();
    // A plain file where the checkpoint's parent directory should be
    // makes every save fail.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let opts = BatchOptions {
        checkpoint_path: blocker.join("processed_teams.json"),
        report_path: dir.path().join("team_ratings.txt"),
        pacing: Duration::ZERO,
        fresh: false,
    };

    let provider = ScriptedProvider::default();
    let outcome = run_league_batch(&provider, &LEAGUE, &opts, no_shutdown())
        .await
        .unwrap();

    // Save failures are logged, never fatal: all teams still rate and
    // the report still lands.
    assert!(outcome.completed);
    assert_eq!(outcome.rated, 5);
    assert_eq!(provider.rosters_fetched().len(), 5);
    assert!(!opts.checkpoint_path.exists());
    let report = std::fs::read_to_string(&opts.report_path).unwrap();
    assert_eq!(report.lines().count(), 5);
}

/// Wraps a provider and requests shutdown once `limit` teams have had
/// their roster fetched, simulating an operator abort mid-batch.
struct InterruptAfter<P> {
    inner: P,
    shutdown: Arc<AtomicBool>,
    seen: AtomicUsize,
    limit: usize,
}

#[async_trait]
impl<P: StatsProvider> StatsProvider for InterruptAfter<P> {
    async fn roster(&self, team: &Team) -> Result<Vec<RosterPlayer>> {
        if self.seen.fetch_add(1, Ordering::SeqCst) + 1 >= self.limit {
            self.shutdown.store(true, Ordering::SeqCst);
        }
        self.inner.roster(team).await
    }

    async fn latest_season_stats(&self, player: PlayerId) -> Result<Option<StatLine>> {
        self.inner.latest_season_stats(player).await
    }
}

#[tokio::test]
async fn interrupted_run_keeps_completed_teams_and_resumes_cleanly() {
    let dir = tempdir().unwrap();
    let opts = options(dir.path(), false);

    let shutdown = no_shutdown();
    let provider = InterruptAfter {
        inner: ScriptedProvider::default(),
        shutdown: Arc::clone(&shutdown),
        seen: AtomicUsize::new(0),
        limit: 3,
    };

    let outcome = run_league_batch(&provider, &LEAGUE, &opts, shutdown)
        .await
        .unwrap();
    assert!(!outcome.completed);
    assert_eq!(outcome.rated, 3);

    // The in-flight team finished and was persisted; nothing was sorted.
    let saved = Checkpoint::load(&opts.checkpoint_path).unwrap();
    let names: Vec<&str> = saved.team_ratings.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Chicago Bulls", "Toronto Raptors", "Miami Heat"]);
    assert!(!opts.report_path.exists());

    // Restart processes only the remaining two teams.
    let provider = ScriptedProvider::default();
    let outcome = run_league_batch(&provider, &LEAGUE, &opts, no_shutdown())
        .await
        .unwrap();
    assert!(outcome.completed);
    assert_eq!(provider.rosters_fetched(), vec!["Utah Jazz", "Orlando Magic"]);

    let saved = Checkpoint::load(&opts.checkpoint_path).unwrap();
    assert_eq!(saved.team_ratings.len(), 5);
    assert!(opts.report_path.exists());
}

#[tokio::test]
async fn shutdown_before_start_saves_empty_checkpoint() {
    let dir = tempdir().unwrap();
    let opts = options(dir.path(), false);

    let shutdown = Arc::new(AtomicBool::new(true));
    let provider = ScriptedProvider::default();
    let outcome = run_league_batch(&provider, &LEAGUE, &opts, shutdown)
        .await
        .unwrap();

    assert!(!outcome.completed);
    assert_eq!(outcome.rated, 0);
    assert!(provider.rosters_fetched().is_empty());
    assert!(Checkpoint::load(&opts.checkpoint_path)
        .unwrap()
        .team_ratings
        .is_empty());
}
