//! Unit tests for matchup resolution

use super::*;
use crate::checkpoint::{Checkpoint, TeamRatingEntry};

fn checkpoint(entries: &[(&str, f64, u32)]) -> Checkpoint {
    let mut cp = Checkpoint::new();
    for (name, score, players) in entries {
        cp.push(TeamRatingEntry::new(*name, *score, *players));
    }
    cp
}

fn tokens(ts: &[&str]) -> Vec<String> {
    ts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_resolves_tokens_in_order() {
    let cp = checkpoint(&[
        ("Chicago Bulls", 500.0, 12),
        ("Toronto Raptors", 480.0, 13),
    ]);

    let matchup = resolve(&cp, &tokens(&["Bulls", "Raptors"])).unwrap();
    assert_eq!(matchup.first.name(), "Chicago Bulls");
    assert_eq!(matchup.second.name(), "Toronto Raptors");

    // Token order, not checkpoint order.
    let matchup = resolve(&cp, &tokens(&["Raptors", "Bulls"])).unwrap();
    assert_eq!(matchup.first.name(), "Toronto Raptors");
    assert_eq!(matchup.second.name(), "Chicago Bulls");
}

#[test]
fn test_one_token_is_an_error() {
    let cp = checkpoint(&[("Chicago Bulls", 500.0, 12)]);
    let err = resolve(&cp, &tokens(&["Bulls"])).unwrap_err();
    assert!(matches!(err, CourtsideError::BadTeamCount { count: 1 }));
}

#[test]
fn test_unmatched_tokens_error_names_them() {
    let cp = checkpoint(&[("Chicago Bulls", 500.0, 12)]);
    let err = resolve(&cp, &tokens(&["Sonics", "Bullets"])).unwrap_err();
    match err {
        CourtsideError::MatchupNotResolvable { tokens } => {
            assert_eq!(tokens, vec!["Sonics".to_string(), "Bullets".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_substring_match_is_case_sensitive() {
    let cp = checkpoint(&[
        ("Chicago Bulls", 500.0, 12),
        ("Toronto Raptors", 480.0, 13),
    ]);
    let err = resolve(&cp, &tokens(&["bulls", "raptors"])).unwrap_err();
    assert!(matches!(err, CourtsideError::MatchupNotResolvable { .. }));
}

#[test]
fn test_first_match_wins_in_checkpoint_order() {
    // Both names contain "Lakers"; the earlier entry wins the token.
    let cp = checkpoint(&[
        ("Los Angeles Lakers", 600.0, 15),
        ("South Bay Lakers", 100.0, 10),
        ("Boston Celtics", 550.0, 14),
    ]);

    let matchup = resolve(&cp, &tokens(&["Lakers", "Celtics"])).unwrap();
    assert_eq!(matchup.first.name(), "Los Angeles Lakers");
    assert_eq!(matchup.second.name(), "Boston Celtics");
}

#[test]
fn test_fallback_when_tokens_collide_on_one_team() {
    // Both tokens hit the same first entry; the fallback scan still
    // finds two distinct teams that contain one of the tokens.
    let cp = checkpoint(&[
        ("Los Angeles Lakers", 600.0, 15),
        ("Los Angeles Clippers", 590.0, 14),
    ]);

    let matchup = resolve(&cp, &tokens(&["Los Angeles", "Angeles"])).unwrap();
    assert_eq!(matchup.first.name(), "Los Angeles Lakers");
    assert_eq!(matchup.second.name(), "Los Angeles Clippers");
}

#[test]
fn test_describe_matchup_line() {
    let cp = checkpoint(&[
        ("Chicago Bulls", 500.0, 12),
        ("Toronto Raptors", 480.5, 13),
    ]);
    let matchup = resolve(&cp, &tokens(&["Bulls", "Raptors"])).unwrap();
    assert_eq!(
        matchup.describe(),
        "Chicago Bulls with a score of 500 and 12 players VS \
         Toronto Raptors with a score of 480.5 and 13 players"
    );
}

#[test]
fn test_empty_checkpoint_never_resolves() {
    let cp = Checkpoint::new();
    let err = resolve(&cp, &tokens(&["Bulls", "Raptors"])).unwrap_err();
    assert!(matches!(err, CourtsideError::MatchupNotResolvable { .. }));
}
