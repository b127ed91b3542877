//! Resolve fuzzy team tokens against checkpointed ratings.

use crate::checkpoint::{Checkpoint, TeamRatingEntry};
use crate::error::{CourtsideError, Result};

#[cfg(test)]
mod tests;

/// Exactly two rated teams, in the order the caller asked for them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMatchup {
    pub first: TeamRatingEntry,
    pub second: TeamRatingEntry,
}

impl ResolvedMatchup {
    /// Human-readable matchup line handed to the narrative service.
    pub fn describe(&self) -> String {
        format!(
            "{} with a score of {} and {} players VS {} with a score of {} and {} players",
            self.first.name(),
            self.first.score(),
            self.first.players(),
            self.second.name(),
            self.second.score(),
            self.second.players(),
        )
    }
}

/// Map two team-name tokens to checkpoint entries.
///
/// Each token matches the first checkpoint name containing it as a
/// case-sensitive substring; matches are deduplicated by team name. When
/// that yields fewer than two distinct teams, a fallback scan takes the
/// first two checkpoint names matching any token. Checkpoint order is
/// the tie-break throughout, so a token shared by several franchise
/// names ("Lakers" vs "LA Lakers") resolves to whichever comes first -
/// a known limitation, kept as-is.
pub fn resolve(checkpoint: &Checkpoint, tokens: &[String]) -> Result<ResolvedMatchup> {
    if tokens.len() != 2 {
        return Err(CourtsideError::BadTeamCount {
            count: tokens.len(),
        });
    }

    let mut matched: Vec<&TeamRatingEntry> = Vec::new();
    for token in tokens {
        if let Some(entry) = checkpoint
            .team_ratings
            .iter()
            .find(|e| e.name().contains(token.as_str()))
        {
            if !matched.iter().any(|m| m.name() == entry.name()) {
                matched.push(entry);
            }
        }
    }

    if matched.len() != 2 {
        matched = checkpoint
            .team_ratings
            .iter()
            .filter(|e| tokens.iter().any(|t| e.name().contains(t.as_str())))
            .take(2)
            .collect();
    }

    if matched.len() != 2 {
        return Err(CourtsideError::MatchupNotResolvable {
            tokens: tokens.to_vec(),
        });
    }

    Ok(ResolvedMatchup {
        first: matched[0].clone(),
        second: matched[1].clone(),
    })
}
