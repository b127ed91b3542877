//! Static table of the 30 NBA franchises.
//!
//! The stats API has no cheap "list all teams" call; franchise ids are
//! stable, so they are embedded here the way the upstream client
//! libraries ship them.

use crate::cli::types::TeamId;
use crate::nba::types::Team;

macro_rules! team {
    ($id:expr, $name:expr, $abbr:expr) => {
        Team {
            id: TeamId($id),
            full_name: $name,
            abbreviation: $abbr,
        }
    };
}

pub const NBA_TEAMS: [Team; 30] = [
    team!(1610612737, "Atlanta Hawks", "ATL"),
    team!(1610612738, "Boston Celtics", "BOS"),
    team!(1610612751, "Brooklyn Nets", "BKN"),
    team!(1610612766, "Charlotte Hornets", "CHA"),
    team!(1610612741, "Chicago Bulls", "CHI"),
    team!(1610612739, "Cleveland Cavaliers", "CLE"),
    team!(1610612742, "Dallas Mavericks", "DAL"),
    team!(1610612743, "Denver Nuggets", "DEN"),
    team!(1610612765, "Detroit Pistons", "DET"),
    team!(1610612744, "Golden State Warriors", "GSW"),
    team!(1610612745, "Houston Rockets", "HOU"),
    team!(1610612754, "Indiana Pacers", "IND"),
    team!(1610612746, "Los Angeles Clippers", "LAC"),
    team!(1610612747, "Los Angeles Lakers", "LAL"),
    team!(1610612763, "Memphis Grizzlies", "MEM"),
    team!(1610612748, "Miami Heat", "MIA"),
    team!(1610612749, "Milwaukee Bucks", "MIL"),
    team!(1610612750, "Minnesota Timberwolves", "MIN"),
    team!(1610612740, "New Orleans Pelicans", "NOP"),
    team!(1610612752, "New York Knicks", "NYK"),
    team!(1610612760, "Oklahoma City Thunder", "OKC"),
    team!(1610612753, "Orlando Magic", "ORL"),
    team!(1610612755, "Philadelphia 76ers", "PHI"),
    team!(1610612756, "Phoenix Suns", "PHX"),
    team!(1610612757, "Portland Trail Blazers", "POR"),
    team!(1610612758, "Sacramento Kings", "SAC"),
    team!(1610612759, "San Antonio Spurs", "SAS"),
    team!(1610612761, "Toronto Raptors", "TOR"),
    team!(1610612762, "Utah Jazz", "UTA"),
    team!(1610612764, "Washington Wizards", "WAS"),
];

/// All franchises in fixed table order; the batch driver processes them
/// in exactly this order so resume sets line up across runs.
pub fn all_teams() -> &'static [Team] {
    &NBA_TEAMS
}
