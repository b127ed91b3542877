//! NBA data providers: live stats client, static franchise table, and
//! schedule lookups.

pub mod http;
pub mod schedule;
pub mod teams;
pub mod types;

pub use http::{NbaClient, StatsProvider};
pub use schedule::ScheduleClient;
pub use teams::all_teams;
pub use types::{RosterPlayer, StatLine, Team};
