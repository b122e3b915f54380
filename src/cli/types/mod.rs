//! Type-safe wrappers for seasons, identifiers and thresholds.

pub mod ids;
pub mod threshold;
pub mod time;

pub use ids::{PlayerId, TeamIdentity};
pub use threshold::MinPlayers;
pub use time::{Season, SeasonRange};
