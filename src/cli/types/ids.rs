//! ID types for players and teams found in the statistics files.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for player identifiers (e.g. `aaronha01`).
///
/// Identifiers are compared by plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team identity: the team name, suffixed with `-<league>` when a league is known.
///
/// # Examples
///
/// ```rust
/// use baseball_triples::TeamIdentity;
///
/// assert_eq!(TeamIdentity::new("NYA", Some("AL")).as_str(), "NYA-AL");
/// assert_eq!(TeamIdentity::new("BS1", None).as_str(), "BS1");
/// assert_eq!(TeamIdentity::new("BS1", Some("")).as_str(), "BS1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamIdentity(String);

impl TeamIdentity {
    pub fn new(team: &str, league: Option<&str>) -> Self {
        match league {
            Some(league) if !league.is_empty() => Self(format!("{}-{}", team, league)),
            _ => Self(team.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
