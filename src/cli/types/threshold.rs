//! Minimum player count accepted on the command line.

use crate::error::{Result, TriplesError};
use std::fmt;
use std::str::FromStr;

/// Minimum number of shared players a team triple needs to be reported.
///
/// Only non-negative integers parse; `-10`, `10.5` and `abc` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinPlayers(pub u32);

impl MinPlayers {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for MinPlayers {
    fn default() -> Self {
        Self(50)
    }
}

impl fmt::Display for MinPlayers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MinPlayers {
    type Err = TriplesError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| TriplesError::invalid_argument(format!("\"{}\" is not a positive integer", s)))
    }
}
