//! Season types for yearly baseball statistics files.

use crate::error::{Result, TriplesError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = TriplesError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Inclusive range of seasons, e.g. `1900..=1910`.
///
/// Construction checks that `from <= to`; bounds checking against the
/// configured data availability is done with [`SeasonRange::check_within`].
///
/// # Examples
///
/// ```rust
/// use baseball_triples::{Season, SeasonRange};
///
/// let range = SeasonRange::new(Season::new(2000), Season::new(2002)).unwrap();
/// assert_eq!(range.len(), 3);
/// assert!(range.contains(Season::new(2001)));
/// assert!(SeasonRange::new(Season::new(2002), Season::new(2000)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRange {
    from: Season,
    to: Season,
}

impl SeasonRange {
    pub fn new(from: Season, to: Season) -> Result<Self> {
        if from > to {
            return Err(TriplesError::InvalidSeasonRange {
                from: from.as_u16(),
                to: to.as_u16(),
            });
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> Season {
        self.from
    }

    pub fn to(&self) -> Season {
        self.to
    }

    pub fn contains(&self, season: Season) -> bool {
        self.from <= season && season <= self.to
    }

    pub fn len(&self) -> usize {
        (self.to.as_u16() - self.from.as_u16()) as usize + 1
    }

    /// A valid range always holds at least one season.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = Season> {
        self.years().map(Season::new)
    }

    fn years(&self) -> RangeInclusive<u16> {
        self.from.as_u16()..=self.to.as_u16()
    }

    /// Fail with `SeasonOutOfBounds` if either end lies outside `bounds`.
    pub fn check_within(&self, bounds: &SeasonRange) -> Result<()> {
        for season in [self.from, self.to] {
            if !bounds.contains(season) {
                return Err(TriplesError::SeasonOutOfBounds {
                    season: season.as_u16(),
                    min: bounds.from.as_u16(),
                    max: bounds.to.as_u16(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
