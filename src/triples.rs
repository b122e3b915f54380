//! Team triple aggregation.
//!
//! Records are grouped into a player → team-identity set mapping, then every
//! 3-combination of each player's set is tallied under a sorted-tuple key.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::debug;

use crate::{
    error::{Result, TriplesError},
    PlayerId, TeamIdentity,
};


/// One (team, league, player) row from a yearly statistics file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub team: String,
    pub league: Option<String>,
    pub player: PlayerId,
}

impl Record {
    pub fn new(team: &str, league: Option<&str>, player: &str) -> Self {
        Self {
            team: team.to_string(),
            league: league.filter(|l| !l.is_empty()).map(str::to_string),
            player: PlayerId::new(player),
        }
    }

    pub fn team_identity(&self) -> TeamIdentity {
        TeamIdentity::new(&self.team, self.league.as_deref())
    }
}

/// Unordered set of three distinct team identities, stored sorted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TeamTriple([TeamIdentity; 3]);

impl TeamTriple {
    /// Build a triple from three identities in any order.
    ///
    /// Returns `None` unless all three are distinct.
    pub fn new(a: TeamIdentity, b: TeamIdentity, c: TeamIdentity) -> Option<Self> {
        let mut teams = [a, b, c];
        teams.sort();
        if teams[0] == teams[1] || teams[1] == teams[2] {
            return None;
        }
        Some(Self(teams))
    }

    pub fn teams(&self) -> &[TeamIdentity; 3] {
        &self.0
    }
}

impl fmt::Display for TeamTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.0;
        write!(f, "{}|{}|{}", a, b, c)
    }
}

/// Number of distinct players shared by each team triple.
pub type TripleTally = HashMap<TeamTriple, usize>;

/// Player → distinct team identities.
pub type PlayerMemberships = HashMap<PlayerId, BTreeSet<TeamIdentity>>;

/// A team triple together with its player count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripleCount {
    pub teams: TeamTriple,
    pub count: usize,
}

/// Group records by player.
///
/// Identities are collected into sets, so duplicate rows (and rows that
/// resolve to the same identity) never count twice for a player.
pub fn player_memberships<'a, I>(records: I) -> PlayerMemberships
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut memberships = PlayerMemberships::new();
    for record in records {
        memberships
            .entry(record.player.clone())
            .or_default()
            .insert(record.team_identity());
    }
    memberships
}

/// Add one increment per 3-combination of `teams` to `tally`.
fn add_player_triples(tally: &mut TripleTally, teams: &BTreeSet<TeamIdentity>) {
    if teams.len() < 3 {
        return;
    }
    // BTreeSet iteration is sorted, so i < j < k yields canonical triples.
    let teams: Vec<&TeamIdentity> = teams.iter().collect();
    let n = teams.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let triple = TeamTriple([teams[i].clone(), teams[j].clone(), teams[k].clone()]);
                *tally.entry(triple).or_insert(0) += 1;
            }
        }
    }
}

/// Sequential tally over all players.
pub fn tally_triples(memberships: &PlayerMemberships) -> TripleTally {
    let mut tally = TripleTally::new();
    for teams in memberships.values() {
        add_player_triples(&mut tally, teams);
    }
    tally
}

/// Tally with per-thread partial maps merged by summation.
pub fn par_tally_triples(memberships: &PlayerMemberships) -> TripleTally {
    memberships
        .par_iter()
        .fold(TripleTally::new, |mut tally, (_, teams)| {
            add_player_triples(&mut tally, teams);
            tally
        })
        .reduce(TripleTally::new, merge_tallies)
}

fn merge_tallies(a: TripleTally, b: TripleTally) -> TripleTally {
    let (mut into, from) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for (triple, count) in from {
        *into.entry(triple).or_insert(0) += count;
    }
    into
}

fn check_threshold(min_player_count: i64) -> Result<u64> {
    u64::try_from(min_player_count).map_err(|_| {
        TriplesError::invalid_argument(format!(
            "minimum player count must be non-negative, got {}",
            min_player_count
        ))
    })
}

/// Keep the triples shared by at least `min_player_count` players.
pub fn filter_by_threshold(tally: TripleTally, min_player_count: i64) -> Result<Vec<TripleCount>> {
    let min = check_threshold(min_player_count)?;
    Ok(tally
        .into_iter()
        .filter(|(_, count)| *count as u64 >= min)
        .map(|(teams, count)| TripleCount { teams, count })
        .collect())
}

/// Lists team triples with a minimum number of shared players.
#[derive(Debug, Clone, Copy)]
pub struct TripleCounter {
    min_player_count: i64,
    parallel: bool,
}

impl TripleCounter {
    pub fn new(min_player_count: i64) -> Result<Self> {
        check_threshold(min_player_count)?;
        Ok(Self {
            min_player_count,
            parallel: false,
        })
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn min_player_count(&self) -> i64 {
        self.min_player_count
    }

    /// Full tally, before thresholding.
    pub fn tally(&self, records: &[Record]) -> TripleTally {
        let memberships = player_memberships(records);
        debug!(
            records = records.len(),
            players = memberships.len(),
            "Grouped records by player"
        );
        if self.parallel {
            par_tally_triples(&memberships)
        } else {
            tally_triples(&memberships)
        }
    }

    pub fn compute(&self, records: &[Record]) -> Result<Vec<TripleCount>> {
        let tally = self.tally(records);
        debug!(triples = tally.len(), "Tallied team triples");
        filter_by_threshold(tally, self.min_player_count)
    }
}
