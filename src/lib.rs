//! Baseball Team Triples Library
//!
//! Downloads yearly baseball statistics files, groups players by the teams
//! they played for, and lists the "team triples" (unordered sets of three
//! teams) that share at least a minimum number of players.
//!
//! ## Features
//!
//! - **Season Files**: Download missing yearly files into a local working directory
//! - **Triple Counting**: Per-player 3-combinations tallied under an order-independent key
//! - **Threshold Filtering**: Keep triples shared by at least `--min-players` players
//! - **Output Sinks**: Console or file, as text lines or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use baseball_triples::triples::{Record, TripleCounter};
//!
//! # fn example() -> baseball_triples::Result<()> {
//! let records = vec![
//!     Record::new("A", Some("NL"), "bob"),
//!     Record::new("B", Some("NL"), "bob"),
//!     Record::new("C", Some("NL"), "bob"),
//! ];
//!
//! let triples = TripleCounter::new(1)?.compute(&records)?;
//! assert_eq!(triples[0].teams.to_string(), "A-NL|B-NL|C-NL");
//! assert_eq!(triples[0].count, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Configuration
//!
//! The download location is read from `baseball-triples.toml`:
//! ```toml
//! source_url_template = "https://example.org/stats/{year}.csv"
//! ```
//! or from the environment:
//! ```bash
//! export BASEBALL_TRIPLES_SOURCE_URL="https://example.org/stats/{year}.csv"
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod source;
pub mod triples;

// Re-export commonly used types
pub use cli::types::{MinPlayers, PlayerId, Season, SeasonRange, TeamIdentity};
pub use error::{Result, TriplesError};
pub use triples::{Record, TeamTriple, TripleCount, TripleCounter};
