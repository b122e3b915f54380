//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{MinPlayers, Season};


/// Name of the sink that prints results to standard output.
pub const CONSOLE_SINK_NAME: &str = "console";

/// Year range and working directory shared between commands
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Year of the first baseball statistical report to include (defaults to `min_year` from config).
    #[clap(long)]
    pub from: Option<Season>,

    /// Year of the last baseball statistical report to include (defaults to `max_year` from config).
    #[clap(long)]
    pub to: Option<Season>,

    /// Local directory where the downloaded yearly files are stored.
    #[clap(long, default_value = "./tmp")]
    pub tmp_dir: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List team triples sharing at least `--min-players` players over a season range.
    ///
    /// Missing yearly files are downloaded into `--tmp-dir` first; the directory
    /// is removed afterwards unless `--keep-files` is given.
    Triples {
        #[clap(flatten)]
        source: SourceArgs,

        /// Minimum number of players a team triple should contain to be displayed.
        #[clap(long, default_value_t = MinPlayers::default())]
        min_players: MinPlayers,

        /// Output sink: `console` or a path on the local file system.
        #[clap(long, default_value = CONSOLE_SINK_NAME)]
        sink: String,

        /// Keep the temporary directory and its content after running.
        #[clap(long)]
        keep_files: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Tally players across threads.
        #[clap(long)]
        parallel: bool,
    },

    /// Download the yearly files missing from `--tmp-dir` without computing anything.
    Fetch {
        #[clap(flatten)]
        source: SourceArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "baseball-triples",
    about = "Find baseball team triples sharing many players"
)]
pub struct TriplesCli {
    /// Path to a TOML configuration file.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
