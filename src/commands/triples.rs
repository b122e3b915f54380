//! Team triples command implementation

use std::path::PathBuf;
use tracing::info;

use crate::{
    cli::types::MinPlayers,
    config::Settings,
    output::{build_sink, OutputFormat, SinkOutcome, SinkTarget},
    source::{SeasonLoader, WorkDir},
    triples::TripleCounter,
    Result, Season,
};

use super::common::download_missing_seasons;

/// Parameters for the triples command
#[derive(Debug, Clone)]
pub struct TriplesParams {
    pub from: Option<Season>,
    pub to: Option<Season>,
    pub tmp_dir: PathBuf,
    pub min_players: MinPlayers,
    pub sink: String,
    pub keep_files: bool,
    pub as_json: bool,
    pub parallel: bool,
}

/// Handle the triples command
///
/// Downloads missing yearly files, loads every season of the range, counts
/// the team triples and hands the qualifying ones to the requested sink.
/// The working directory is removed on return unless `keep_files` is set.
pub async fn handle_triples(settings: &Settings, params: TriplesParams) -> Result<SinkOutcome> {
    let range = settings.resolve_range(params.from, params.to)?;
    let file_template = settings.file_name_template()?;
    let counter = TripleCounter::new(i64::from(params.min_players.as_u32()))?.parallel(params.parallel);

    let workdir = WorkDir::acquire(&params.tmp_dir, !params.keep_files)?;
    download_missing_seasons(settings, &workdir, range, &file_template).await?;

    let records = SeasonLoader::new(workdir.path(), file_template).load(range)?;
    let triples = counter.compute(&records)?;
    info!(
        "Found {} team triples sharing at least {} players over {}",
        triples.len(),
        params.min_players,
        range
    );

    let mut sink = build_sink(
        SinkTarget::parse(&params.sink),
        OutputFormat::from_json_flag(params.as_json),
    );
    sink.write(&triples)
}
