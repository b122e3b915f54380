//! Reading of yearly statistics files into records.
//!
//! Files are header-less CSV; columns 1, 2 and 3 hold the team, the league
//! and the player identifier. Any further columns are ignored.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{
    core::YearTemplate,
    error::{Result, TriplesError},
    triples::Record,
    SeasonRange,
};

const TEAM_COLUMN: usize = 1;
const LEAGUE_COLUMN: usize = 2;
const PLAYER_COLUMN: usize = 3;

/// Loads the files of a season range from a local directory.
#[derive(Debug, Clone)]
pub struct SeasonLoader {
    dir: PathBuf,
    file_template: YearTemplate,
}

impl SeasonLoader {
    pub fn new(dir: &Path, file_template: YearTemplate) -> Self {
        Self {
            dir: dir.to_path_buf(),
            file_template,
        }
    }

    /// Records of every season in `range`; seasons without a file are skipped.
    pub fn load(&self, range: SeasonRange) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut files = 0usize;
        for season in range.iter() {
            let path = self.dir.join(self.file_template.render(season));
            if !path.is_file() {
                warn!("No file found for year {} at {}", season, path.display());
                continue;
            }
            let file = File::open(&path)?;
            records.extend(read_records(file, &path.display().to_string())?);
            files += 1;
        }
        info!(
            "Loaded {} records from {} files over {}",
            records.len(),
            files,
            range
        );
        Ok(records)
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|f| !f.is_empty())
}

/// Parse records from a reader; `origin` names the source in errors and logs.
pub fn read_records<R: Read>(rdr: R, origin: &str) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);

    let mut records = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let row = result.map_err(|source| TriplesError::Csv {
            path: origin.to_string(),
            source,
        })?;
        let team = non_empty(row.get(TEAM_COLUMN));
        let player = non_empty(row.get(PLAYER_COLUMN));
        match (team, player) {
            (Some(team), Some(player)) => {
                records.push(Record::new(team, non_empty(row.get(LEAGUE_COLUMN)), player));
            }
            _ => warn!("Skipping malformed row {} in {}", line + 1, origin),
        }
    }
    Ok(records)
}
