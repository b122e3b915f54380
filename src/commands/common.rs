//! Helpers shared by the commands.

use tracing::{debug, info};

use crate::{
    config::Settings,
    core::YearTemplate,
    source::{SeasonDownloader, WorkDir},
    Result, Season, SeasonRange,
};

/// Download the seasons of `range` that have no file in `workdir` yet.
///
/// Returns the seasons actually written. The source URL is only required
/// when something is missing.
pub async fn download_missing_seasons(
    settings: &Settings,
    workdir: &WorkDir,
    range: SeasonRange,
    file_template: &YearTemplate,
) -> Result<Vec<Season>> {
    let missing = workdir.missing_seasons(range, file_template)?;
    if missing.is_empty() {
        debug!("All files for {} already present in {}", range, workdir.path().display());
        return Ok(Vec::new());
    }

    info!(
        "Starts downloading files corresponding to {} missing years",
        missing.len()
    );
    let downloader = SeasonDownloader::new(
        workdir.path(),
        settings.source_url_template()?,
        file_template.clone(),
    )?;
    downloader.download(&missing).await
}
