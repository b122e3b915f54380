//! Fetch command implementation

use std::path::PathBuf;

use crate::{config::Settings, source::WorkDir, Result, Season};

use super::common::download_missing_seasons;

/// Download the missing files of a season range into `tmp_dir` and keep them.
pub async fn handle_fetch(
    settings: &Settings,
    from: Option<Season>,
    to: Option<Season>,
    tmp_dir: PathBuf,
) -> Result<Vec<Season>> {
    let range = settings.resolve_range(from, to)?;
    let file_template = settings.file_name_template()?;
    let workdir = WorkDir::acquire(tmp_dir, false)?;

    let missing = workdir.missing_seasons(range, &file_template)?.len();
    let downloaded = download_missing_seasons(settings, &workdir, range, &file_template).await?;

    println!(
        "✓ Downloaded {} of {} missing seasons into {}",
        downloaded.len(),
        missing,
        workdir.path().display()
    );

    Ok(downloaded)
}
