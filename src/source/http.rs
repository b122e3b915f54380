//! Download of yearly statistics files.

use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::{core::YearTemplate, Result, Season};

#[cfg(test)]
mod tests;

const USER_AGENT: &str = concat!("baseball-triples/", env!("CARGO_PKG_VERSION"));

/// Fetches one file per season into a local directory.
#[derive(Debug, Clone)]
pub struct SeasonDownloader {
    client: Client,
    url_template: YearTemplate,
    file_template: YearTemplate,
    dir: PathBuf,
}

impl SeasonDownloader {
    pub fn new(dir: &Path, url_template: YearTemplate, file_template: YearTemplate) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            url_template,
            file_template,
            dir: dir.to_path_buf(),
        })
    }

    pub fn file_path(&self, season: Season) -> PathBuf {
        self.dir.join(self.file_template.render(season))
    }

    /// Download every season in turn and return those written to disk.
    ///
    /// An HTTP error status only skips the affected season; transport
    /// failures abort the whole download.
    pub async fn download(&self, seasons: &[Season]) -> Result<Vec<Season>> {
        let mut written = Vec::with_capacity(seasons.len());
        for &season in seasons {
            if let Some(path) = self.download_season(season).await? {
                info!(
                    "Successfully downloaded file for year {} at {}",
                    season,
                    path.display()
                );
                written.push(season);
            }
        }
        Ok(written)
    }

    async fn download_season(&self, season: Season) -> Result<Option<PathBuf>> {
        let url = self.url_template.render(season);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Requesting URL \"{}\" failed returning the following HTTP error: Code: {} - {}",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            return Ok(None);
        }

        let body = response.bytes().await?;
        let path = self.file_path(season);
        std::fs::write(&path, &body)?;
        Ok(Some(path))
    }
}
