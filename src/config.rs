//! Configuration loading.
//!
//! Settings come from a TOML file (first match wins):
//! 1. the `--config` path
//! 2. `./baseball-triples.toml`
//! 3. `<user config dir>/baseball-triples/config.toml`
//!
//! Missing keys fall back to built-in defaults, and the download URL can be
//! overridden with the `BASEBALL_TRIPLES_SOURCE_URL` environment variable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    core::YearTemplate,
    error::{Result, TriplesError},
    Season, SeasonRange,
};

#[cfg(test)]
mod tests;

pub const SOURCE_URL_ENV_VAR: &str = "BASEBALL_TRIPLES_SOURCE_URL";
pub const LOCAL_CONFIG_FILE: &str = "baseball-triples.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// First year for which a statistics file exists.
    pub min_year: u16,
    /// Last year for which a statistics file exists.
    pub max_year: u16,
    /// Download URL with a `{year}` placeholder.
    pub source_url_template: Option<String>,
    /// Local file name with a `{year}` placeholder.
    pub file_name_template: String,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_year: 1871,
            max_year: 2014,
            source_url_template: None,
            file_name_template: "baseball-{year}.csv".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `explicit` or the first config file found, then apply env overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        if let Ok(url) = std::env::var(SOURCE_URL_ENV_VAR) {
            if !url.trim().is_empty() {
                settings.source_url_template = Some(url);
            }
        }

        settings.validate("<settings>")?;
        Ok(settings)
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(toml_str).map_err(|e| TriplesError::Config {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        settings.validate("<string>")?;
        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| TriplesError::Config {
            path: display.clone(),
            message: e.to_string(),
        })?;
        let settings: Settings = toml::from_str(&content).map_err(|e| TriplesError::Config {
            path: display.clone(),
            message: e.to_string(),
        })?;
        settings.validate(&display)?;
        Ok(settings)
    }

    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        let user = dirs::config_dir()?
            .join("baseball-triples")
            .join("config.toml");
        user.is_file().then_some(user)
    }

    fn validate(&self, origin: &str) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(TriplesError::Config {
                path: origin.to_string(),
                message: "min_year must be lower or equal than max_year".to_string(),
            });
        }
        YearTemplate::new(&self.file_name_template)?;
        if let Some(url) = &self.source_url_template {
            YearTemplate::new(url)?;
        }
        Ok(())
    }

    /// Seasons for which statistics files can be requested.
    pub fn season_bounds(&self) -> Result<SeasonRange> {
        SeasonRange::new(Season::new(self.min_year), Season::new(self.max_year))
    }

    /// Resolve CLI `--from`/`--to` against the configured bounds.
    ///
    /// Missing ends default to the bounds; the result must lie within them.
    pub fn resolve_range(&self, from: Option<Season>, to: Option<Season>) -> Result<SeasonRange> {
        let bounds = self.season_bounds()?;
        let range = SeasonRange::new(from.unwrap_or(bounds.from()), to.unwrap_or(bounds.to()))?;
        range.check_within(&bounds)?;
        Ok(range)
    }

    pub fn file_name_template(&self) -> Result<YearTemplate> {
        YearTemplate::new(&self.file_name_template)
    }

    /// URL template for downloads; an error if no source was configured.
    pub fn source_url_template(&self) -> Result<YearTemplate> {
        match &self.source_url_template {
            Some(url) => YearTemplate::new(url),
            None => Err(TriplesError::Config {
                path: "<settings>".to_string(),
                message: format!(
                    "source_url_template is not set (add it to {} or set {})",
                    LOCAL_CONFIG_FILE, SOURCE_URL_ENV_VAR
                ),
            }),
        }
    }
}
