//! `{year}` templates for download URLs and local file names.

use crate::{
    error::{Result, TriplesError},
    Season,
};

pub const YEAR_PLACEHOLDER: &str = "{year}";

/// A string with exactly one `{year}` placeholder, e.g. `baseball-{year}.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTemplate {
    prefix: String,
    suffix: String,
}

impl YearTemplate {
    pub fn new(template: &str) -> Result<Self> {
        match template.split_once(YEAR_PLACEHOLDER) {
            Some((prefix, suffix)) if !suffix.contains(YEAR_PLACEHOLDER) => Ok(Self {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            }),
            _ => Err(TriplesError::InvalidTemplate {
                template: template.to_string(),
            }),
        }
    }

    pub fn render(&self, season: Season) -> String {
        format!("{}{}{}", self.prefix, season, self.suffix)
    }

    /// Recover the season from a rendered string, if it matches this template.
    pub fn parse(&self, rendered: &str) -> Option<Season> {
        let year = rendered
            .strip_prefix(&self.prefix)?
            .strip_suffix(&self.suffix)?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        year.parse().ok()
    }
}
