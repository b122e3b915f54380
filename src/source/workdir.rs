//! Working directory holding the downloaded yearly files.

use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{core::YearTemplate, Result, Season, SeasonRange};

/// Directory guard: created on [`WorkDir::acquire`], optionally removed on drop.
///
/// Removal happens on every exit path, including early returns through `?`.
#[derive(Debug)]
pub struct WorkDir {
    path: PathBuf,
    remove: bool,
}

impl WorkDir {
    /// Create `path` if it does not already exist.
    pub fn acquire(path: impl Into<PathBuf>, remove: bool) -> Result<Self> {
        let path = path.into();
        match fs::create_dir(&path) {
            Ok(()) => info!("Created temporary directory: {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
                info!("Temporary directory {} already exists", path.display())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(&path)?;
                info!("Created temporary directory: {}", path.display());
            }
            Err(e) => return Err(e.into()),
        }
        Ok(Self { path, remove })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn will_remove(&self) -> bool {
        self.remove
    }

    /// Years whose file, named after `template`, is present in the directory.
    pub fn available_seasons(&self, template: &YearTemplate) -> Result<BTreeSet<Season>> {
        let mut seasons = BTreeSet::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(season) = entry.file_name().to_str().and_then(|n| template.parse(n)) {
                seasons.insert(season);
            }
        }
        Ok(seasons)
    }

    /// Requested seasons that have no file in the directory yet, in ascending order.
    pub fn missing_seasons(&self, range: SeasonRange, template: &YearTemplate) -> Result<Vec<Season>> {
        let available = self.available_seasons(template)?;
        Ok(range.iter().filter(|s| !available.contains(s)).collect())
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        if !self.remove {
            return;
        }
        match fs::remove_dir_all(&self.path) {
            Ok(()) => info!("Removed temporary directory: {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove temporary directory {}: {}", self.path.display(), e),
        }
    }
}
