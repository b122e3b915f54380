//! Source layer: where the yearly statistics files come from
//!
//! - `workdir`: scoped local directory caching the files
//! - `http`: download of missing years
//! - `loader`: CSV parsing into records

pub mod http;
pub mod loader;
pub mod workdir;

pub use http::SeasonDownloader;
pub use loader::SeasonLoader;
pub use workdir::WorkDir;
