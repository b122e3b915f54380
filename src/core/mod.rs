//! Core utilities for the baseball triples CLI
//!
//! - `template`: `{year}` templates for URLs and file names
//! - `logging`: tracing subscriber setup

pub mod logging;
pub mod template;

pub use logging::init_logging;
pub use template::YearTemplate;
