//! Command implementations for the baseball triples CLI

pub mod common;
pub mod fetch;
pub mod triples;
