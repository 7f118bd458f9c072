//! Command implementations for the npm-workspace CLI

pub mod completions;
pub mod create;
