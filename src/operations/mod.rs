//! High-level operations behind the CLI
//!
//! Commands parse arguments and wire up terminal collaborators; the
//! operations here do the actual work and are tested with scripted ones.

pub mod create;
