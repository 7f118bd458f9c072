//! Console presentation layer
//!
//! This module handles:
//! - Colored message helpers used across the tool ([`style`])
//! - The startup banner ([`banner`])
//! - Spinner progress for long-running external commands ([`progress`])
//!
//! Everything here is stateless; nothing holds process-wide output state.

pub mod banner;
pub mod progress;
pub mod style;

pub use progress::{ProgressReporter, SilentProgressReporter, SpinnerProgressReporter};
