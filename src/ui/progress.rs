//! Progress reporting for long-running external commands
//!
//! All progress reporting goes through the [`ProgressReporter`] trait so the
//! installer can show a spinner in a terminal and stay quiet in tests or when
//! output is not a TTY.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for long-running operations
pub trait ProgressReporter {
    /// Start showing progress with a message
    fn start(&mut self, message: &str);

    /// Finish successfully with a final message
    fn finish(&mut self, message: &str);

    /// Abandon on error
    fn abandon(&mut self, message: &str);
}

/// Spinner shown while an external command runs
pub struct SpinnerProgressReporter {
    spinner: Option<ProgressBar>,
}

impl SpinnerProgressReporter {
    pub fn new() -> Self {
        Self { spinner: None }
    }
}

impl Default for SpinnerProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for SpinnerProgressReporter {
    fn start(&mut self, message: &str) {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn finish(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(message.to_string());
        }
    }

    fn abandon(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon_with_message(message.to_string());
        }
    }
}

/// Silent progress reporter
///
/// No-op implementation used when stdout is not a terminal.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _message: &str) {
        // No-op for silent mode
    }

    fn finish(&mut self, _message: &str) {
        // No-op for silent mode
    }

    fn abandon(&mut self, _message: &str) {
        // No-op for silent mode
    }
}

/// Pick a spinner when stdout is a terminal, silence otherwise
pub fn reporter_for_terminal() -> Box<dyn ProgressReporter> {
    if console::Term::stdout().is_term() {
        Box::new(SpinnerProgressReporter::new())
    } else {
        Box::new(SilentProgressReporter)
    }
}
