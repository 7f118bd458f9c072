//! Colored text helpers

use console::{Style, StyledObject};

/// Dimmed text for secondary information
pub fn muted<D>(text: D) -> StyledObject<D> {
    Style::new().dim().apply_to(text)
}

/// Green text for completed steps and commands to run
pub fn success<D>(text: D) -> StyledObject<D> {
    Style::new().green().bold().apply_to(text)
}

/// Red text for failures
pub fn error<D>(text: D) -> StyledObject<D> {
    Style::new().red().bold().apply_to(text)
}

/// Bold text for section headings
pub fn heading<D>(text: D) -> StyledObject<D> {
    Style::new().bold().apply_to(text)
}
