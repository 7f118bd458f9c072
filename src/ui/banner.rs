//! Startup banner

use super::style;

const BANNER: &str = r"
  _ __  _ __  _ __ ___   __      _____  _ __| | _____ _ __   __ _  ___ ___
 | '_ \| '_ \| '_ ` _ \  \ \ /\ / / _ \| '__| |/ / __| '_ \ / _` |/ __/ _ \
 | | | | |_) | | | | | |  \ V  V / (_) | |  |   <\__ \ |_) | (_| | (_|  __/
 |_| |_| .__/|_| |_| |_|   \_/\_/ \___/|_|  |_|\_\___/ .__/ \__,_|\___\___|
       |_|                                           |_|
";

/// The banner text without styling
pub fn text() -> &'static str {
    BANNER
}

/// Print the banner to stdout, dimmed
pub fn print() {
    println!("{}", style::muted(text()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lines_fit_terminal() {
        for line in text().lines() {
            assert!(line.len() <= 80, "banner line too wide: {line}");
        }
        assert!(text().lines().count() >= 5);
    }
}
