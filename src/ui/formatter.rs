//! Pure formatting functions for UI output.
//!
//! Rendering functions return strings so they can be tested; the `display_*`
//! functions print to stderr so stdout only ever carries a version.

use std::cmp::Ordering;

use console::style;

use crate::config::OutputFormat;
use crate::domain::Version;

/// Render a version in the requested format.
pub fn render_version(version: &Version, format: OutputFormat) -> String {
    match format {
        OutputFormat::Dotted => version.to_string(),
        OutputFormat::Semver => version.to_semver(),
        OutputFormat::Tuple => render_tuple(version),
    }
}

/// Render the canonical tuple the way addon metadata spells it.
pub fn render_tuple(version: &Version) -> String {
    let parts: Vec<String> = version.to_tuple().iter().map(u32::to_string).collect();
    format!("({})", parts.join(", "))
}

pub fn render_ordering(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Display a version change.
///
/// # Arguments
/// * `from` - Version before the bump, rendered in the output format
/// * `to` - Version after the bump, rendered in the output format
pub fn display_bump(from: &str, to: &str) {
    eprintln!("{}", style("Version bump:").bold());
    eprintln!("  From: {}", style(from).red());
    eprintln!("  To:   {}", style(to).green());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Version {
        Version::parse("1.2.3-BETA2-2.93.0+5").unwrap()
    }

    #[test]
    fn test_render_dotted() {
        assert_eq!(
            render_version(&sample(), OutputFormat::Dotted),
            "1.2.3.2.2.2.93.0.5"
        );
    }

    #[test]
    fn test_render_semver() {
        assert_eq!(
            render_version(&sample(), OutputFormat::Semver),
            "1.2.3-BETA2-2.93.0+5"
        );
    }

    #[test]
    fn test_render_tuple() {
        assert_eq!(
            render_version(&sample(), OutputFormat::Tuple),
            "(1, 2, 3, 2, 2, 2, 93, 0, 5)"
        );
    }

    #[test]
    fn test_render_ordering() {
        assert_eq!(render_ordering(Ordering::Less), "<");
        assert_eq!(render_ordering(Ordering::Equal), "=");
        assert_eq!(render_ordering(Ordering::Greater), ">");
    }

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_bump() {
        // Visual verification test - output is printed to stderr
        display_bump("1.0.0.1.1.2.93.0.0", "1.0.1.1.1.2.93.0.0");
    }
}
