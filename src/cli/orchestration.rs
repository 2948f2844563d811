//! Command orchestration logic
//!
//! Each command takes a plain argument struct and returns the text to print.
//! Keeping clap out of this layer lets the commands be called
//! programmatically and tested without spawning the binary.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{Config, OutputFormat};
use crate::domain::{Version, VersionBump};
use crate::error::AddonVersionError;
use crate::ui;

/// Arguments for `show`
#[derive(Debug, Clone, PartialEq)]
pub struct ShowArgs {
    /// Version string in either encoding
    pub version: String,

    /// Output format, falls back to the configured one
    pub format: Option<OutputFormat>,
}

/// Arguments for `bump`
#[derive(Debug, Clone, PartialEq)]
pub struct BumpArgs {
    pub version: String,
    pub request: VersionBump,
    pub format: Option<OutputFormat>,
}

/// Arguments for `compare`
#[derive(Debug, Clone, PartialEq)]
pub struct CompareArgs {
    pub left: String,
    pub right: String,
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// The input version, rendered in the output format
    pub from: String,

    /// The bumped version, rendered in the output format
    pub to: String,
}

/// Parses and re-renders a version.
pub fn run_show(args: &ShowArgs, config: &Config) -> Result<String> {
    let version = Version::parse(&args.version)?;
    let format = args.format.unwrap_or(config.output.format);
    Ok(ui::render_version(&version, format))
}

/// Bumps a version.
///
/// The configured host floor is used when the request does not carry one.
pub fn run_bump(args: &BumpArgs, config: &Config) -> Result<BumpOutcome> {
    let version = Version::parse(&args.version)?;
    let request = config.bump.apply(args.request.clone());
    let bumped = version.bump(&request)?;
    info!(from = %version, to = %bumped, "bumped version");

    let format = args.format.unwrap_or(config.output.format);
    Ok(BumpOutcome {
        from: ui::render_version(&version, format),
        to: ui::render_version(&bumped, format),
    })
}

/// Compares two versions, returning `<`, `=` or `>`.
pub fn run_compare(args: &CompareArgs) -> Result<String> {
    let left = Version::parse(&args.left).context("left-hand version")?;
    let right = Version::parse(&args.right).context("right-hand version")?;
    let ordering: Ordering = left.cmp(&right);
    Ok(ui::render_ordering(ordering).to_string())
}

/// Parses a host-application version triple such as `2.93.0`.
pub fn parse_host(value: &str) -> Result<(u32, u32, u32), AddonVersionError> {
    let invalid = || {
        AddonVersionError::config(format!(
            "invalid host version '{}' - expected RELEASE.FEATURE.PATCH",
            value
        ))
    };

    let parts: Vec<&str> = value.split('.').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let mut numbers = [0u32; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part.parse::<u32>().map_err(|_| invalid())?;
    }

    let [release, feature, patch] = numbers;
    Ok((release, feature, patch))
}
