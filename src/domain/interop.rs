//! Conversion between addon versions and `semver::Version`
//!
//! The semver-like encoding is a valid semantic version: the release state,
//! increment and host floor form the pre-release part and the build number
//! the build metadata. This lets addon versions flow into tooling that only
//! understands plain semver.

use crate::domain::grammar;
use crate::domain::version::Version;
use crate::error::{AddonVersionError, Result};

impl Version {
    /// Returns the semver-like encoding as a `semver::Version`
    pub fn to_semver_version(&self) -> Result<semver::Version> {
        Ok(semver::Version::parse(&self.to_semver())?)
    }
}

impl TryFrom<&semver::Version> for Version {
    type Error = AddonVersionError;

    fn try_from(value: &semver::Version) -> Result<Self> {
        let rendered = value.to_string();
        if grammar::match_semver(&rendered).is_none() {
            return Err(AddonVersionError::malformed(rendered));
        }
        Version::parse(&rendered)
    }
}
