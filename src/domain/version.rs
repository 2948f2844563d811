use crate::domain::bump::{BumpAxis, VersionBump};
use crate::domain::grammar::{self, RawFields};
use crate::domain::state::ReleaseState;
use crate::error::{AddonVersionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Addon version tied to a minimum host-application version.
///
/// Fields are compared in declaration order, which is also the sort order of
/// both string encodings. A `Version` can only be obtained through a validated
/// path (parsing, [`Version::new`], [`Version::from_tuple`] or
/// [`Version::bump`]), so the host floor release is never zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    release: u32,
    feature: u32,
    patch: u32,
    state: ReleaseState,
    increment: u32,
    brelease: u32,
    bfeature: u32,
    bpatch: u32,
    build: u32,
}

impl Version {
    /// Create a new version, validating the host floor
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        release: u32,
        feature: u32,
        patch: u32,
        state: ReleaseState,
        increment: u32,
        brelease: u32,
        bfeature: u32,
        bpatch: u32,
        build: u32,
    ) -> Result<Self> {
        let version = Version {
            release,
            feature,
            patch,
            state,
            increment,
            brelease,
            bfeature,
            bpatch,
            build,
        };
        version.validate_host_floor()?;
        Ok(version)
    }

    /// Create a version from its canonical tuple, the state given as ordinal
    pub fn from_tuple(tuple: [u32; 9]) -> Result<Self> {
        let [release, feature, patch, state, increment, brelease, bfeature, bpatch, build] =
            tuple;
        Version::new(
            release,
            feature,
            patch,
            ReleaseState::try_from(state)?,
            increment,
            brelease,
            bfeature,
            bpatch,
            build,
        )
    }

    /// Canonical tuple as used in the host application's addon metadata
    pub fn to_tuple(&self) -> [u32; 9] {
        [
            self.release,
            self.feature,
            self.patch,
            self.state.value(),
            self.increment,
            self.brelease,
            self.bfeature,
            self.bpatch,
            self.build,
        ]
    }

    /// Parse either a dotted or a semver addon version string.
    ///
    /// The dotted encoding is tried first. Only when it does not match at all
    /// is the semver encoding tried. A matched string whose host floor is zero
    /// always fails with [`AddonVersionError::MissingHostFloor`].
    ///
    /// # Example
    /// ```
    /// use addon_version::{ReleaseState, Version};
    ///
    /// let dotted = Version::parse("1.0.0.1.1.2.93.0.0").unwrap();
    /// let semver = Version::parse("1.0.0-ALPHA1-2.93.0").unwrap();
    /// assert_eq!(dotted, semver);
    /// assert_eq!(dotted.state(), ReleaseState::Alpha);
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        if let Some(raw) = grammar::match_dotted(input) {
            return Version::from_raw(&raw, input);
        }

        debug!(input, "dotted form did not match, trying semver form");
        let raw = grammar::match_semver(input).ok_or_else(|| AddonVersionError::malformed(input))?;

        Version::from_raw(&raw, input).map_err(|err| {
            if err.is_missing_host_floor() {
                err
            } else {
                AddonVersionError::malformed(input)
            }
        })
    }

    fn from_raw(raw: &RawFields<'_>, input: &str) -> Result<Self> {
        debug!(input, grammar = ?raw.grammar, "decoding addon version");
        let number = |digits: &str| {
            digits
                .parse::<u32>()
                .map_err(|_| AddonVersionError::malformed(input))
        };
        let optional = |digits: Option<&str>| digits.map_or(Ok(0), number);

        Version::new(
            number(raw.release)?,
            number(raw.feature)?,
            number(raw.patch)?,
            ReleaseState::from_value(raw.state)?,
            optional(raw.increment)?,
            number(raw.brelease)?,
            number(raw.bfeature)?,
            number(raw.bpatch)?,
            optional(raw.build)?,
        )
    }

    /// Semver-like rendering, e.g. `1.0.0-ALPHA1-2.93.0+234`.
    ///
    /// The increment is left out for STABLE and the build suffix is left out
    /// when the build is zero.
    pub fn to_semver(&self) -> String {
        let mut out = format!(
            "{}.{}.{}-{}",
            self.release, self.feature, self.patch, self.state
        );
        if self.state != ReleaseState::Stable {
            out.push_str(&self.increment.to_string());
        }
        out.push_str(&format!(
            "-{}.{}.{}",
            self.brelease, self.bfeature, self.bpatch
        ));
        if self.build != 0 {
            out.push_str(&format!("+{}", self.build));
        }
        out
    }

    /// Derive a new version advancing exactly one axis.
    ///
    /// - release: release + 1, feature 0, then the pre-release reset
    /// - feature: feature + 1, then the pre-release reset
    /// - patch: patch + 1
    /// - state: next release state, increment 1
    /// - increment: increment + 1, unless STABLE
    ///
    /// The pre-release reset sets patch 0, state ALPHA and increment 1. Any
    /// fired axis clears the build, after which the requested build and host
    /// floor overrides are applied.
    pub fn bump(&self, request: &VersionBump) -> Result<Self> {
        let mut next = *self;
        let axis = request.axis();

        match axis {
            Some(BumpAxis::Release) => {
                next.release = increment_field(self.release, "release")?;
                next.feature = 0;
                next.reset_pre_release();
            }
            Some(BumpAxis::Feature) => {
                next.feature = increment_field(self.feature, "feature")?;
                next.reset_pre_release();
            }
            Some(BumpAxis::Patch) => {
                next.patch = increment_field(self.patch, "patch")?;
            }
            Some(BumpAxis::State) => {
                next.state = self.state.bump();
                // Landing on STABLE keeps increment 1 as well; the increment is
                // not rendered in the semver form for STABLE.
                next.increment = 1;
            }
            Some(BumpAxis::Increment) => {
                if !self.is_stable() {
                    next.increment = increment_field(self.increment, "increment")?;
                }
            }
            None => {}
        }

        if axis.is_some() {
            next.build = 0;
        }
        if let Some(build) = request.build {
            next.build = build;
        }
        if let Some((brelease, bfeature, bpatch)) = request.host {
            next.brelease = brelease;
            next.bfeature = bfeature;
            next.bpatch = bpatch;
        }

        debug!(from = %self, to = %next, ?axis, "bumped addon version");
        next.validate_host_floor()?;
        Ok(next)
    }

    fn reset_pre_release(&mut self) {
        self.patch = 0;
        self.state = ReleaseState::Alpha;
        self.increment = 1;
    }

    fn validate_host_floor(&self) -> Result<()> {
        if self.brelease == 0 {
            return Err(AddonVersionError::MissingHostFloor);
        }
        Ok(())
    }

    pub fn release(&self) -> u32 {
        self.release
    }

    pub fn feature(&self) -> u32 {
        self.feature
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn state(&self) -> ReleaseState {
        self.state
    }

    pub fn increment(&self) -> u32 {
        self.increment
    }

    pub fn brelease(&self) -> u32 {
        self.brelease
    }

    pub fn bfeature(&self) -> u32 {
        self.bfeature
    }

    pub fn bpatch(&self) -> u32 {
        self.bpatch
    }

    /// Build number, 0 when absent
    pub fn build(&self) -> u32 {
        self.build
    }

    /// Minimum compatible host-application version
    pub fn host_floor(&self) -> (u32, u32, u32) {
        (self.brelease, self.bfeature, self.bpatch)
    }

    pub fn is_alpha(&self) -> bool {
        self.state == ReleaseState::Alpha
    }

    pub fn is_beta(&self) -> bool {
        self.state == ReleaseState::Beta
    }

    pub fn is_rc(&self) -> bool {
        self.state == ReleaseState::Rc
    }

    pub fn is_stable(&self) -> bool {
        self.state == ReleaseState::Stable
    }
}

fn increment_field(value: u32, field: &'static str) -> Result<u32> {
    value
        .checked_add(1)
        .ok_or(AddonVersionError::Overflow { field })
}

impl FromStr for Version {
    type Err = AddonVersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = AddonVersionError;

    fn try_from(value: String) -> Result<Self> {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

/// Dotted rendering, e.g. `1.0.0.1.1.2.93.0.0`
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.to_tuple().iter().map(u32::to_string).collect();
        f.write_str(&parts.join("."))
    }
}
