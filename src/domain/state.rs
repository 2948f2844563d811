//! Release state handling for addon versions
//!
//! A release matures through four ordered stages: ALPHA, BETA, RC and STABLE.
//! Each stage carries a fixed ordinal (1-4) which is what the dotted encoding
//! and the canonical tuple store.

use crate::error::{AddonVersionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maturity stage of a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReleaseState {
    Alpha = 1,
    Beta = 2,
    Rc = 3,
    Stable = 4,
}

impl ReleaseState {
    /// All states in ascending order
    pub const ALL: [ReleaseState; 4] = [
        ReleaseState::Alpha,
        ReleaseState::Beta,
        ReleaseState::Rc,
        ReleaseState::Stable,
    ];

    /// Returns the next state. STABLE cannot be bumped and remains STABLE.
    pub fn bump(self) -> Self {
        match self {
            ReleaseState::Alpha => ReleaseState::Beta,
            ReleaseState::Beta => ReleaseState::Rc,
            ReleaseState::Rc | ReleaseState::Stable => ReleaseState::Stable,
        }
    }

    /// Returns a release state from either its name or its ordinal.
    ///
    /// Names are case-sensitive (`"ALPHA"`, `"BETA"`, `"RC"`, `"STABLE"`);
    /// anything else is read as a decimal ordinal in the range 1-4.
    ///
    /// # Examples
    /// ```
    /// use addon_version::ReleaseState;
    ///
    /// assert_eq!(ReleaseState::from_value("1").unwrap(), ReleaseState::Alpha);
    /// assert_eq!(ReleaseState::from_value("BETA").unwrap(), ReleaseState::Beta);
    /// assert!(ReleaseState::from_value("0").is_err());
    /// ```
    pub fn from_value(value: &str) -> Result<Self> {
        value.parse()
    }

    /// Ordinal used by the dotted encoding and the canonical tuple
    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            ReleaseState::Alpha => "ALPHA",
            ReleaseState::Beta => "BETA",
            ReleaseState::Rc => "RC",
            ReleaseState::Stable => "STABLE",
        }
    }
}

impl TryFrom<u32> for ReleaseState {
    type Error = AddonVersionError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(ReleaseState::Alpha),
            2 => Ok(ReleaseState::Beta),
            3 => Ok(ReleaseState::Rc),
            4 => Ok(ReleaseState::Stable),
            other => Err(AddonVersionError::invalid_state(other)),
        }
    }
}

impl FromStr for ReleaseState {
    type Err = AddonVersionError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(state) = ReleaseState::ALL.into_iter().find(|st| st.name() == s) {
            return Ok(state);
        }

        let ordinal = s
            .parse::<u32>()
            .map_err(|_| AddonVersionError::invalid_state(s))?;
        ReleaseState::try_from(ordinal)
    }
}

impl fmt::Display for ReleaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
