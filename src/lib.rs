pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{BumpAxis, ReleaseState, Version, VersionBump};
pub use error::{AddonVersionError, Result};
