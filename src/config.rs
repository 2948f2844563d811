use crate::domain::VersionBump;
use crate::error::{AddonVersionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "addonversion.toml";

/// Represents the complete configuration for addon-version.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub bump: BumpConfig,
}

/// Rendering used when printing a version
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `1.0.0.1.1.2.93.0.0`
    #[default]
    Dotted,
    /// `1.0.0-ALPHA1-2.93.0`
    Semver,
    /// `(1, 0, 0, 1, 1, 2, 93, 0, 0)`
    Tuple,
}

impl std::str::FromStr for OutputFormat {
    type Err = AddonVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dotted" => Ok(OutputFormat::Dotted),
            "semver" => Ok(OutputFormat::Semver),
            "tuple" => Ok(OutputFormat::Tuple),
            other => Err(AddonVersionError::config(format!(
                "unknown output format '{}', expected dotted, semver or tuple",
                other
            ))),
        }
    }
}

/// Output settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Bump settings.
///
/// `host` pins the host-application version floor on every bump that does
/// not carry its own.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BumpConfig {
    #[serde(default)]
    pub host: Option<[u32; 3]>,
}

impl BumpConfig {
    /// Fills in the configured host floor when the request has none
    pub fn apply(&self, mut request: VersionBump) -> VersionBump {
        if request.host.is_none() {
            if let Some([release, feature, patch]) = self.host {
                request.host = Some((release, feature, patch));
            }
        }
        request
    }
}

/// Parses configuration from TOML text
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text)?;
    if let Some([0, _, _]) = config.bump.host {
        return Err(AddonVersionError::config(
            "bump.host must have a nonzero release component",
        ));
    }
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `addonversion.toml` in current directory
/// 3. `.addonversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        debug!(path, "loading configuration");
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        debug!(path = CONFIG_FILE_NAME, "loading configuration");
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            debug!(path = %config_path.display(), "loading configuration");
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
