use thiserror::Error;

/// Unified error type for addon-version operations
#[derive(Error, Debug)]
pub enum AddonVersionError {
    #[error("{value} is not a valid ReleaseState")]
    InvalidState { value: String },

    #[error(
        "\"{input}\" is not a valid addon version string, e.g. \"1.0.0.1.1.2.93.0.0\" or \"1.0.0-ALPHA1-2.93.0\""
    )]
    Malformed { input: String },

    #[error("no host minimum version requirement specified")]
    MissingHostFloor,

    #[error("{field} cannot be incremented past u32::MAX")]
    Overflow { field: &'static str },

    #[error("semver conversion failed: {0}")]
    Semver(#[from] semver::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in addon-version
pub type Result<T> = std::result::Result<T, AddonVersionError>;

impl AddonVersionError {
    /// Create an invalid release state error naming the offending value
    pub fn invalid_state(value: impl ToString) -> Self {
        AddonVersionError::InvalidState {
            value: value.to_string(),
        }
    }

    /// Create a malformed version string error for the given input
    pub fn malformed(input: impl Into<String>) -> Self {
        AddonVersionError::Malformed {
            input: input.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AddonVersionError::Config(msg.into())
    }

    /// True when the error reports a missing host-application version floor
    pub fn is_missing_host_floor(&self) -> bool {
        matches!(self, AddonVersionError::MissingHostFloor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_names_value() {
        let err = AddonVersionError::invalid_state(0);
        assert_eq!(err.to_string(), "0 is not a valid ReleaseState");

        let err = AddonVersionError::invalid_state("GAMMA");
        assert_eq!(err.to_string(), "GAMMA is not a valid ReleaseState");
    }

    #[test]
    fn test_malformed_shows_both_encodings() {
        let err = AddonVersionError::malformed("1.0.0-ALPHA1");
        assert_eq!(
            err.to_string(),
            "\"1.0.0-ALPHA1\" is not a valid addon version string, e.g. \"1.0.0.1.1.2.93.0.0\" or \"1.0.0-ALPHA1-2.93.0\""
        );
    }

    #[test]
    fn test_missing_host_floor() {
        let err = AddonVersionError::MissingHostFloor;
        assert!(err.is_missing_host_floor());
        assert_eq!(
            err.to_string(),
            "no host minimum version requirement specified"
        );
        assert!(!AddonVersionError::malformed("x").is_missing_host_floor());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AddonVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (AddonVersionError::config("x"), "Configuration error"),
            (AddonVersionError::Overflow { field: "patch" }, "patch"),
            (AddonVersionError::malformed("1.2"), "\"1.2\""),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
