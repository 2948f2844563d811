use addon_version::cli::{
    run_bump, run_compare, run_show, BumpArgs, BumpOutcome, CompareArgs, ShowArgs,
};
use addon_version::config::{BumpConfig, Config, OutputFormat, OutputConfig};
use addon_version::{AddonVersionError, VersionBump};

fn semver_config() -> Config {
    Config {
        output: OutputConfig {
            format: OutputFormat::Semver,
        },
        bump: BumpConfig::default(),
    }
}

#[test]
fn test_show_converts_between_encodings() {
    let args = ShowArgs {
        version: "1.0.0-ALPHA1-2.93.0+7".to_string(),
        format: Some(OutputFormat::Dotted),
    };
    assert_eq!(
        run_show(&args, &Config::default()).unwrap(),
        "1.0.0.1.1.2.93.0.7"
    );
}

#[test]
fn test_show_tuple() {
    let args = ShowArgs {
        version: "1.0.0.1.1.2.93.0".to_string(),
        format: Some(OutputFormat::Tuple),
    };
    assert_eq!(
        run_show(&args, &Config::default()).unwrap(),
        "(1, 0, 0, 1, 1, 2, 93, 0, 0)"
    );
}

#[test]
fn test_show_reports_error_kind() {
    let args = ShowArgs {
        version: "1.0.0-ALPHA1-0.0.0".to_string(),
        format: None,
    };
    let err = run_show(&args, &Config::default()).unwrap_err();
    let kind = err.downcast_ref::<AddonVersionError>().unwrap();
    assert!(kind.is_missing_host_floor());
}

#[test]
fn test_bump_feature() {
    let args = BumpArgs {
        version: "1.4.2-RC1-2.93.0+3".to_string(),
        request: VersionBump::new().feature(),
        format: None,
    };
    let outcome = run_bump(&args, &semver_config()).unwrap();
    assert_eq!(
        outcome,
        BumpOutcome {
            from: "1.4.2-RC1-2.93.0+3".to_string(),
            to: "1.5.0-ALPHA1-2.93.0".to_string(),
        }
    );
}

#[test]
fn test_bump_uses_configured_host() {
    let mut config = semver_config();
    config.bump.host = Some([3, 6, 0]);
    let args = BumpArgs {
        version: "1.0.0-BETA1-2.93.0".to_string(),
        request: VersionBump::new().increment(),
        format: None,
    };
    assert_eq!(run_bump(&args, &config).unwrap().to, "1.0.0-BETA2-3.6.0");
}

#[test]
fn test_bump_explicit_host_beats_config() {
    let mut config = semver_config();
    config.bump.host = Some([3, 6, 0]);
    let args = BumpArgs {
        version: "1.0.0-BETA1-2.93.0".to_string(),
        request: VersionBump::new().patch().with_host(4, 0, 0),
        format: Some(OutputFormat::Dotted),
    };
    assert_eq!(run_bump(&args, &config).unwrap().to, "1.0.1.2.1.4.0.0.0");
}

#[test]
fn test_compare() {
    let cases = [
        ("1.0.0-ALPHA1-2.93.0", "1.0.0-BETA1-2.93.0", "<"),
        ("1.0.0.1.1.2.93.0.0", "1.0.0-ALPHA1-2.93.0", "="),
        ("1.0.1-ALPHA1-2.93.0", "1.0.0-STABLE-2.93.0", ">"),
    ];
    for (left, right, expected) in cases {
        let args = CompareArgs {
            left: left.to_string(),
            right: right.to_string(),
        };
        assert_eq!(run_compare(&args).unwrap(), expected, "{} vs {}", left, right);
    }
}

#[test]
fn test_compare_names_failing_side() {
    let args = CompareArgs {
        left: "1.0.0-ALPHA1-2.93.0".to_string(),
        right: "nonsense".to_string(),
    };
    let err = run_compare(&args).unwrap_err();
    assert!(format!("{:#}", err).starts_with("right-hand version"));
    assert!(matches!(
        err.downcast_ref::<AddonVersionError>(),
        Some(AddonVersionError::Malformed { .. })
    ));
}
