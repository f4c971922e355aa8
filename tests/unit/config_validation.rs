//! Unit tests for configuration validation.

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::Mock as PinMock;

use stepper_sequence::config::{validate_config, LineId, SystemConfig};
use stepper_sequence::error::{ConfigError, Error};
use stepper_sequence::{parse_config, AxisDriverBuilder};

type MockBuilder = AxisDriverBuilder<PinMock, PinMock, PinMock, NoopDelay>;

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[[axes]]
name = "x"
step_line = 2
direction_line = 3
enable_line = 4
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails when no axes are configured.
#[test]
fn test_empty_config_rejected() {
    let config: SystemConfig = toml::from_str("").expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::NoAxes))
    ));
}

/// Test validation fails when two axes share a line.
#[test]
fn test_shared_line_rejected() {
    let toml_str = r#"
[[axes]]
name = "x"
step_line = 2
direction_line = 3
enable_line = 4

[[axes]]
name = "y"
step_line = 5
direction_line = 3
enable_line = 7
"#;

    match parse_config(toml_str) {
        Err(Error::Config(ConfigError::DuplicateLine { line, first, second })) => {
            assert_eq!(line, 3);
            assert_eq!(first.as_str(), "x.direction");
            assert_eq!(second.as_str(), "y.direction");
        }
        other => panic!("expected duplicate line, got {:?}", other),
    }
}

/// Test validation fails when an axis reuses an indicator line.
#[test]
fn test_indicator_line_collision() {
    let toml_str = r#"
[indicators]
power_line = 4
motion_line = 9

[[axes]]
name = "x"
step_line = 2
direction_line = 3
enable_line = 4
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::DuplicateLine { line: 4, .. }))
    ));
}

/// Test validation fails for zero settle delay.
#[test]
fn test_zero_settle_delay() {
    let toml_str = r#"
[sequence]
settle_delay_ms = 0

[[axes]]
name = "x"
step_line = 2
direction_line = 3
enable_line = 4
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidSettleDelay(0)))
    ));
}

/// Test validation fails for an empty axis name.
#[test]
fn test_empty_axis_name() {
    let toml_str = r#"
[[axes]]
name = ""
step_line = 2
direction_line = 3
enable_line = 4
"#;

    let result = parse_config(toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::EmptyAxisName))));
}

/// Test that building axes from an edited configuration re-checks every line.
#[test]
fn test_from_config_rejects_colliding_config() {
    let mut config = SystemConfig::default();
    config.axes[1].step_line = LineId(4);
    config.indicators.motion_line = LineId(2);
    assert!(validate_config(&config).is_err());

    for name in ["axis_1", "axis_2"] {
        let result = MockBuilder::new().from_config(&config, name);
        assert!(
            matches!(result, Err(Error::Config(ConfigError::DuplicateLine { .. }))),
            "{} should be refused",
            name
        );
    }
}

/// Test that an untouched default configuration still builds.
#[test]
fn test_from_config_accepts_default_bench() {
    let config = SystemConfig::default();
    assert!(MockBuilder::new().from_config(&config, "axis_1").is_ok());
    assert!(MockBuilder::new().from_config(&config, "axis_2").is_ok());
}

