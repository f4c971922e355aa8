//! Unit tests for TOML configuration parsing.

use stepper_sequence::config::{ActiveLevel, LineId, SystemConfig};
use stepper_sequence::{Microseconds, Milliseconds, Steps};

const BENCH_CONFIG: &str = r#"
[indicators]
power_line = 8
motion_line = 9
active = "low"

[sequence]
step_count = 1600
pulse_width_us = 400
settle_delay_ms = 500

[[axes]]
name = "ra"
step_line = 2
direction_line = 3
enable_line = 4

[[axes]]
name = "dec"
step_line = 5
direction_line = 6
enable_line = 7
enable_active = "high"
invert_direction = true
"#;

/// Test parsing a complete bench configuration.
#[test]
fn test_parse_full_config() {
    let config: SystemConfig = toml::from_str(BENCH_CONFIG).expect("Failed to parse TOML");

    assert_eq!(config.indicators.power_line, LineId(8));
    assert_eq!(config.indicators.active, ActiveLevel::Low);
    assert_eq!(config.sequence.step_count, Steps(1600));
    assert_eq!(config.sequence.pulse_width, Microseconds(400));
    assert_eq!(config.sequence.settle_delay, Milliseconds(500));

    let dec = config.axis("dec").expect("dec axis should exist");
    assert_eq!(dec.enable_active, ActiveLevel::High);
    assert!(dec.invert_direction);
}

/// Test that axis order follows the document.
#[test]
fn test_axis_order_preserved() {
    let config: SystemConfig = toml::from_str(BENCH_CONFIG).expect("Failed to parse TOML");
    let names: Vec<&str> = config.axis_names().collect();
    assert_eq!(names, ["ra", "dec"]);
}

/// Test defaults for omitted sections and fields.
#[test]
fn test_defaults_applied() {
    let toml_str = r#"
[[axes]]
name = "only"
step_line = 10
direction_line = 11
enable_line = 12
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axis("only").unwrap();
    assert_eq!(axis.enable_active, ActiveLevel::Low);
    assert!(!axis.invert_direction);
    assert_eq!(config.indicators.active, ActiveLevel::High);
    assert_eq!(config.sequence.step_count, Steps(3200));
    assert_eq!(config.sequence.pulse_width, Microseconds(800));
    assert_eq!(config.sequence.settle_delay, Milliseconds(1000));
}

/// Test that an unknown polarity is a parse error.
#[test]
fn test_invalid_polarity() {
    let toml_str = r#"
[[axes]]
name = "x"
step_line = 2
direction_line = 3
enable_line = 4
enable_active = "sideways"
"#;

    assert!(toml::from_str::<SystemConfig>(toml_str).is_err());
}

/// Test that more axes than the capacity fail to parse.
#[test]
fn test_too_many_axes() {
    let mut toml_str = String::new();
    for i in 0..9u8 {
        toml_str.push_str(&format!(
            "[[axes]]\nname = \"a{i}\"\nstep_line = {}\ndirection_line = {}\nenable_line = {}\n\n",
            i * 3 + 20,
            i * 3 + 21,
            i * 3 + 22
        ));
    }

    assert!(toml::from_str::<SystemConfig>(&toml_str).is_err());
}
