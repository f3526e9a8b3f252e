#![cfg(feature = "serde")]

use oledvn_core::config::{CtcConfig, DialogConfig, RevealMode, ScrollParams, WaitMode};

#[test]
fn test_dialog_config_from_toml() {
    let config: DialogConfig = toml::from_str(
        r#"
        text_speed = 3
        timeout_ms = 2500
        reveal = "Instant"
        end_wait = "InputOrTimeout"
        "#,
    )
    .unwrap();

    assert_eq!(config.text_speed(), 3);
    assert_eq!(config.reveal, RevealMode::Instant);
    assert_eq!(config.mid_wait, WaitMode::Input);
    assert_eq!(config.gate_timeout(config.end_wait), Some(2500));
    assert_eq!(config.char_delay_ms(), 10);
    assert_eq!(config.marker, '`');
}

#[test]
fn test_empty_tables_use_defaults() {
    let dialog: DialogConfig = toml::from_str("").unwrap();
    assert_eq!(dialog, DialogConfig::default());

    let gate: CtcConfig = toml::from_str("").unwrap();
    assert_eq!(gate, CtcConfig::default());

    let scroll: ScrollParams = toml::from_str("").unwrap();
    assert_eq!(scroll, ScrollParams::default());
}

#[test]
fn test_ctc_config_from_toml() {
    let config: CtcConfig = toml::from_str(
        r#"
        indicator = "v"
        indicator_x = 120
        indicator_y = 0
        "#,
    )
    .unwrap();

    assert_eq!(config.indicator.as_str(), "v");
    assert_eq!((config.indicator_x, config.indicator_y), (120, 0));
    assert_eq!(config.poll_ms, 5);
}

#[test]
fn test_oversized_indicator_rejected() {
    let result: Result<CtcConfig, _> = toml::from_str(r#"indicator = "press any key""#);
    assert!(result.is_err());
}

#[test]
fn test_scroll_params_from_toml() {
    let params: ScrollParams = toml::from_str(
        r#"
        step = -4
        snap_to_end = true
        offset_y = -64
        step_delay_ms = 0
        "#,
    )
    .unwrap();

    assert_eq!(params.step, -4);
    assert!(params.snap_to_end);
    assert_eq!(params.offset_y, -64);
    assert_eq!(params.step_delay_ms(), 0);
    assert_eq!(params.end_delay_ms(), 500);
}
