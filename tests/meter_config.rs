// tests/meter_config.rs
// Config loading through the env override. These tests mutate process env,
// so they run serially.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;

use softmax_confidence_meter::config::{MeterConfig, ENV_METER_CONFIG_PATH};

fn tmp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "meter_cfg_{}_{}",
        std::time::UNIX_EPOCH.elapsed().unwrap().as_millis(),
        name
    ));
    fs::write(&path, content).expect("write tmp config");
    path
}

#[test]
#[serial]
fn env_path_override_is_honored() {
    let path = tmp_file("override.toml", "default_temperature = 0.4\nmax_bars = 3");
    std::env::set_var(ENV_METER_CONFIG_PATH, &path);

    let cfg = MeterConfig::from_env_or_default();
    assert_eq!(cfg.default_temperature, 0.4);
    assert_eq!(cfg.max_bars, 3);
    assert!(cfg.show_percent);

    std::env::remove_var(ENV_METER_CONFIG_PATH);
    let _ = fs::remove_file(path);
}

#[test]
#[serial]
fn unreadable_env_path_falls_back_to_defaults() {
    std::env::set_var(ENV_METER_CONFIG_PATH, "/definitely/not/here.toml");

    let cfg = MeterConfig::from_env_or_default();
    assert_eq!(cfg, MeterConfig::default());

    std::env::remove_var(ENV_METER_CONFIG_PATH);
}

#[test]
#[serial]
fn malformed_file_falls_back_to_defaults() {
    let path = tmp_file("broken.toml", "max_bars = \"lots\"");
    std::env::set_var(ENV_METER_CONFIG_PATH, &path);

    let cfg = MeterConfig::from_env_or_default();
    assert_eq!(cfg, MeterConfig::default());

    std::env::remove_var(ENV_METER_CONFIG_PATH);
    let _ = fs::remove_file(path);
}

#[test]
#[serial]
fn non_positive_configured_temperature_is_replaced() {
    let path = tmp_file("zero_temp.toml", "default_temperature = 0.0");
    std::env::set_var(ENV_METER_CONFIG_PATH, &path);

    let cfg = MeterConfig::from_env_or_default();
    assert_eq!(cfg.default_temperature, 1.0);

    std::env::remove_var(ENV_METER_CONFIG_PATH);
    let _ = fs::remove_file(path);
}
