use super::*;

use std::{
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_file(contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("advisor_config_test_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(SETTINGS_FILE);
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_from(Path::new("/nonexistent/advisor.toml"), |_| None);
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.service_url, "http://localhost:8000");
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file("service_url = \"http://advisor.internal:9000\"\nlog_filter = \"debug\"\n");

    let settings = load_settings_from(&path, |_| None);

    assert_eq!(settings.service_url, "http://advisor.internal:9000");
    assert_eq!(settings.log_filter, "debug");
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn environment_overrides_file() {
    let path = temp_settings_file("service_url = \"http://from-file:1\"\n");

    let settings = load_settings_from(&path, |name| match name {
        "APP__SERVICE_URL" => Some("http://from-env:2".to_string()),
        "ADVISOR_LOG" => Some("client_core=trace".to_string()),
        _ => None,
    });

    assert_eq!(settings.service_url, "http://from-env:2");
    assert_eq!(settings.log_filter, "client_core=trace");
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn blank_env_and_broken_file_are_ignored() {
    let path = temp_settings_file("service_url = [not valid");

    let settings = load_settings_from(&path, |name| {
        (name == "ADVISOR_SERVICE_URL").then(|| "   ".to_string())
    });

    assert_eq!(settings, Settings::default());
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}
