use std::{collections::HashMap, fs, path::Path};

pub const SETTINGS_FILE: &str = "advisor.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub service_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8000".into(),
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then `advisor.toml` in the working directory, then environment overrides.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(file) {
        apply_file(&mut settings, &raw);
    }

    for name in ["ADVISOR_SERVICE_URL", "APP__SERVICE_URL"] {
        if let Some(v) = non_empty(env(name)) {
            settings.service_url = v;
        }
    }
    for name in ["ADVISOR_LOG", "APP__LOG_FILTER"] {
        if let Some(v) = non_empty(env(name)) {
            settings.log_filter = v;
        }
    }

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("service_url") {
        settings.service_url = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
