//! Settings loading: defaults ← file ← environment.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::SettingsError;
use crate::types::CampusSettings;

/// Default settings file location: `~/.campus/settings.json`.
pub fn settings_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".campus").join("settings.json"))
}

/// Load settings from the default location with env overrides applied.
///
/// A missing file is not an error — defaults apply. A present but malformed
/// file is.
pub fn load_settings() -> Result<CampusSettings, SettingsError> {
    let mut settings = match settings_path() {
        Some(path) if path.exists() => load_file(&path)?,
        _ => CampusSettings::default(),
    };
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

/// Load settings from a specific file with env overrides applied.
pub fn load_settings_from_path(path: &Path) -> Result<CampusSettings, SettingsError> {
    let mut settings = load_file(path)?;
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn load_file(path: &Path) -> Result<CampusSettings, SettingsError> {
    debug!(?path, "loading settings file");
    let raw = std::fs::read_to_string(path)?;
    let file_value: Value = serde_json::from_str(&raw)?;
    let mut merged = serde_json::to_value(CampusSettings::default())?;
    deep_merge(&mut merged, file_value);
    Ok(serde_json::from_value(merged)?)
}

/// Recursively merge `overlay` into `base`. Objects merge key-by-key;
/// everything else (including arrays) is replaced wholesale.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        let _ = base_map.insert(key, value);
                    }
                }
            }
        }
        (base_slot, overlay_value) => *base_slot = overlay_value,
    }
}

/// Apply `CAMPUS_*` / `GOOGLE_API_KEY` overrides. The getter is injected so
/// tests don't have to mutate process-wide environment state.
fn apply_env_overrides(settings: &mut CampusSettings, get: impl Fn(&str) -> Option<String>) {
    if let Some(app_name) = get("CAMPUS_APP_NAME") {
        settings.app_name = app_name;
    }
    if let Some(host) = get("CAMPUS_HOST") {
        settings.server.host = host;
    }
    if let Some(port) = get("CAMPUS_PORT").and_then(|p| p.parse().ok()) {
        settings.server.port = port;
    }
    if let Some(model) = get("CAMPUS_MODEL") {
        settings.agent.model = model;
    }
    if let Some(api_key) = get("GOOGLE_API_KEY") {
        settings.agent.api_key = Some(api_key);
    }
    if let Some(timeout) = get("CAMPUS_TURN_TIMEOUT_MS").and_then(|t| t.parse().ok()) {
        settings.agent.turn_timeout_ms = Some(timeout);
    }
}
