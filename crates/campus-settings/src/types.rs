//! Settings schema with compiled defaults.

use serde::{Deserialize, Serialize};

/// Top-level settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampusSettings {
    /// Application name — the first component of every session key.
    pub app_name: String,
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Agent settings.
    pub agent: AgentSettings,
}

impl Default for CampusSettings {
    fn default() -> Self {
        Self {
            app_name: "college_rag_app".to_owned(),
            server: ServerSettings::default(),
            agent: AgentSettings::default(),
        }
    }
}

/// HTTP listener settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 5000,
        }
    }
}

/// Agent settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentSettings {
    /// Gemini model name.
    pub model: String,
    /// API key. Usually supplied via the `GOOGLE_API_KEY` env var rather
    /// than the settings file.
    pub api_key: Option<String>,
    /// Per-turn deadline in milliseconds. Absent means unbounded — the
    /// upstream-faithful default.
    pub turn_timeout_ms: Option<u64>,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_owned(),
            api_key: None,
            turn_timeout_ms: None,
        }
    }
}
