//! # campus-settings
//!
//! Configuration for the Campus agent service, loaded from three layers
//! (in priority order):
//!
//! 1. **Compiled defaults** — [`CampusSettings::default()`]
//! 2. **User file** — `~/.campus/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `CAMPUS_*` / `GOOGLE_API_KEY` (highest)
//!
//! Settings are loaded once at startup and passed explicitly to whatever
//! needs them — there is no ambient singleton.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::SettingsError;
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::{AgentSettings, CampusSettings, ServerSettings};
