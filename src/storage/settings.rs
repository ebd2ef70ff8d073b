//! Settings storage
//!
//! Manages persistence of application settings.

use crate::storage::{get_data_dir, write_atomic, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Gemini model used for replies
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the Generative Language API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Number of most recent messages sent to the model
    #[serde(default = "default_history_window")]
    pub history_window: usize,
    /// Lower bound of the pause before the persona answers
    #[serde(default = "default_reply_delay_min_ms")]
    pub reply_delay_min_ms: u64,
    /// Upper bound of the pause before the persona answers
    #[serde(default = "default_reply_delay_max_ms")]
    pub reply_delay_max_ms: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_history_window() -> usize {
    crate::llm::prompt::HISTORY_WINDOW_SIZE
}

fn default_reply_delay_min_ms() -> u64 {
    1000
}

fn default_reply_delay_max_ms() -> u64 {
    2000
}

const MAX_REPLY_DELAY_MS: u64 = 10_000;

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base_url: default_api_base_url(),
            api_key_env: default_api_key_env(),
            history_window: default_history_window(),
            reply_delay_min_ms: default_reply_delay_min_ms(),
            reply_delay_max_ms: default_reply_delay_max_ms(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Blank strings fall back to defaults and numbers are clamped to sane ranges.
    pub fn validate(&mut self) {
        if self.model.trim().is_empty() {
            self.model = default_model();
        }

        if self.api_base_url.trim().is_empty() {
            self.api_base_url = default_api_base_url();
        }
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();

        if self.api_key_env.trim().is_empty() {
            self.api_key_env = default_api_key_env();
        }

        self.history_window = self.history_window.clamp(1, 100);

        self.reply_delay_min_ms = self.reply_delay_min_ms.min(MAX_REPLY_DELAY_MS);
        self.reply_delay_max_ms = self
            .reply_delay_max_ms
            .clamp(self.reply_delay_min_ms, MAX_REPLY_DELAY_MS);
    }

    /// Apply `TWINCHAT_*` environment overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(model) = lookup("TWINCHAT_MODEL").filter(|v| !v.trim().is_empty()) {
            tracing::info!("Model overridden from environment: {}", model);
            self.model = model.trim().to_string();
        }
        if let Some(url) = lookup("TWINCHAT_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            tracing::info!("API base URL overridden from environment: {}", url);
            self.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted.
/// A missing file is written out with defaults so it can be edited.
pub fn load_settings() -> AppSettings {
    let mut settings = match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    };

    settings.apply_env_overrides();
    settings.validate();
    settings
}

/// Load settings from a specific file, creating it if absent
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, writing defaults");
        let settings = AppSettings::default();
        save_settings_to(path, &settings)?;
        return Ok(settings);
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(settings)?;
    write_atomic(path, &json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}
