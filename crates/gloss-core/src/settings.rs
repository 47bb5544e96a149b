//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub language: LanguageSettings,
    /// Feature value (lower-case) → gloss abbreviation.
    pub abbreviations: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageSettings {
    /// Used when detection fails or yields an unsupported code.
    pub fallback: String,
    pub supported: Vec<String>,
}

impl LanguageSettings {
    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.iter().any(|s| s == code)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let invalid = |field: String, reason: &str| SettingsError::InvalidValue {
        field,
        reason: reason.to_string(),
    };

    if s.language.supported.is_empty() {
        return Err(invalid("language.supported".into(), "must not be empty"));
    }
    if s.language.fallback.is_empty() {
        return Err(invalid("language.fallback".into(), "must not be empty"));
    }
    if !s.language.is_supported(&s.language.fallback) {
        return Err(invalid(
            "language.fallback".into(),
            "must be listed in language.supported",
        ));
    }

    for (key, value) in &s.abbreviations {
        if key.is_empty() {
            return Err(invalid("abbreviations".into(), "keys must not be empty"));
        }
        if key.to_lowercase() != *key {
            return Err(invalid(
                format!("abbreviations.{key}"),
                "keys must be lower-case",
            ));
        }
        if value.trim().is_empty() {
            return Err(invalid(format!("abbreviations.{key}"), "must not be empty"));
        }
    }

    Ok(())
}
