// CozyTab Settings Engine
// Holds the user settings record and applies validated single-key updates.
// Persisting the record is left to the caller (see services::persistence).

use serde_json::Value;

use crate::database::KeyValueStore;
use crate::services::persistence;
use crate::types::errors::SettingsError;
use crate::types::settings::{is_known_theme, AppSettings, SearchEngine};

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn get_settings(&self) -> &AppSettings;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self);
    fn search_engine(&self) -> SearchEngine;
}

/// In-memory settings engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsEngine {
    settings: AppSettings,
}

impl SettingsEngine {
    pub fn new(settings: AppSettings) -> Self {
        Self { settings }
    }

    /// Restores the saved record, falling back to defaults when it is missing or malformed.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::new(persistence::load_settings(store))
    }
}

impl SettingsEngineTrait for SettingsEngine {
    fn get_settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Updates one setting by its camelCase key.
    ///
    /// Converts the current settings to a `serde_json::Value`, replaces the
    /// field, then deserializes back into `AppSettings` so the new value is
    /// type-checked.
    ///
    /// # Examples
    /// - `"searchEngine"` with `"bing"`
    /// - `"blockTrackers"` with `false`
    /// - `"theme"` with `"deep-space"`
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        match &mut json_value {
            Value::Object(map) => {
                if !map.contains_key(key) {
                    return Err(SettingsError::InvalidKey(format!(
                        "Key '{}' not found in settings",
                        key
                    )));
                }
                map.insert(key.to_string(), value);
            }
            _ => {
                return Err(SettingsError::SerializationError(
                    "Settings did not serialize to an object".to_string(),
                ));
            }
        }

        let new_settings: AppSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;

        if !is_known_theme(&new_settings.theme) {
            return Err(SettingsError::InvalidValue(format!(
                "Unknown theme '{}'",
                new_settings.theme
            )));
        }

        self.settings = new_settings;
        Ok(())
    }

    /// Resets all settings to factory defaults.
    fn reset(&mut self) {
        self.settings = AppSettings::default();
    }

    fn search_engine(&self) -> SearchEngine {
        self.settings.search_engine
    }
}
