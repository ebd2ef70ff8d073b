//! Persona configuration persistence
//!
//! The configuration lives in a single slot: created once, overwritten on edit,
//! read at startup.

use crate::storage::{KeyValueStore, StorageError};
use crate::types::persona::PersonaConfig;

/// Slot holding the persona configuration
pub const PERSONA_KEY: &str = "persona_config";

/// Load the stored persona
///
/// Returns `None` when nothing is stored or the stored value is unusable
pub fn load_persona(store: &dyn KeyValueStore) -> Option<PersonaConfig> {
    let value = match store.get(PERSONA_KEY) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::info!("No persona configuration stored yet");
            return None;
        }
        Err(e) => {
            tracing::error!("Failed to load persona configuration: {}", e);
            return None;
        }
    };

    let config: PersonaConfig = match serde_json::from_value(value) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Stored persona configuration is malformed: {}", e);
            return None;
        }
    };

    match config.validated() {
        Ok(config) => {
            tracing::debug!("Loaded persona configuration for {}", config.name);
            Some(config)
        }
        Err(e) => {
            tracing::warn!("Ignoring stored persona configuration: {}", e);
            None
        }
    }
}

/// Overwrite the stored persona
pub fn save_persona(store: &dyn KeyValueStore, config: &PersonaConfig) -> Result<(), StorageError> {
    store.set(PERSONA_KEY, serde_json::to_value(config)?)?;
    tracing::info!("Saved persona configuration for {}", config.name);
    Ok(())
}
