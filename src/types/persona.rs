//! Persona configuration
//!
//! The name and biography the digital twin speaks from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a persona
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonaError {
    #[error("Both name and details are required.")]
    MissingFields,
}

/// User-supplied persona configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaConfig {
    /// Display name of the person being twinned
    pub name: String,
    /// Free-text biography, the only knowledge the persona may use
    pub details: String,
}

impl PersonaConfig {
    /// Build a configuration from raw form input.
    ///
    /// Both fields are trimmed and must be non-empty afterwards.
    pub fn new(name: impl AsRef<str>, details: impl AsRef<str>) -> Result<Self, PersonaError> {
        let name = name.as_ref().trim();
        let details = details.as_ref().trim();

        if name.is_empty() || details.is_empty() {
            return Err(PersonaError::MissingFields);
        }

        Ok(Self {
            name: name.to_string(),
            details: details.to_string(),
        })
    }

    /// Re-check a value that did not come through `new` (e.g. read from disk).
    pub fn validated(self) -> Result<Self, PersonaError> {
        Self::new(&self.name, &self.details)
    }
}
