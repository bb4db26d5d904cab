//! Error types for the draw core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DrawError {
    pub fn invalid_transition(action: &'static str, state: &'static str) -> Self {
        Self::InvalidTransition { action, state }
    }

    /// Transition errors come from UI double fires and are safe to ignore.
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

pub type CoreResult<T> = Result<T, DrawError>;
