//! Error types for the life ledger engine

use thiserror::Error;

/// Main error type for the life ledger engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Invalid selection: decision {decision_id} is not the current decision")]
    InvalidSelection { decision_id: String, choice_id: String },

    #[error("Decision not found: {0}")]
    DecisionNotFound(String),

    #[error("Choice not found: {choice_id} in decision {decision_id}")]
    ChoiceNotFound {
        decision_id: String,
        choice_id: String,
    },

    #[error("Rewind budget exhausted: {used} of {max} used")]
    RewindExhausted { used: u32, max: u32 },

    #[error("Game is not in progress")]
    NotInProgress,

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Deserialization(err.to_string())
    }
}

/// Result type alias for the life ledger engine
pub type Result<T> = std::result::Result<T, GameError>;
