//! Error types for Criar
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Criar error types
#[derive(Error, Debug)]
pub enum Error {
    /// Text contains a character outside the evolvable alphabet
    #[error("Text {text:?} contains illegal character {character:?}\nValid set: uppercase A-Z and space")]
    IllegalCharacter {
        /// The rejected text
        text: String,
        /// The first offending character
        character: char,
    },

    /// Goal text is empty (nothing to evolve toward)
    #[error("Goal text is empty\nProvide a non-empty target phrase, e.g. \"HELLO WORLD\"")]
    EmptyGoal,

    /// Configuration validation failed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
