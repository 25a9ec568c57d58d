//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Network failure talking to the board service (includes timeouts).
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },

    #[error("request to {path} returned status code {status}")]
    Status { path: String, status: u16 },

    #[error("could not decode response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("cannot parse board id from project card '{card_name}' ({card_id})")]
    BoardIdParse { card_id: String, card_name: String },

    #[error("project board {board_id} is missing Todo list")]
    MissingTodoList { board_id: String },

    #[error("board {board_id} was not fetched")]
    BoardNotFound { board_id: String },

    /// A fan-out worker panicked or was cancelled.
    #[error("worker task failed: {0}")]
    Task(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
