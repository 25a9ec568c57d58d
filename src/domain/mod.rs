//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod rules;

pub use entities::{Action, BackgroundImage, Board, Card, List};
pub use errors::DomainError;
