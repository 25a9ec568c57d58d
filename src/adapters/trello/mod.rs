//! Trello integration: REST client plus wire payload mapping.

pub mod client;
pub mod wire;

pub use client::TrelloAdapter;
