//! Infrastructure adapters. Implement ports.
//!
//! Trello (outbound) and the HTTP server (inbound). Map errors to DomainError.

pub mod http;
pub mod trello;
