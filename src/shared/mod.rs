//! Cross-cutting settings shared by adapters and use cases.

pub mod config;
