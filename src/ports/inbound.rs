//! Inbound port. HTTP (adapter) calls into the application.

use crate::domain::{Action, DomainError};

/// Input port: the HTTP layer asks for the current next actions.
#[async_trait::async_trait]
pub trait ActionsPort: Send + Sync {
    /// Produce the full action list, or the first error hit along the way.
    async fn fetch_actions(&self) -> Result<Vec<Action>, DomainError>;
}
