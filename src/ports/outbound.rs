//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Board, Card, DomainError, List};

/// Board service gateway (Trello). Each call is one network round trip.
///
/// Errors carry the request path (never credentials) for diagnostics.
#[async_trait::async_trait]
pub trait BoardService: Send + Sync {
    /// Cards the authenticated member is assigned to.
    async fn owned_cards(&self) -> Result<Vec<Card>, DomainError>;

    /// Cards on a list, in list order.
    async fn cards_on_list(&self, list_id: &str) -> Result<Vec<Card>, DomainError>;

    /// Lists on a board, in board order.
    async fn lists_on_board(&self, board_id: &str) -> Result<Vec<List>, DomainError>;

    async fn get_board(&self, board_id: &str) -> Result<Board, DomainError>;
}
