//! Trello adapter. Implements BoardService over the Trello REST API.

use super::wire::{TrelloBoard, TrelloCard, TrelloList};
use crate::domain::{Board, Card, DomainError, List};
use crate::ports::BoardService;
use crate::shared::config::TrelloConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub fn owned_cards_path() -> String {
    "/members/me/cards".to_string()
}

pub fn cards_on_list_path(list_id: &str) -> String {
    format!("/lists/{}/cards", list_id)
}

pub fn lists_on_board_path(board_id: &str) -> String {
    format!("/boards/{}/lists", board_id)
}

pub fn board_path(board_id: &str) -> String {
    format!("/boards/{}", board_id)
}

/// Trello API adapter for reading cards, lists and boards.
///
/// Requires API key and token from https://trello.com/app-key.
/// Both are sent as query parameters and never logged.
pub struct TrelloAdapter {
    client: Client,
    base_url: String,
    api_key: String,
    token: String,
}

impl TrelloAdapter {
    /// Create a new Trello adapter.
    ///
    /// # Arguments
    /// * `config` - Validated Trello settings (base URL and credentials are used here)
    /// * `timeout` - Upper bound for a single request
    pub fn new(config: &TrelloConfig, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            token: config.api_token.clone(),
        })
    }

    /// GET `path` and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        debug!(path, "trello request");
        let url = format!("{}{}", self.base_url, path);

        let res = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| DomainError::Transport {
                path: path.to_string(),
                // without_url: the URL carries the credentials
                message: e.without_url().to_string(),
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(DomainError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = res.bytes().await.map_err(|e| DomainError::Transport {
            path: path.to_string(),
            message: e.without_url().to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| DomainError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl BoardService for TrelloAdapter {
    async fn owned_cards(&self) -> Result<Vec<Card>, DomainError> {
        let cards: Vec<TrelloCard> = self.get(&owned_cards_path()).await?;
        Ok(cards.into_iter().map(Card::from).collect())
    }

    async fn cards_on_list(&self, list_id: &str) -> Result<Vec<Card>, DomainError> {
        let cards: Vec<TrelloCard> = self.get(&cards_on_list_path(list_id)).await?;
        Ok(cards.into_iter().map(Card::from).collect())
    }

    async fn lists_on_board(&self, board_id: &str) -> Result<Vec<List>, DomainError> {
        let lists: Vec<TrelloList> = self.get(&lists_on_board_path(board_id)).await?;
        Ok(lists.into_iter().map(List::from).collect())
    }

    async fn get_board(&self, board_id: &str) -> Result<Board, DomainError> {
        let board: TrelloBoard = self.get(&board_path(board_id)).await?;
        Ok(board.into())
    }
}
