//! Aggregation fetcher: owned cards + next-actions list + first Todo card per project,
//! enriched with the owning board of every card.
//!
//! - Owned cards, next-actions cards and the projects list are fetched sequentially
//! - Each project is resolved in its own task (board link -> lists -> Todo -> first card)
//! - Each distinct board is fetched in its own task
//! - Any error fails the whole fetch; no partial results

use crate::domain::rules::{extract_board_id, find_todo_list};
use crate::domain::{Action, Board, Card, DomainError};
use crate::ports::{ActionsPort, BoardService};
use crate::shared::config::TrelloConfig;
use crate::usecases::fan_out::fan_out;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Builds the next-actions list for one user.
pub struct ActionFetcher {
    client: Arc<dyn BoardService>,
    config: Arc<TrelloConfig>,
}

impl ActionFetcher {
    pub fn new(client: Arc<dyn BoardService>, config: Arc<TrelloConfig>) -> Self {
        Self { client, config }
    }

    /// Run the full pipeline.
    ///
    /// Output order: owned cards, then next-actions cards, then one card per project
    /// in project-list order.
    pub async fn fetch(&self) -> Result<Vec<Action>, DomainError> {
        let started = Instant::now();

        let owned = self.client.owned_cards().await?;
        debug!(count = owned.len(), "fetched owned cards");

        let next_actions = self
            .client
            .cards_on_list(&self.config.next_actions_list_id)
            .await?;
        debug!(count = next_actions.len(), "fetched next actions list");

        let project_todos = self.project_todo_cards().await?;

        let mut cards = owned;
        cards.extend(next_actions);
        cards.extend(project_todos);

        let boards = self.boards_for(&cards).await?;

        info!(
            actions = cards.len(),
            boards = boards.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "finished API requests"
        );

        cards
            .into_iter()
            .map(|card| -> Result<Action, DomainError> {
                let board = boards
                    .get(&card.board_id)
                    .ok_or_else(|| DomainError::BoardNotFound {
                        board_id: card.board_id.clone(),
                    })?;
                Ok(Action::from_card(card, board))
            })
            .collect()
    }

    /// First card of each project's Todo list, skipping projects with an empty Todo list.
    async fn project_todo_cards(&self) -> Result<Vec<Card>, DomainError> {
        let projects = self
            .client
            .cards_on_list(&self.config.projects_list_id)
            .await?;
        debug!(count = projects.len(), "fetched project cards");

        let client = Arc::clone(&self.client);
        let todos = fan_out(projects, move |project| {
            let client = Arc::clone(&client);
            async move { next_action_for_project(client.as_ref(), &project).await }
        })
        .await?;

        Ok(todos.into_iter().flatten().collect())
    }

    /// Fetch every distinct board referenced by `cards`, keyed by board id.
    async fn boards_for(&self, cards: &[Card]) -> Result<HashMap<String, Board>, DomainError> {
        let board_ids = distinct_board_ids(cards);
        debug!(count = board_ids.len(), "fetching boards");

        let client = Arc::clone(&self.client);
        let boards = fan_out(board_ids.clone(), move |board_id| {
            let client = Arc::clone(&client);
            async move { client.get_board(&board_id).await }
        })
        .await?;

        Ok(board_ids.into_iter().zip(boards).collect())
    }
}

#[async_trait::async_trait]
impl ActionsPort for ActionFetcher {
    async fn fetch_actions(&self) -> Result<Vec<Action>, DomainError> {
        self.fetch().await
    }
}

/// Resolve one project card to the first card on its board's Todo list.
async fn next_action_for_project(
    client: &dyn BoardService,
    project: &Card,
) -> Result<Option<Card>, DomainError> {
    let board_id =
        extract_board_id(&project.description).ok_or_else(|| DomainError::BoardIdParse {
            card_id: project.id.clone(),
            card_name: project.name.clone(),
        })?;

    let lists = client.lists_on_board(board_id).await?;
    let todo = find_todo_list(&lists).ok_or_else(|| DomainError::MissingTodoList {
        board_id: board_id.to_string(),
    })?;

    let cards = client.cards_on_list(&todo.id).await?;
    Ok(cards.into_iter().next())
}

/// Board ids in first-seen order, without duplicates.
fn distinct_board_ids(cards: &[Card]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for card in cards {
        if seen.insert(card.board_id.as_str()) {
            ids.push(card.board_id.clone());
        }
    }
    ids
}
