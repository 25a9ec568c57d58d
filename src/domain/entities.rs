//! Domain entities. Pure data structures for the core business.
//!
//! No Trello wire types here — these are mapped from adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of work tracked on the board service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub description: String,
    pub due_by: Option<DateTime<Utc>>,
    pub url: String,
    /// Board the card lives on. Used to enrich the resulting action.
    pub board_id: String,
}

/// A named column of cards on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
}

/// A board (one project). `background_images` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub background_images: Vec<BackgroundImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundImage {
    pub url: String,
}

/// A GTD "next action". Derived from a card plus its owning board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub name: String,
    pub due_by: Option<DateTime<Utc>>,
    pub url: String,
    pub image_url: Option<String>,
    pub project_name: Option<String>,
}

impl Action {
    /// Build an action from a card and the board it belongs to.
    ///
    /// `image_url` is the first background image of the board, if any.
    pub fn from_card(card: Card, board: &Board) -> Self {
        Self {
            id: card.id,
            name: card.name,
            due_by: card.due_by,
            url: card.url,
            image_url: board.background_images.first().map(|img| img.url.clone()),
            project_name: Some(board.name.clone()),
        }
    }
}
