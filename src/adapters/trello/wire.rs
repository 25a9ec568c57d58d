//! Trello JSON payloads. Mapped into domain entities right after decoding.

use crate::domain::{BackgroundImage, Board, Card, List};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: String,
    pub id_board: String,
}

#[derive(Debug, Deserialize)]
pub struct TrelloList {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TrelloBoard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub prefs: Option<TrelloPrefs>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloPrefs {
    /// Scaled variants of the board background, smallest first. Null for plain colours.
    #[serde(default)]
    pub background_image_scaled: Option<Vec<TrelloImage>>,
}

#[derive(Debug, Deserialize)]
pub struct TrelloImage {
    pub url: String,
}

impl From<TrelloCard> for Card {
    fn from(c: TrelloCard) -> Self {
        Card {
            id: c.id,
            name: c.name,
            description: c.desc,
            due_by: c.due,
            url: c.url,
            board_id: c.id_board,
        }
    }
}

impl From<TrelloList> for List {
    fn from(l: TrelloList) -> Self {
        List {
            id: l.id,
            name: l.name,
        }
    }
}

impl From<TrelloBoard> for Board {
    fn from(b: TrelloBoard) -> Self {
        let background_images = b
            .prefs
            .and_then(|p| p.background_image_scaled)
            .unwrap_or_default()
            .into_iter()
            .map(|img| BackgroundImage { url: img.url })
            .collect();
        Board {
            id: b.id,
            name: b.name,
            background_images,
        }
    }
}
