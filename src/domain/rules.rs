//! Selection rules for project cards and their boards.

use super::entities::List;
use regex::Regex;
use std::sync::LazyLock;

/// Web (not API) prefix of a board link inside a project card description.
pub const BOARD_LINK_PREFIX: &str = "https://trello.com/b/";

/// Name of the list a project's next action is taken from.
pub const TODO_LIST_NAME: &str = "Todo";

static BOARD_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{}([A-Za-z0-9_]+)",
        regex::escape(BOARD_LINK_PREFIX)
    ))
    .expect("board id pattern is valid")
});

/// Extract the board id from the first board link in `description`.
///
/// Returns `None` when no link followed by at least one word character is present.
pub fn extract_board_id(description: &str) -> Option<&str> {
    BOARD_ID_PATTERN
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// First list named exactly "Todo" (case-sensitive).
pub fn find_todo_list(lists: &[List]) -> Option<&List> {
    lists.iter().find(|list| list.name == TODO_LIST_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(id: &str, name: &str) -> List {
        List {
            id: id.into(),
            name: name.into(),
        }
    }

    #[test]
    fn test_extract_board_id_from_link() {
        assert_eq!(
            extract_board_id("https://trello.com/b/Board1/x"),
            Some("Board1")
        );
        assert_eq!(extract_board_id("https://trello.com/b/empty"), Some("empty"));
    }

    #[test]
    fn test_extract_board_id_stops_at_non_word_char() {
        assert_eq!(
            extract_board_id("Project board: https://trello.com/b/abc_123-my-project"),
            Some("abc_123")
        );
    }

    #[test]
    fn test_extract_board_id_uses_first_link() {
        let desc = "https://trello.com/b/first\nhttps://trello.com/b/second";
        assert_eq!(extract_board_id(desc), Some("first"));
    }

    #[test]
    fn test_extract_board_id_rejects_missing_link() {
        assert_eq!(extract_board_id("no board link here"), None);
        assert_eq!(extract_board_id(""), None);
        assert_eq!(extract_board_id("https://trello.com/b/"), None);
        assert_eq!(extract_board_id("https://trello.com/b/-dash"), None);
        assert_eq!(extract_board_id("http://trello.com/b/insecure"), None);
        assert_eq!(extract_board_id("https://api.trello.com/1/boards/x"), None);
    }

    #[test]
    fn test_find_todo_list_is_exact_and_first() {
        let lists = vec![
            list("l0", "todo"),
            list("l1", "Todo"),
            list("l2", "Todo"),
            list("l3", "Done"),
        ];
        assert_eq!(find_todo_list(&lists).map(|l| l.id.as_str()), Some("l1"));
    }

    #[test]
    fn test_find_todo_list_missing() {
        let lists = vec![list("l0", "Inbox"), list("l1", "Todo ")];
        assert!(find_todo_list(&lists).is_none());
        assert!(find_todo_list(&[]).is_none());
    }
}
