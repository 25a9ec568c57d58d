//! JSON-API response documents. Kept apart from domain entities so the wire
//! shape (type tag, camelCase, explicit nulls) can change independently.

use crate::domain::Action;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource type tag required by JSON-API.
pub const ACTIONS_TYPE: &str = "actions";

#[derive(Debug, Serialize, Deserialize)]
pub struct ActionsDocument {
    pub data: Vec<ActionResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    pub name: String,
    pub due_by: Option<DateTime<Utc>>,
    pub url: String,
    pub image_url: Option<String>,
    pub project_name: Option<String>,
}

impl From<Action> for ActionResource {
    fn from(a: Action) -> Self {
        Self {
            resource_type: ACTIONS_TYPE.to_string(),
            id: a.id,
            name: a.name,
            due_by: a.due_by,
            url: a.url,
            image_url: a.image_url,
            project_name: a.project_name,
        }
    }
}

impl From<Vec<Action>> for ActionsDocument {
    fn from(actions: Vec<Action>) -> Self {
        Self {
            data: actions.into_iter().map(ActionResource::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorObject {
    pub detail: String,
}

impl ErrorDocument {
    pub fn single(detail: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorObject {
                detail: detail.into(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_action_resource_shape() {
        let doc = ActionsDocument::from(vec![Action {
            id: "an id".into(),
            name: "a name".into(),
            due_by: Some(Utc.with_ymd_and_hms(2020, 2, 12, 16, 24, 0).unwrap()),
            url: "https://trello.com/c/x".into(),
            image_url: None,
            project_name: Some("My Project".into()),
        }]);

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "data": [{
                    "type": "actions",
                    "id": "an id",
                    "name": "a name",
                    "dueBy": "2020-02-12T16:24:00Z",
                    "url": "https://trello.com/c/x",
                    "imageUrl": null,
                    "projectName": "My Project"
                }]
            })
        );
    }

    #[test]
    fn test_error_document_shape() {
        let doc = ErrorDocument::single("an error");
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({"errors": [{"detail": "an error"}]})
        );
    }
}
