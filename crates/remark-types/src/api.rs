use serde::{Deserialize, Serialize};

use crate::models::Comment;

pub const DEFAULT_LIMIT: usize = 50;
pub const MAX_LIMIT: usize = 200;
pub const DEFAULT_MAX_TEXT_LEN: usize = 500;
pub const MAX_PAGE_LEN: usize = 200;

// -- Comments --

/// Body of `POST /comments` and `PUT /comments/{id}`.
///
/// Fields are optional here so a missing `text` is reported with the same
/// message as an empty one. `content` is accepted as an alias of `text`.
#[derive(Debug, Default, Deserialize)]
pub struct CommentPayload {
    #[serde(default, alias = "content")]
    pub text: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

/// Raw query string of `GET /comments`. Numbers are parsed by the handler so
/// a bad value turns into a JSON validation error.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentList {
    pub items: Vec<Comment>,
    pub count: usize,
    pub limit: usize,
    pub offset: usize,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_content_alias() {
        let payload: CommentPayload =
            serde_json::from_str(r#"{"page":"home","content":"hi"}"#).unwrap();
        assert_eq!(payload.text.as_deref(), Some("hi"));
        assert_eq!(payload.page.as_deref(), Some("home"));
    }

    #[test]
    fn payload_tolerates_missing_text() {
        let payload: CommentPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.text.is_none());
    }

    #[test]
    fn comment_omits_absent_page() {
        let comment = Comment {
            id: 1,
            text: "hello".into(),
            page: None,
            created_at: chrono::DateTime::default(),
            updated_at: chrono::DateTime::default(),
        };
        let json = serde_json::to_value(&comment).unwrap();
        assert!(json.get("page").is_none());
        assert_eq!(json["text"], "hello");
    }
}
