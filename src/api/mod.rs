use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::core::note::Note;

/// Backend failure, tagged by severity. `Unreachable` and `Unknown` replace
/// the whole UI when they happen during the initial load; `Rejected` carries
/// a business-level message the server sent in an otherwise valid response.
///
/// The `Display` strings double as the user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Could not contact backend API")]
    Unreachable,
    #[error("An unknown error occurred")]
    Unknown,
    #[error("{0}")]
    Rejected(String),
}

/// Map a non-2xx status the way the backend contract defines it.
fn status_error(status: StatusCode) -> ApiError {
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        ApiError::Unreachable
    } else {
        ApiError::Unknown
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WireNote {
    #[serde(rename = "objectId")]
    object_id: String,
    title: String,
    text: String,
}

impl From<WireNote> for Note {
    fn from(wire: WireNote) -> Self {
        Note {
            id: wire.object_id,
            title: wire.title,
            text: wire.text,
        }
    }
}

/// `GET /api/notes` body. The failure message is nested one level deeper
/// than on the save endpoint; that asymmetry is the backend's, not ours.
#[derive(Debug, Deserialize)]
struct ListResponse {
    success: bool,
    #[serde(default)]
    notes: Vec<WireNote>,
    #[serde(default)]
    message: Option<NestedMessage>,
}

#[derive(Debug, Deserialize)]
struct NestedMessage {
    message: String,
}

/// `POST /api/note/{id}` body.
#[derive(Debug, Deserialize)]
struct SaveResponse {
    success: bool,
    #[serde(default)]
    note: Option<SavedNote>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SavedNote {
    #[serde(rename = "objectId")]
    object_id: String,
}

#[derive(Debug, Serialize)]
struct SaveBody<'a> {
    title: &'a str,
    text: &'a str,
}

/// Minimal client for the notes backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Fetch all notes, in the order the backend returns them.
    pub async fn fetch_notes(&self) -> Result<Vec<Note>, ApiError> {
        let url = format!("{}/api/notes", self.base_url);
        let resp = self.http.get(&url).send().await.map_err(|e| {
            log::warn!("GET /api/notes failed: {}", e);
            ApiError::Unreachable
        })?;

        let status = resp.status();
        if !status.is_success() {
            log::warn!("GET /api/notes returned {}", status);
            return Err(status_error(status));
        }

        let body: ListResponse = resp.json().await.map_err(|e| {
            log::warn!("GET /api/notes: bad response body: {}", e);
            ApiError::Unknown
        })?;

        if body.success {
            Ok(body.notes.into_iter().map(Note::from).collect())
        } else {
            Err(ApiError::Rejected(
                body.message
                    .map(|m| m.message)
                    .unwrap_or_else(|| "An unknown error occurred".to_string()),
            ))
        }
    }

    /// Push the edit buffer. An empty `id` creates a new note; the server's
    /// assigned id is returned for creates, `None` for plain updates.
    pub async fn save_note(
        &self,
        id: &str,
        title: &str,
        text: &str,
    ) -> Result<Option<String>, ApiError> {
        let url = format!("{}/api/note/{}", self.base_url, id);
        let resp = self
            .http
            .post(&url)
            .json(&SaveBody { title, text })
            .send()
            .await
            .map_err(|e| {
                log::warn!("POST /api/note failed: {}", e);
                ApiError::Unreachable
            })?;

        let status = resp.status();
        if !status.is_success() {
            log::warn!("POST /api/note returned {}", status);
            return Err(status_error(status));
        }

        let body: SaveResponse = resp.json().await.map_err(|e| {
            log::warn!("POST /api/note: bad response body: {}", e);
            ApiError::Unknown
        })?;

        if !body.success {
            return Err(ApiError::Rejected(
                body.message
                    .unwrap_or_else(|| "An unknown error occurred".to_string()),
            ));
        }

        if id.is_empty() {
            // A create must hand back the assigned id.
            match body.note {
                Some(n) => Ok(Some(n.object_id)),
                None => {
                    log::warn!("POST /api/note: create response missing note id");
                    Err(ApiError::Unknown)
                }
            }
        } else {
            Ok(body.note.map(|n| n.object_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_response() {
        let json = r#"{"success":true,"notes":[
            {"objectId":"a1","title":"First","text":"one"},
            {"objectId":"b2","title":"Second","text":"two"}
        ]}"#;
        let body: ListResponse = serde_json::from_str(json).unwrap();
        assert!(body.success);
        let notes: Vec<Note> = body.notes.into_iter().map(Note::from).collect();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, "a1");
        assert_eq!(notes[0].title, "First");
        assert_eq!(notes[1].text, "two");
    }

    #[test]
    fn parse_list_failure_with_nested_message() {
        let json = r#"{"success":false,"message":{"message":"database offline"}}"#;
        let body: ListResponse = serde_json::from_str(json).unwrap();
        assert!(!body.success);
        assert!(body.notes.is_empty());
        assert_eq!(body.message.unwrap().message, "database offline");
    }

    #[test]
    fn parse_save_response_create() {
        let json = r#"{"success":true,"note":{"objectId":"n1"}}"#;
        let body: SaveResponse = serde_json::from_str(json).unwrap();
        assert!(body.success);
        assert_eq!(body.note.unwrap().object_id, "n1");
    }

    #[test]
    fn parse_save_failure_with_flat_message() {
        let json = r#"{"success":false,"message":"title too long"}"#;
        let body: SaveResponse = serde_json::from_str(json).unwrap();
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("title too long"));
    }

    #[test]
    fn save_body_wire_shape() {
        let body = SaveBody { title: "T", text: "X" };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"title":"T","text":"X"}"#);
    }

    #[test]
    fn status_500_is_unreachable() {
        assert_eq!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Unreachable
        );
        assert_eq!(status_error(StatusCode::NOT_FOUND), ApiError::Unknown);
    }

    #[test]
    fn error_messages_match_contract() {
        assert_eq!(ApiError::Unreachable.to_string(), "Could not contact backend API");
        assert_eq!(ApiError::Unknown.to_string(), "An unknown error occurred");
        assert_eq!(ApiError::Rejected("nope".into()).to_string(), "nope");
    }
}
