use crate::Note;
use serde::{Deserialize, Serialize};

/// Body of `POST /notes`
///
/// Unknown fields are rejected. A missing or `null` description decodes to
/// `None` so it can be reported as a missing field rather than a malformed body.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Body of `PATCH /notes/description/:id`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateDescriptionRequest {
    #[serde(default)]
    pub description: Option<String>,
}

/// Envelope for every single-note response
#[derive(Debug, Serialize)]
pub struct NoteEnvelope {
    pub message: &'static str,
    pub note: Note,
}

impl NoteEnvelope {
    #[must_use]
    pub const fn successful(note: Note) -> Self {
        Self {
            message: "successful",
            note,
        }
    }

    #[must_use]
    pub const fn created(note: Note) -> Self {
        Self {
            message: "Note added successfully",
            note,
        }
    }

    #[must_use]
    pub const fn deleted(note: Note) -> Self {
        Self {
            message: "deleted successfully",
            note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_unknown_fields() {
        let result =
            serde_json::from_str::<CreateNoteRequest>(r#"{"description":"a","priority":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_request_rejects_client_supplied_id() {
        let result = serde_json::from_str::<CreateNoteRequest>(r#"{"id":9,"description":"a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_request_fields_are_optional_at_decode_time() {
        let request: CreateNoteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.description, None);
        assert_eq!(request.completed, None);

        let request: CreateNoteRequest =
            serde_json::from_str(r#"{"description":null,"completed":true}"#).unwrap();
        assert_eq!(request.description, None);
        assert_eq!(request.completed, Some(true));
    }

    #[test]
    fn create_request_rejects_wrong_types() {
        assert!(serde_json::from_str::<CreateNoteRequest>(r#"{"description":5}"#).is_err());
        assert!(serde_json::from_str::<CreateNoteRequest>(r#"{"completed":"yes"}"#).is_err());
        assert!(serde_json::from_str::<CreateNoteRequest>(r#""buy milk""#).is_err());
    }

    #[test]
    fn envelope_serializes_note_inline() {
        let envelope = NoteEnvelope::created(Note {
            id: 1,
            description: "buy milk".into(),
            completed: false,
        });
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            serde_json::json!({
                "message": "Note added successfully",
                "note": {"id": 1, "description": "buy milk", "completed": false}
            })
        );
    }
}
