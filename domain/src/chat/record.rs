//! Loosely typed chat payloads.
//!
//! Backend responses and fixture files mix the chat types freely. A
//! [`ChatRecord`] is whichever of them a JSON object turns out to be.

use super::documents::{DocumentSection, ReferenceDocument};
use super::entities::{ChatSession, Message};
use crate::core::error::DomainError;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ChatRecord {
    Message(Message),
    ChatSession(ChatSession),
    ReferenceDocument(ReferenceDocument),
    DocumentSection(DocumentSection),
}

impl ChatRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            ChatRecord::Message(_) => "Message",
            ChatRecord::ChatSession(_) => "ChatSession",
            ChatRecord::ReferenceDocument(_) => "ReferenceDocument",
            ChatRecord::DocumentSection(_) => "DocumentSection",
        }
    }

    /// Identifier or title used when listing the record
    pub fn label(&self) -> &str {
        match self {
            ChatRecord::Message(m) => &m.id,
            ChatRecord::ChatSession(s) => &s.title,
            ChatRecord::ReferenceDocument(d) => &d.file_name,
            ChatRecord::DocumentSection(s) => &s.title,
        }
    }

    /// Classify one JSON object.
    ///
    /// The types have disjoint required fields, so at most one matches.
    pub fn from_value(index: usize, value: Value) -> Result<Self, DomainError> {
        if !value.is_object() {
            return Err(DomainError::UnrecognizedRecord {
                index,
                reason: "expected a JSON object".to_string(),
            });
        }

        if let Some(m) = try_as::<Message>(&value) {
            return Ok(ChatRecord::Message(m));
        }
        if let Some(s) = try_as::<ChatSession>(&value) {
            return Ok(ChatRecord::ChatSession(s));
        }
        if let Some(d) = try_as::<ReferenceDocument>(&value) {
            return Ok(ChatRecord::ReferenceDocument(d));
        }
        if let Some(s) = try_as::<DocumentSection>(&value) {
            return Ok(ChatRecord::DocumentSection(s));
        }

        let keys: Vec<&str> = value
            .as_object()
            .map(|o| o.keys().map(String::as_str).collect())
            .unwrap_or_default();
        Err(DomainError::UnrecognizedRecord {
            index,
            reason: format!("fields [{}] match no chat type", keys.join(", ")),
        })
    }

    /// Parse a single object or an array of objects
    pub fn parse_all(json: &str) -> Result<Vec<Self>, DomainError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidJson(e.to_string()))?;
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| Self::from_value(i, item))
                .collect(),
            other => Ok(vec![Self::from_value(0, other)?]),
        }
    }
}

fn try_as<T: DeserializeOwned>(value: &Value) -> Option<T> {
    serde_json::from_value(value.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_array() {
        let json = r#"[
            {"id":"m1","text":"What is the dress code?","sender":"user","timestamp":"2025-03-01T08:00:00Z"},
            {"id":"s1","title":"Dress code","created_at":"2025-03-01T08:00:00Z","is_active":true},
            {"id":"d1","file_name":"handbook.pdf","file_path":"docs/handbook.pdf","processed":true},
            {"title":"Article IV","content":"Uniforms","pageNumber":12}
        ]"#;

        let records = ChatRecord::parse_all(json).unwrap();
        let kinds: Vec<_> = records.iter().map(ChatRecord::kind).collect();
        assert_eq!(
            kinds,
            ["Message", "ChatSession", "ReferenceDocument", "DocumentSection"]
        );
        assert_eq!(records[2].label(), "handbook.pdf");
    }

    #[test]
    fn test_single_object() {
        let json = r#"{"id":"s1","title":"Enrollment","created_at":"2025-03-01T08:00:00Z","is_active":false}"#;
        let records = ChatRecord::parse_all(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label(), "Enrollment");
    }

    #[test]
    fn test_unknown_sender_is_unrecognized() {
        let json = r#"[{"id":"m1","text":"hi","sender":"assistant","timestamp":"2025-03-01T08:00:00Z"}]"#;
        let err = ChatRecord::parse_all(json).unwrap_err();
        assert!(matches!(err, DomainError::UnrecognizedRecord { index: 0, .. }));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ChatRecord::parse_all("{oops"),
            Err(DomainError::InvalidJson(_))
        ));
        assert!(matches!(
            ChatRecord::parse_all("[1]"),
            Err(DomainError::UnrecognizedRecord { index: 0, .. })
        ));
    }
}
