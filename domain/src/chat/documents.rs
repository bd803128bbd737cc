//! Reference documents and their extracted sections

use serde::{Deserialize, Serialize};

/// An uploaded policy document (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDocument {
    pub id: String,
    pub file_name: String,
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed: Option<bool>,
}

impl ReferenceDocument {
    /// A document counts as processed only when the backend says so explicitly.
    pub fn is_processed(&self) -> bool {
        self.processed.unwrap_or(false)
    }
}

/// A section of a reference document (Value Object)
///
/// Field names follow the chat component's camelCase contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSection {
    pub title: String,
    pub content: String,
    pub page_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
}
