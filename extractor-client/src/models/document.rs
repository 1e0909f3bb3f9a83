use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Uploaded,
    Processing,
    Extracted,
    InReview,
    Completed,
    Failed,
}

impl DocumentStatus {
    /// Wire form, as used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Uploaded => "uploaded",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Extracted => "extracted",
            DocumentStatus::InReview => "in_review",
            DocumentStatus::Completed => "completed",
            DocumentStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    pub status: DocumentStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Optional filters for the document list.
///
/// Each filter is appended as a query parameter only when present, in
/// declaration order: `status`, `document_type`, `limit`.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilters {
    pub status: Option<DocumentStatus>,
    pub document_type: Option<String>,
    pub limit: Option<u32>,
}

impl DocumentFilters {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(document_type) = &self.document_type {
            params.push(("document_type", document_type.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

/// A file to upload for extraction.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
    pub document_type: Option<String>,
    pub auto_extract: bool,
}

impl DocumentUpload {
    /// Extraction is triggered automatically unless disabled via
    /// [`DocumentUpload::auto_extract`].
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
            document_type: None,
            auto_extract: true,
        }
    }

    pub fn document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = Some(document_type.into());
        self
    }

    pub fn auto_extract(mut self, auto_extract: bool) -> Self {
        self.auto_extract = auto_extract;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_appear_in_declaration_order() {
        let filters = DocumentFilters {
            status: Some(DocumentStatus::Extracted),
            document_type: Some("invoice".to_string()),
            limit: Some(25),
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("status", "extracted".to_string()),
                ("document_type", "invoice".to_string()),
                ("limit", "25".to_string()),
            ]
        );
    }

    #[test]
    fn absent_filters_are_omitted() {
        let filters = DocumentFilters {
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(filters.to_query(), vec![("limit", "10".to_string())]);
        assert!(DocumentFilters::default().to_query().is_empty());
    }
}
