use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A field value the model extracted from a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionField {
    pub id: String,
    pub document_id: String,
    pub field_name: String,
    #[serde(default)]
    pub field_value: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request to record an extraction field, singly or in bulk.
#[derive(Debug, Clone, Serialize)]
pub struct NewExtractionField {
    pub document_id: String,
    pub field_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}
