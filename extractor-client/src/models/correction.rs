use super::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A human-submitted change to a previously extracted field value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Correction {
    pub id: String,
    pub extraction_field_id: String,
    pub document_id: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub original_value: Option<String>,
    pub corrected_value: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request to record a correction.
///
/// The three identifier fields transmit as strings regardless of their
/// source type; a missing `session_id` transmits as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCorrection {
    pub extraction_field_id: EntityId,
    pub document_id: EntityId,
    pub session_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_value: Option<String>,
    pub corrected_value: String,
}
