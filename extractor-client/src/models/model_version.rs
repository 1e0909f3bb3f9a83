use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An extraction model version. At most one version is active at a time;
/// the backend deactivates the previous one on activation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelVersion {
    pub id: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub metrics: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request to register a model version.
#[derive(Debug, Clone, Serialize)]
pub struct NewModelVersion {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<serde_json::Value>,
}
