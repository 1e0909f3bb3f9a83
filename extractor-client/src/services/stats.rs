use super::ExtractorClient;
use crate::error::ApiError;
use serde_json::Value;

/// Read-only aggregate endpoints. Their shapes are backend-defined and
/// presentation-only, so they are returned undecoded.
impl ExtractorClient {
    pub async fn get_document_stats(&self) -> Result<Value, ApiError> {
        self.get("/stats/documents").await
    }

    pub async fn get_field_accuracy(&self) -> Result<Value, ApiError> {
        self.get("/stats/field-accuracy").await
    }

    pub async fn get_model_improvement(&self) -> Result<Value, ApiError> {
        self.get("/stats/model-improvement").await
    }

    pub async fn get_overview_stats(&self) -> Result<Value, ApiError> {
        self.get("/stats/overview").await
    }
}
