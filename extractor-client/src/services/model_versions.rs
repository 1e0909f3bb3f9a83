use super::ExtractorClient;
use crate::error::ApiError;
use crate::models::{ModelVersion, NewModelVersion};

impl ExtractorClient {
    pub async fn get_model_versions(&self) -> Result<Vec<ModelVersion>, ApiError> {
        self.get("/models").await
    }

    /// The single version currently designated for extraction.
    pub async fn get_active_model(&self) -> Result<ModelVersion, ApiError> {
        self.get("/models/active").await
    }

    pub async fn create_model_version(
        &self,
        model: &NewModelVersion,
    ) -> Result<ModelVersion, ApiError> {
        self.post_json("/models", model).await
    }

    /// Activate a version; the backend deactivates the previous active one.
    pub async fn activate_model(&self, model_id: &str) -> Result<ModelVersion, ApiError> {
        let endpoint = format!("/models/{}/activate", model_id);
        self.patch_empty(&endpoint).await
    }

    /// Fire-and-forget training job kickoff, no payload.
    pub async fn trigger_training(&self) -> Result<serde_json::Value, ApiError> {
        self.post_empty("/models/train").await
    }
}
