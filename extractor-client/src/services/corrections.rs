use super::ExtractorClient;
use crate::error::ApiError;
use crate::models::{Correction, NewCorrection};

impl ExtractorClient {
    /// Record a correction. Identifier fields transmit as strings whatever
    /// their source type was; see [`crate::models::EntityId`].
    pub async fn create_correction(
        &self,
        correction: &NewCorrection,
    ) -> Result<Correction, ApiError> {
        self.post_json("/corrections", correction).await
    }

    pub async fn get_corrections_by_document(
        &self,
        document_id: &str,
    ) -> Result<Vec<Correction>, ApiError> {
        let endpoint = format!("/corrections/document/{}", document_id);
        self.get(&endpoint).await
    }

    pub async fn get_corrections_by_session(
        &self,
        session_id: &str,
    ) -> Result<Vec<Correction>, ApiError> {
        let endpoint = format!("/corrections/session/{}", session_id);
        self.get(&endpoint).await
    }

    /// Aggregate correction statistics; the shape is backend-defined.
    pub async fn get_correction_stats(&self) -> Result<serde_json::Value, ApiError> {
        self.get("/corrections/stats").await
    }
}
