use super::ExtractorClient;
use crate::error::ApiError;
use crate::models::{EntityId, Session};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct NewSession {
    document_id: EntityId,
}

impl ExtractorClient {
    /// Open an annotation session for a document. The identifier transmits
    /// as a string whatever its source type was.
    pub async fn create_session(
        &self,
        document_id: impl Into<EntityId>,
    ) -> Result<Session, ApiError> {
        let body = NewSession {
            document_id: document_id.into(),
        };
        self.post_json("/sessions", &body).await
    }

    /// Complete a session, attaching an arbitrary result payload.
    pub async fn complete_session(
        &self,
        session_id: impl Into<EntityId>,
        result: &serde_json::Value,
    ) -> Result<Session, ApiError> {
        let endpoint = format!("/sessions/{}/complete", session_id.into());
        self.patch_json(&endpoint, result).await
    }

    pub async fn get_session(&self, session_id: &str) -> Result<Session, ApiError> {
        let endpoint = format!("/sessions/{}", session_id);
        self.get(&endpoint).await
    }
}
