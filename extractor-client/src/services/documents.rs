use super::ExtractorClient;
use crate::error::ApiError;
use crate::models::{Document, DocumentFilters, DocumentStatus, DocumentUpload, ExtractionField};
use reqwest::multipart;

impl ExtractorClient {
    /// Upload a file, optionally tagged with a document type, and let the
    /// backend extract it unless `auto_extract` was disabled.
    ///
    /// This is the one operation that bypasses the JSON request primitive:
    /// the body is a multipart form, with the boundary header left to
    /// `reqwest`.
    pub async fn upload_document(&self, upload: DocumentUpload) -> Result<Document, ApiError> {
        let endpoint = "/documents/upload-and-extract";

        let mut form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(upload.data)
                .file_name(upload.file_name)
                .mime_str(&upload.content_type)?,
        );
        if let Some(document_type) = upload.document_type {
            form = form.text("document_type", document_type);
        }

        let request = self
            .client
            .post(self.url(endpoint))
            .query(&[("auto_extract", upload.auto_extract.to_string())])
            .multipart(form);

        self.execute_with_fallback(request, endpoint, "Upload failed")
            .await
    }

    /// List documents, applying only the filters that are present.
    pub async fn list_documents(&self, filters: &DocumentFilters) -> Result<Vec<Document>, ApiError> {
        let endpoint = "/documents";
        let request = self
            .client
            .get(self.url(endpoint))
            .query(&filters.to_query());
        self.execute(request, endpoint).await
    }

    pub async fn get_document(&self, document_id: &str) -> Result<Document, ApiError> {
        let endpoint = format!("/documents/{}", document_id);
        self.get(&endpoint).await
    }

    /// Move a document to a new status. The status travels as a query
    /// parameter, not a body.
    pub async fn update_document_status(
        &self,
        document_id: &str,
        status: DocumentStatus,
    ) -> Result<Document, ApiError> {
        let endpoint = format!("/documents/{}/status", document_id);
        let request = self
            .client
            .patch(self.url(&endpoint))
            .query(&[("status", status.as_str())]);
        self.execute(request, &endpoint).await
    }

    /// Fetch the file payload for a document. The shape is backend-defined,
    /// so it is returned undecoded.
    pub async fn get_document_file(
        &self,
        document_id: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let endpoint = format!("/documents/{}/file", document_id);
        self.get(&endpoint).await
    }

    /// Trigger extraction for an already-uploaded document.
    pub async fn extract_document_fields(
        &self,
        document_id: &str,
    ) -> Result<Vec<ExtractionField>, ApiError> {
        let endpoint = format!("/documents/{}/extract", document_id);
        self.post_empty(&endpoint).await
    }
}
