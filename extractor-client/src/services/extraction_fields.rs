use super::ExtractorClient;
use crate::error::ApiError;
use crate::models::{ExtractionField, NewExtractionField};

impl ExtractorClient {
    pub async fn get_extraction_fields_by_document(
        &self,
        document_id: &str,
    ) -> Result<Vec<ExtractionField>, ApiError> {
        let endpoint = format!("/extraction-fields/document/{}", document_id);
        self.get(&endpoint).await
    }

    pub async fn create_extraction_field(
        &self,
        field: &NewExtractionField,
    ) -> Result<ExtractionField, ApiError> {
        self.post_json("/extraction-fields", field).await
    }

    pub async fn create_extraction_fields_bulk(
        &self,
        fields: &[NewExtractionField],
    ) -> Result<Vec<ExtractionField>, ApiError> {
        self.post_json("/extraction-fields/bulk", fields).await
    }
}
