use super::ExtractorClient;
use crate::error::ApiError;
use crate::models::{FieldDefinition, NewFieldDefinition};

impl ExtractorClient {
    pub async fn get_field_definitions(&self) -> Result<Vec<FieldDefinition>, ApiError> {
        self.get("/field-definitions").await
    }

    pub async fn create_field_definition(
        &self,
        definition: &NewFieldDefinition,
    ) -> Result<FieldDefinition, ApiError> {
        self.post_json("/field-definitions", definition).await
    }
}
