use serde::{Deserialize, Serialize};

/// Schema entry for a field the model can extract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub data_type: String,
    #[serde(default)]
    pub required: bool,
}

/// Request to register a field definition.
#[derive(Debug, Clone, Serialize)]
pub struct NewFieldDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub data_type: String,
    pub required: bool,
}
