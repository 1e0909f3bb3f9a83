mod correction;
mod document;
mod extraction;
mod field_definition;
mod id;
mod model_version;
mod session;

pub use correction::{Correction, NewCorrection};
pub use document::{Document, DocumentFilters, DocumentStatus, DocumentUpload};
pub use extraction::{ExtractionField, NewExtractionField};
pub use field_definition::{FieldDefinition, NewFieldDefinition};
pub use id::EntityId;
pub use model_version::{ModelVersion, NewModelVersion};
pub use session::{Session, SessionStatus};
