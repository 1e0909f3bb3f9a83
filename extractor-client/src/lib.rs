//! Client-side core for the HITL Document Extractor frontend: a typed API
//! client for the document-extraction backend and the view router.
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod router;
pub mod services;

pub use error::ApiError;
pub use services::ExtractorClient;
