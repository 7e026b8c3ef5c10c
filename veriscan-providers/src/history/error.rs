use thiserror::Error;

use crate::common_models::document::DocumentId;
use crate::http_client;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Document not found: `{0}`")]
    DocumentNotFound(DocumentId),
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error("HTTP client error: `{0}`")]
    HttpClient(#[from] http_client::Error),
    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}
