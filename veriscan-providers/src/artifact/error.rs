use thiserror::Error;

use crate::common_models::document::DocumentId;
use crate::http_client;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Document not found: `{0}`")]
    DocumentNotFound(DocumentId),
    #[error("no printable artifact available for document `{0}`")]
    NoPrintableArtifact(DocumentId),
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error("HTTP client error: `{0}`")]
    HttpClient(#[from] http_client::Error),
    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}
