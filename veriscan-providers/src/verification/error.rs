use thiserror::Error;

use crate::http_client;

#[derive(Debug, Error)]
pub enum VerificationError {
    /// The scanned hash reference is not known to the backend.
    #[error("document not found in system")]
    HashNotFound,
    /// The backend rejected the payload; carries the server message.
    #[error("{0}")]
    DecodeError(String),
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error("HTTP client error: `{0}`")]
    HttpClient(#[from] http_client::Error),
    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}

impl VerificationError {
    /// Fallback message when the backend rejects a payload without saying why.
    pub const INVALID_FORMAT: &'static str = "Invalid QR code format";
}
