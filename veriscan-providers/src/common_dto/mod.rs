//! Wire envelopes shared by every backend endpoint.

use serde::Deserialize;

/// Standard response wrapper of the registrar backend: a `success` flag, an
/// optional payload and an optional human-readable message.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Extracts the payload of a successful envelope, or the server message
    /// of a failed one.
    pub fn into_result(self) -> Result<T, Option<String>> {
        if self.success {
            self.data.ok_or(self.message)
        } else {
            Err(self.message)
        }
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPage<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub per_page: u32,
    pub last_page: u32,
    pub total: u64,
}
