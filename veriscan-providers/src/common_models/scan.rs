use serde::{Deserialize, Serialize};
use strum::Display;

use crate::common_models::macros::{impl_display, impl_from, impl_into};

/// Raw text captured from one camera frame or decoded from an uploaded
/// image. Lives for a single verification attempt.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScanPayload(String);
impl_display!(ScanPayload);
impl_from!(ScanPayload; String);
impl_into!(ScanPayload; String);

impl ScanPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the payload is a content-hash reference: exactly 64
    /// hexadecimal characters, case-insensitive.
    pub fn is_content_hash(&self) -> bool {
        self.0.len() == 64 && self.0.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

/// Outcome of a scan as recorded by the backend.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScanStatus {
    Success,
    Revoked,
    Error,
    /// Stored scans whose payload no longer matches the issued document.
    /// Only ever observed on persisted history records; the live decode
    /// path reports such payloads as `Error` instead.
    HashMismatch,
    #[serde(other)]
    Unknown,
}

/// Integrity verdict reported by the backend decoder.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VerificationStatus {
    Valid,
    Invalid,
    #[serde(other)]
    Unknown,
}
