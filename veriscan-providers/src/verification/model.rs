//! `struct`s and `enum`s for the verification modules.

use strum::Display;

use crate::common_models::{
    document::DocumentDescriptor,
    macros::{impl_display, impl_from, impl_into},
    profile::StudentProfile,
    scan::{ScanStatus, VerificationStatus},
};

/// A payload guaranteed to be in decoder-ready form: hash references have
/// already been replaced by the encoded data they point to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResolvedPayload(String);
impl_display!(ResolvedPayload);
impl_from!(ResolvedPayload; String);
impl_into!(ResolvedPayload; String);

impl ResolvedPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything the backend decoder reports for one payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedScan {
    pub document: DocumentDescriptor,
    pub profile: StudentProfile,
    pub verification_status: VerificationStatus,
    pub scan_status: ScanStatus,
    pub verification_details: Option<serde_json::Value>,
}

/// Final verdict for one scan attempt. Exactly one outcome exists per
/// attempt.
#[derive(Clone, Debug, Display, PartialEq)]
pub enum VerificationOutcome {
    Valid,
    Revoked {
        reason: Option<String>,
    },
    /// The stored payload no longer matches the issued document. Never
    /// produced by live classification, only when rendering persisted
    /// history records.
    HashMismatch,
    Error {
        message: String,
    },
}
