//! `struct`s and `enum`s for the scan-history module.

use serde::{Deserialize, Serialize};
use strum::Display;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::common_models::{
    document::DocumentId,
    macros::{impl_display, impl_from, impl_into},
    scan::ScanStatus,
};
use crate::verification::classifier::revocation_reason;
use crate::verification::model::VerificationOutcome;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HistoryEntryId(Uuid);
impl_display!(HistoryEntryId);
impl_from!(HistoryEntryId; Uuid);
impl_into!(HistoryEntryId; Uuid);

/// One persisted scan attempt. Append-only on the server; the client never
/// writes these.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScanHistoryEntry {
    pub id: HistoryEntryId,
    #[serde(with = "time::serde::rfc3339")]
    pub scanned_at: OffsetDateTime,
    #[serde(default)]
    pub document_id: Option<DocumentId>,
    #[serde(default)]
    pub serial_number: Option<String>,
    pub scan_status: ScanStatus,
    /// Raw decode response captured at scan time.
    #[serde(default)]
    pub scan_result: Option<serde_json::Value>,
}

impl ScanHistoryEntry {
    /// Outcome of the stored attempt, reconstructed from the persisted
    /// status and snapshot. This is the only place a `HashMismatch`
    /// outcome can originate: the live classifier reports such payloads
    /// as errors, and only records already persisted with the
    /// `hash_mismatch` status surface it.
    pub fn outcome(&self) -> VerificationOutcome {
        match self.scan_status {
            ScanStatus::Success => VerificationOutcome::Valid,
            ScanStatus::Revoked => VerificationOutcome::Revoked {
                reason: revocation_reason(
                    self.scan_result
                        .as_ref()
                        .and_then(|snapshot| {
                            snapshot.pointer("/document/revocation_reason")?.as_str()
                        }),
                ),
            },
            ScanStatus::HashMismatch => VerificationOutcome::HashMismatch,
            ScanStatus::Error | ScanStatus::Unknown => VerificationOutcome::Error {
                message: self
                    .scan_result
                    .as_ref()
                    .and_then(|snapshot| snapshot.pointer("/message")?.as_str())
                    .unwrap_or("Unknown verification status")
                    .to_string(),
            },
        }
    }
}

/// Outcome buckets offered by the history filter.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum HistoryBucket {
    #[default]
    All,
    Verified,
    Revoked,
    Invalid,
}

impl HistoryBucket {
    /// Stored statuses the bucket selects; `None` selects everything.
    /// `Invalid` is a client-side union, the backend has no such status.
    pub fn statuses(&self) -> Option<&'static [ScanStatus]> {
        match self {
            HistoryBucket::All => None,
            HistoryBucket::Verified => Some(&[ScanStatus::Success]),
            HistoryBucket::Revoked => Some(&[ScanStatus::Revoked]),
            HistoryBucket::Invalid => Some(&[ScanStatus::Error, ScanStatus::HashMismatch]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryQuery {
    pub page: u32,
    pub per_page: u32,
    pub bucket: HistoryBucket,
    pub search: Option<String>,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
            bucket: HistoryBucket::All,
            search: None,
        }
    }
}
