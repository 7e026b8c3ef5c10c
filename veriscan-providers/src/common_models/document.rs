use serde::{Deserialize, Serialize};
use strum::Display;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::common_models::macros::{impl_display, impl_from, impl_into};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);
impl_display!(DocumentId);
impl_from!(DocumentId; Uuid);
impl_into!(DocumentId; Uuid);

/// Kinds of registrar documents that carry a verification QR code.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentKind {
    Transcript,
    Diploma,
    Certification,
    /// Document types introduced server-side after this client was built.
    #[serde(other)]
    Other,
}

/// Server-owned description of one issued document. The client holds a
/// read-only copy for the duration of a single verification or history view.
#[serde_with::serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub id: DocumentId,
    pub document_type: DocumentKind,
    pub serial_number: String,
    pub version: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub issue_date: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation_reason: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub revocation_date: Option<OffsetDateTime>,
    /// Storage path of the rendered final document, when the backend
    /// provides one directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_document_path: Option<String>,
    // The backend serializes an empty attachment list as `null`.
    #[serde_as(as = "serde_with::DefaultOnNull")]
    #[serde(default)]
    pub attachments: Vec<DocumentAttachment>,
}

/// A file attached to a document record, e.g. the rendered final PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAttachment {
    pub attachment_type: String,
    pub path: String,
}
