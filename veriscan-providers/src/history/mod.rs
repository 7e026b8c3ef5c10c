//! Read access to the backend's scan-history feed.
//!
//! The backend appends a history entry as a side effect of every
//! verification attempt; this client only reads the paginated feed and
//! replays stored entries. Past entries are never mutated.

use crate::common_dto::ApiPage;
use crate::common_models::document::{DocumentDescriptor, DocumentId};
use crate::history::error::HistoryError;
use crate::history::model::{HistoryQuery, ScanHistoryEntry};

pub mod error;
pub mod imp;
pub mod model;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ScanHistory: Send + Sync {
    /// One page of the scan-history feed, filtered and searched server-side.
    async fn list(&self, query: &HistoryQuery) -> Result<ApiPage<ScanHistoryEntry>, HistoryError>;

    /// The full document record behind a history entry, for detail replay.
    async fn detail(&self, document_id: &DocumentId) -> Result<DocumentDescriptor, HistoryError>;
}
