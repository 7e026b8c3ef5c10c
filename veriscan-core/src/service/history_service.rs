//! A service for reading the scan-history feed and replaying stored
//! entries.

use std::sync::Arc;

use veriscan_providers::common_dto::ApiPage;
use veriscan_providers::history::{
    model::{HistoryBucket, HistoryQuery, ScanHistoryEntry},
    ScanHistory,
};

use crate::{
    presenter::{render_history_entry, RenderedOutcome},
    service::error::HistoryServiceError,
};

pub struct HistoryService {
    history: Arc<dyn ScanHistory>,
    default_page_size: u32,
}

impl HistoryService {
    pub fn new(history: Arc<dyn ScanHistory>, default_page_size: u32) -> Self {
        Self {
            history,
            default_page_size,
        }
    }

    /// One page of the feed, filtered by outcome bucket and an optional
    /// search term.
    pub async fn page(
        &self,
        page: u32,
        bucket: HistoryBucket,
        search: Option<String>,
    ) -> Result<ApiPage<ScanHistoryEntry>, HistoryServiceError> {
        Ok(self
            .history
            .list(&HistoryQuery {
                page,
                per_page: self.default_page_size,
                bucket,
                search,
            })
            .await?)
    }

    /// Renders a stored entry for the detail view. Entries referencing a
    /// document are enriched with its current record; the stored entry
    /// itself is never mutated, so replaying twice renders identically.
    pub async fn replay(
        &self,
        entry: &ScanHistoryEntry,
    ) -> Result<RenderedOutcome, HistoryServiceError> {
        let document = match entry.document_id {
            Some(document_id) => Some(self.history.detail(&document_id).await?),
            None => None,
        };

        Ok(render_history_entry(entry, document.as_ref()))
    }
}

#[cfg(test)]
mod test;
