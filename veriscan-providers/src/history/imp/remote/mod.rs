//! Scan-history client against the backend feed.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    common_dto::{ApiEnvelope, ApiPage},
    common_models::{
        auth::AccessToken,
        document::{DocumentDescriptor, DocumentId},
    },
    history::{
        error::HistoryError,
        model::{HistoryQuery, ScanHistoryEntry},
        ScanHistory,
    },
    http_client::{HttpClient, RequestBuilder},
};

#[derive(Clone, Debug)]
pub struct Params {
    pub base_url: String,
    pub request_timeout: Option<Duration>,
}

pub struct RemoteScanHistory {
    params: Params,
    client: Arc<dyn HttpClient>,
    token: Option<AccessToken>,
}

#[derive(Serialize)]
struct HistoryQueryDTO<'a> {
    page: u32,
    per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
}

#[derive(Deserialize)]
struct DetailDataDTO {
    document: DocumentDescriptor,
}

impl RemoteScanHistory {
    pub fn new(params: Params, client: Arc<dyn HttpClient>, token: Option<AccessToken>) -> Self {
        Self {
            params,
            client,
            token,
        }
    }

    fn prepare(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.as_str());
        }
        if let Some(timeout) = self.params.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }
}

#[async_trait::async_trait]
impl ScanHistory for RemoteScanHistory {
    async fn list(&self, query: &HistoryQuery) -> Result<ApiPage<ScanHistoryEntry>, HistoryError> {
        let url = format!("{}/document-verification/scan-history", self.params.base_url);
        tracing::debug!(url, page = query.page, "fetching scan history");

        // the `invalid` bucket has no single backend status; it expands to
        // the statuses it unites
        let status = query.bucket.statuses().map(|statuses| {
            statuses
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        });

        let builder = self.client.get(&url).query(HistoryQueryDTO {
            page: query.page,
            per_page: query.per_page,
            status,
            search: query.search.as_deref(),
        })?;

        let page: ApiPage<ScanHistoryEntry> = self
            .prepare(builder)
            .send()
            .await?
            .error_for_status()?
            .json()?;

        Ok(page)
    }

    async fn detail(&self, document_id: &DocumentId) -> Result<DocumentDescriptor, HistoryError> {
        let url = format!(
            "{}/document-verification/details/{}",
            self.params.base_url, document_id
        );
        tracing::debug!(url, "fetching document detail");

        let response = self.prepare(self.client.get(&url)).send().await?;

        if response.status.is_client_error() {
            return Err(HistoryError::DocumentNotFound(*document_id));
        }

        let envelope: ApiEnvelope<DetailDataDTO> = response.error_for_status()?.json()?;

        envelope
            .into_result()
            .map(|data| data.document)
            .map_err(|message| {
                HistoryError::MappingError(message.unwrap_or_else(|| "missing document".to_string()))
            })
    }
}
