//! Hash-reference resolution against the backend.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    common_dto::ApiEnvelope,
    common_models::{auth::AccessToken, scan::ScanPayload},
    http_client::{HttpClient, RequestBuilder},
    verification::{
        error::VerificationError, imp::Params, model::ResolvedPayload, PayloadResolver,
    },
};

pub struct RemoteResolver {
    params: Params,
    client: Arc<dyn HttpClient>,
    token: Option<AccessToken>,
}

#[derive(Serialize)]
struct VerifyHashRequestDTO<'a> {
    hash: &'a str,
}

#[derive(Deserialize)]
struct VerifyHashDataDTO {
    base45_data: String,
    #[serde(default)]
    #[allow(dead_code)]
    serial_number: Option<String>,
}

impl RemoteResolver {
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
impl PayloadResolver for RemoteResolver {
    async fn resolve(&self, payload: &ScanPayload) -> Result<ResolvedPayload, VerificationError> {
        if !payload.is_content_hash() {
            return Ok(ResolvedPayload::from(payload.as_str().to_owned()));
        }

        let url = format!("{}/document-verification/verify-hash", self.params.base_url);
        tracing::debug!(url, "looking up scanned hash reference");

        let builder = self
            .client
            .post(&url)
            .json(VerifyHashRequestDTO {
                hash: payload.as_str(),
            })?;

        let response = self.prepare(builder).send().await?;

        // the backend answers an unknown hash with a client error
        if response.status.is_client_error() {
            return Err(VerificationError::HashNotFound);
        }

        let envelope: ApiEnvelope<VerifyHashDataDTO> = response.error_for_status()?.json()?;

        let data = envelope
            .into_result()
            .map_err(|_| VerificationError::HashNotFound)?;

        Ok(ResolvedPayload::from(data.base45_data))
    }
}

#[cfg(test)]
mod test;
