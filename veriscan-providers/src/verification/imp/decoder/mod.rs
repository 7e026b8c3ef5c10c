//! Payload decoding against the backend.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    common_dto::ApiEnvelope,
    common_models::{
        auth::AccessToken,
        document::DocumentDescriptor,
        profile::StudentProfile,
        scan::{ScanStatus, VerificationStatus},
    },
    http_client::{HttpClient, RequestBuilder},
    verification::{
        error::VerificationError,
        imp::Params,
        model::{DecodedScan, ResolvedPayload},
        ScanDecoder,
    },
};

pub struct RemoteDecoder {
    params: Params,
    client: Arc<dyn HttpClient>,
    token: Option<AccessToken>,
}

#[derive(Serialize)]
struct DecodeRequestDTO<'a> {
    qr_data: &'a str,
}

#[derive(Deserialize)]
struct DecodeDataDTO {
    document: DocumentDescriptor,
    profile: StudentProfile,
    verification_status: VerificationStatus,
    scan_status: ScanStatus,
    #[serde(default)]
    verification_details: Option<serde_json::Value>,
}

impl RemoteDecoder {
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
impl ScanDecoder for RemoteDecoder {
    async fn decode(&self, payload: &ResolvedPayload) -> Result<DecodedScan, VerificationError> {
        let url = format!("{}/document-verification/decode-qr", self.params.base_url);
        tracing::debug!(url, "decoding scanned payload");

        let builder = self.client.post(&url).json(DecodeRequestDTO {
            qr_data: payload.as_str(),
        })?;

        let response = self.prepare(builder).send().await?;

        // failed decodes still carry an envelope with the rejection message
        let envelope: ApiEnvelope<DecodeDataDTO> = match response.json() {
            Ok(envelope) => envelope,
            Err(_) => {
                return Err(VerificationError::DecodeError(
                    VerificationError::INVALID_FORMAT.to_string(),
                ))
            }
        };

        let data = envelope.into_result().map_err(|message| {
            VerificationError::DecodeError(
                message.unwrap_or_else(|| VerificationError::INVALID_FORMAT.to_string()),
            )
        })?;

        Ok(DecodedScan {
            document: data.document,
            profile: data.profile,
            verification_status: data.verification_status,
            scan_status: data.scan_status,
            verification_details: data.verification_details,
        })
    }
}

#[cfg(test)]
mod test;
