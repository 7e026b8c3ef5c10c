//! Artifact resolution against the backend detail endpoints.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::{
    artifact::{
        error::ArtifactError,
        model::{ArtifactProvenance, PrintableArtifact},
        ArtifactResolver,
    },
    common_dto::ApiEnvelope,
    common_models::{
        auth::AccessToken,
        document::{DocumentDescriptor, DocumentId},
        profile::StudentProfile,
    },
    http_client::{HttpClient, RequestBuilder},
};

/// Attachment type under which the backend stores the rendered document.
const FINAL_DOCUMENT_ATTACHMENT: &str = "final document";

#[derive(Clone, Debug)]
pub struct Params {
    pub base_url: String,
    /// Base of the unauthenticated mirror serving public preview links.
    pub public_base_url: String,
    pub request_timeout: Option<Duration>,
}

pub struct RemoteArtifactResolver {
    params: Params,
    client: Arc<dyn HttpClient>,
    token: Option<AccessToken>,
}

#[derive(Deserialize)]
struct DetailDataDTO {
    document: DocumentDescriptor,
}

impl RemoteArtifactResolver {
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

    async fn detail(&self, document_id: &DocumentId) -> Result<DocumentDescriptor, ArtifactError> {
        let url = format!(
            "{}/document-verification/details/{}",
            self.params.base_url, document_id
        );

        let response = self.prepare(self.client.get(&url)).send().await?;

        if response.status.is_client_error() {
            return Err(ArtifactError::DocumentNotFound(*document_id));
        }

        let envelope: ApiEnvelope<DetailDataDTO> = response.error_for_status()?.json()?;

        envelope
            .into_result()
            .map(|data| data.document)
            .map_err(|message| {
                ArtifactError::MappingError(
                    message.unwrap_or_else(|| "missing document".to_string()),
                )
            })
    }
}

#[async_trait::async_trait]
impl ArtifactResolver for RemoteArtifactResolver {
    async fn printable(
        &self,
        document: &DocumentDescriptor,
        profile: &StudentProfile,
    ) -> Result<PrintableArtifact, ArtifactError> {
        if let Some(path) = &document.final_document_path {
            return Ok(PrintableArtifact {
                path: path.to_owned(),
                provenance: ArtifactProvenance::Explicit,
            });
        }

        let detail = self.detail(&document.id).await?;
        if let Some(attachment) = detail
            .attachments
            .iter()
            .find(|attachment| attachment.attachment_type == FINAL_DOCUMENT_ATTACHMENT)
        {
            return Ok(PrintableArtifact {
                path: attachment.path.to_owned(),
                provenance: ArtifactProvenance::Attachment,
            });
        }

        tracing::warn!(
            document_id = %document.id,
            "no attachment metadata, falling back to constructed storage path"
        );

        Ok(PrintableArtifact {
            path: constructed_storage_path(document, profile),
            provenance: ArtifactProvenance::ConstructedPath,
        })
    }

    async fn public_detail(
        &self,
        document_id: &DocumentId,
    ) -> Result<DocumentDescriptor, ArtifactError> {
        let url = format!(
            "{}/public/document-verification/details/{}",
            self.params.public_base_url, document_id
        );

        let mut builder = self.client.get(&url);
        if let Some(timeout) = self.params.request_timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        if response.status.is_client_error() {
            return Err(ArtifactError::DocumentNotFound(*document_id));
        }

        let envelope: ApiEnvelope<DetailDataDTO> = response.error_for_status()?.json()?;

        envelope
            .into_result()
            .map(|data| data.document)
            .map_err(|message| {
                ArtifactError::MappingError(
                    message.unwrap_or_else(|| "missing document".to_string()),
                )
            })
    }
}

/// Storage path of a rendered document under the registrar's naming
/// convention. Breaks silently if that convention changes server-side;
/// the fallback chain consults it last for exactly that reason.
fn constructed_storage_path(document: &DocumentDescriptor, profile: &StudentProfile) -> String {
    format!(
        "storage/documents/{}/{}-v{}.pdf",
        document.document_type, profile.id_number, document.version
    )
}

#[cfg(test)]
mod test;
