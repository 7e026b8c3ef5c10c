//! A service for resolving printable renditions of verified documents.

use std::sync::Arc;

use veriscan_providers::artifact::{model::PrintableArtifact, ArtifactResolver};
use veriscan_providers::common_models::document::{DocumentDescriptor, DocumentId};
use veriscan_providers::common_models::profile::StudentProfile;

use crate::service::error::ArtifactServiceError;

pub struct ArtifactService {
    artifacts: Arc<dyn ArtifactResolver>,
}

impl ArtifactService {
    pub fn new(artifacts: Arc<dyn ArtifactResolver>) -> Self {
        Self { artifacts }
    }

    /// The printable rendition of a verified document, resolved through
    /// the explicit-path → attachment → constructed-path chain.
    pub async fn printable(
        &self,
        document: &DocumentDescriptor,
        profile: &StudentProfile,
    ) -> Result<PrintableArtifact, ArtifactServiceError> {
        Ok(self.artifacts.printable(document, profile).await?)
    }

    /// Document record behind an unauthenticated public preview link.
    pub async fn public_document(
        &self,
        document_id: &DocumentId,
    ) -> Result<DocumentDescriptor, ArtifactServiceError> {
        Ok(self.artifacts.public_detail(document_id).await?)
    }
}
