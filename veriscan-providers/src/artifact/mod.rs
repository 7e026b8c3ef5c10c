//! Resolution of printable artifacts for verified documents.
//!
//! A verified document is offered for preview/download as a rendered file.
//! Where that file lives is answered through a fallback chain: the
//! descriptor's own final-document path, an attachment found through a
//! detail lookup, and as a last resort a storage path constructed from
//! document fields.

use crate::artifact::error::ArtifactError;
use crate::artifact::model::PrintableArtifact;
use crate::common_models::document::{DocumentDescriptor, DocumentId};
use crate::common_models::profile::StudentProfile;

pub mod error;
pub mod imp;
pub mod model;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ArtifactResolver: Send + Sync {
    /// Resolves the printable rendition of a verified document.
    async fn printable(
        &self,
        document: &DocumentDescriptor,
        profile: &StudentProfile,
    ) -> Result<PrintableArtifact, ArtifactError>;

    /// Unauthenticated document lookup backing public preview links.
    async fn public_detail(
        &self,
        document_id: &DocumentId,
    ) -> Result<DocumentDescriptor, ArtifactError>;
}
