//! Tools for turning a scanned payload into a verification outcome.
//!
//! A scanned payload is either the encoded document data itself or a
//! 64-character content-hash reference to it. Resolution replaces a hash
//! reference with the encoded payload it points to, decoding hands the
//! payload to the backend and returns the described document, and
//! classification maps the backend's status pair onto a single outcome.

use crate::common_models::scan::ScanPayload;
use crate::verification::error::VerificationError;
use crate::verification::model::{DecodedScan, ResolvedPayload};

pub mod classifier;
pub mod error;
pub mod imp;
pub mod model;

/// Turns a captured payload into decoder-ready form.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PayloadResolver: Send + Sync {
    /// Passes direct payloads through unchanged; hash references are
    /// looked up remotely and replaced by the payload they reference.
    /// A single lookup failure aborts the attempt, there are no retries.
    async fn resolve(&self, payload: &ScanPayload) -> Result<ResolvedPayload, VerificationError>;
}

/// Decodes a resolved payload into a document descriptor via the backend.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ScanDecoder: Send + Sync {
    async fn decode(&self, payload: &ResolvedPayload) -> Result<DecodedScan, VerificationError>;
}
