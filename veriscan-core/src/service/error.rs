use thiserror::Error;

use veriscan_providers::artifact::error::ArtifactError;
use veriscan_providers::capture::error::CaptureError;
use veriscan_providers::history::error::HistoryError;
use veriscan_providers::verification::error::VerificationError;

#[derive(Debug, Error)]
pub enum VerificationServiceError {
    #[error("Capture error: `{0}`")]
    CaptureError(#[from] CaptureError),
    #[error("Verification error: `{0}`")]
    VerificationError(#[from] VerificationError),
}

#[derive(Debug, Error)]
pub enum HistoryServiceError {
    #[error("History error: `{0}`")]
    HistoryError(#[from] HistoryError),
}

#[derive(Debug, Error)]
pub enum ArtifactServiceError {
    #[error("Artifact error: `{0}`")]
    ArtifactError(#[from] ArtifactError),
}
