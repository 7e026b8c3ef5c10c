//! A service for running verification attempts: resolving a captured
//! payload, decoding it through the backend and classifying the result.
//!
//! One attempt moves through `Idle → Capturing → Resolving → Decoding →
//! Classifying → Presenting → Idle`. A failure while resolving or decoding
//! lands in `Presenting` with an error outcome instead of a distinct
//! failure state. The backend appends the scan-history entry as a side
//! effect of the decode call; nothing is posted from here.

use std::sync::Arc;

use veriscan_providers::capture::CaptureSession;
use veriscan_providers::common_models::scan::ScanPayload;
use veriscan_providers::verification::{
    classifier::classify,
    model::{DecodedScan, VerificationOutcome},
    PayloadResolver, ScanDecoder,
};

use crate::{
    model::ScanStep,
    presenter::{render_failure, render_scan, RenderedOutcome},
    service::error::VerificationServiceError,
};

pub struct VerificationService {
    resolver: Arc<dyn PayloadResolver>,
    decoder: Arc<dyn ScanDecoder>,
}

/// Result of one attempt: exactly one outcome, plus the decoded scan when
/// the backend produced one and the view data for presenting it.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    pub outcome: VerificationOutcome,
    pub scan: Option<DecodedScan>,
    pub rendered: RenderedOutcome,
}

impl VerificationService {
    pub fn new(resolver: Arc<dyn PayloadResolver>, decoder: Arc<dyn ScanDecoder>) -> Self {
        Self { resolver, decoder }
    }

    /// Verifies one payload, from whatever source it was captured
    /// (camera frame or uploaded image). Resolution and decode failures
    /// fold into the report's outcome; this method itself cannot fail.
    pub async fn verify(&self, payload: &ScanPayload) -> VerificationReport {
        tracing::debug!(step = %ScanStep::Resolving, "verification attempt started");
        let resolved = match self.resolver.resolve(payload).await {
            Ok(resolved) => resolved,
            Err(error) => return Self::failed_report(error.to_string()),
        };

        tracing::debug!(step = %ScanStep::Decoding, "payload resolved");
        let scan = match self.decoder.decode(&resolved).await {
            Ok(scan) => scan,
            Err(error) => return Self::failed_report(error.to_string()),
        };

        tracing::debug!(step = %ScanStep::Classifying, "payload decoded");
        let outcome = classify(&scan);

        tracing::debug!(step = %ScanStep::Presenting, %outcome, "attempt classified");
        VerificationReport {
            rendered: render_scan(&outcome, &scan),
            outcome,
            scan: Some(scan),
        }
    }

    /// Waits for the next candidate on an armed capture session and
    /// verifies it. The session pauses on candidate detection, so no
    /// second attempt can start until the caller re-arms it after
    /// presenting the report.
    pub async fn verify_next_candidate(
        &self,
        session: &mut CaptureSession,
    ) -> Result<VerificationReport, VerificationServiceError> {
        tracing::debug!(step = %ScanStep::Capturing, device = %session.device().id, "waiting for candidate");
        let payload = session.next_candidate().await?;

        Ok(self.verify(&payload).await)
    }

    fn failed_report(message: String) -> VerificationReport {
        tracing::debug!(step = %ScanStep::Presenting, message, "attempt failed");
        VerificationReport {
            outcome: VerificationOutcome::Error {
                message: message.to_owned(),
            },
            scan: None,
            rendered: render_failure(message),
        }
    }
}
