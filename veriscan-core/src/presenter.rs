//! View data for finished verification attempts.
//!
//! The embedding UI decides how a result looks; this module decides what
//! it says. Rendering is pure: the same outcome renders to the same view
//! every time, which keeps history replays idempotent.

use strum_macros::Display;

use veriscan_providers::common_models::document::DocumentDescriptor;
use veriscan_providers::common_models::profile::StudentProfile;
use veriscan_providers::history::model::ScanHistoryEntry;
use veriscan_providers::verification::model::{DecodedScan, VerificationOutcome};

/// Badge text shown next to the details of a successfully verified document.
pub const INTEGRITY_BADGE: &str = "Integrity verified";

#[derive(Debug, Copy, Clone, Display, PartialEq, Eq)]
pub enum OutcomeSeverity {
    Success,
    Warning,
    Failure,
}

/// Everything a result view needs, regardless of where the outcome came
/// from (live scan or history replay).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedOutcome {
    pub severity: OutcomeSeverity,
    pub banner: String,
    pub integrity_badge: Option<&'static str>,
    pub document: Option<DocumentDescriptor>,
    pub profile: Option<StudentProfile>,
    pub verification_details: Option<serde_json::Value>,
}

/// Renders a live scan result.
pub fn render_scan(outcome: &VerificationOutcome, scan: &DecodedScan) -> RenderedOutcome {
    let mut rendered = render_bare(outcome);

    // the revoked and error banners still show which document was scanned
    rendered.document = Some(scan.document.to_owned());
    rendered.profile = Some(scan.profile.to_owned());
    if matches!(outcome, VerificationOutcome::Valid) {
        rendered.verification_details = scan.verification_details.to_owned();
    }

    rendered
}

/// Renders a failed attempt that never produced a decoded scan.
pub fn render_failure(message: String) -> RenderedOutcome {
    render_bare(&VerificationOutcome::Error { message })
}

/// Renders a stored history entry, optionally enriched with the document
/// record fetched for detail replay.
pub fn render_history_entry(
    entry: &ScanHistoryEntry,
    document: Option<&DocumentDescriptor>,
) -> RenderedOutcome {
    let mut rendered = render_bare(&entry.outcome());
    rendered.document = document.map(ToOwned::to_owned);
    rendered
}

fn render_bare(outcome: &VerificationOutcome) -> RenderedOutcome {
    let (severity, banner, integrity_badge) = match outcome {
        VerificationOutcome::Valid => (
            OutcomeSeverity::Success,
            "Document verified successfully".to_string(),
            Some(INTEGRITY_BADGE),
        ),
        VerificationOutcome::Revoked {
            reason: Some(reason),
        } => (
            OutcomeSeverity::Warning,
            format!("Document has been revoked: {reason}"),
            None,
        ),
        VerificationOutcome::Revoked { reason: None } => (
            OutcomeSeverity::Warning,
            "Document has been revoked".to_string(),
            None,
        ),
        VerificationOutcome::HashMismatch => (
            OutcomeSeverity::Failure,
            "Document may have been tampered with or forged".to_string(),
            None,
        ),
        VerificationOutcome::Error { message } => {
            (OutcomeSeverity::Failure, message.to_owned(), None)
        }
    };

    RenderedOutcome {
        severity,
        banner,
        integrity_badge,
        document: None,
        profile: None,
        verification_details: None,
    }
}
