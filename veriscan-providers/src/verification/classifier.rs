//! Pure mapping from a decoded scan to its verification outcome.

use crate::common_models::scan::{ScanStatus, VerificationStatus};
use crate::verification::model::{DecodedScan, VerificationOutcome};

/// Reason string the backend stores when a revocation was filed without one.
pub const NO_REASON_PLACEHOLDER: &str = "No reason provided";

/// Maps the backend's `(verification_status, scan_status)` pair onto a
/// single outcome. Total: every decoder response maps to exactly one
/// outcome, with `Error` as the catch-all.
pub fn classify(scan: &DecodedScan) -> VerificationOutcome {
    if scan.verification_status == VerificationStatus::Valid
        || scan.scan_status == ScanStatus::Success
    {
        return VerificationOutcome::Valid;
    }

    if scan.scan_status == ScanStatus::Revoked {
        return VerificationOutcome::Revoked {
            reason: revocation_reason(scan.document.revocation_reason.as_deref()),
        };
    }

    VerificationOutcome::Error {
        message: "Unknown verification status".to_string(),
    }
}

/// Drops empty reasons and the backend's placeholder text.
pub(crate) fn revocation_reason(reason: Option<&str>) -> Option<String> {
    reason
        .filter(|reason| !reason.is_empty() && *reason != NO_REASON_PLACEHOLDER)
        .map(ToOwned::to_owned)
}
