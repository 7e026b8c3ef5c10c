use strum_macros::{Display, EnumString};

/// Steps of one verification attempt, in the order they are entered.
/// Failures while resolving or decoding skip straight to `Presenting`
/// with an error outcome; there is no separate failure step.
#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScanStep {
    #[strum(serialize = "IDLE")]
    Idle,
    #[strum(serialize = "CAPTURING")]
    Capturing,
    #[strum(serialize = "RESOLVING")]
    Resolving,
    #[strum(serialize = "DECODING")]
    Decoding,
    #[strum(serialize = "CLASSIFYING")]
    Classifying,
    #[strum(serialize = "PRESENTING")]
    Presenting,
}
