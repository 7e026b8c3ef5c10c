use thiserror::Error;

use crate::capture::model::DeviceId;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("no capture device available")]
    NoDevice,
    #[error("capture device is busy")]
    DeviceBusy,
    #[error("unknown capture device: `{0}`")]
    UnknownDevice(DeviceId),
    #[error("capture session is paused")]
    SessionPaused,
    #[error("capture source closed the stream")]
    SourceClosed,
}

impl CaptureError {
    /// Short recovery hint suitable for direct display next to the error.
    pub fn user_hint(&self) -> &'static str {
        match self {
            CaptureError::PermissionDenied => {
                "Allow camera access in your browser or system settings, then try again."
            }
            CaptureError::NoDevice => "Connect a camera or upload an image of the QR code instead.",
            CaptureError::DeviceBusy => {
                "Close other applications using the camera, or select another camera."
            }
            CaptureError::UnknownDevice(_) => "Select one of the listed cameras.",
            CaptureError::SessionPaused => "Dismiss the current result to resume scanning.",
            CaptureError::SourceClosed => "Reconnect the camera and start a new scan session.",
        }
    }
}
