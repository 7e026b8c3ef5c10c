//! Scan capture sources and sessions.
//!
//! A [`ScanSource`] produces [`CaptureSession`]s: continuous streams of
//! candidate payloads read from a camera or another frame producer. A
//! session is an explicit resource. Capture pauses as soon as a candidate
//! is handed out and resumes only when the session is re-armed, so at most
//! one verification attempt is in flight per session. Dropping the session
//! releases the underlying device on every exit path.

use tokio::sync::{mpsc, watch};

use crate::capture::error::CaptureError;
use crate::capture::model::{CaptureDevice, DeviceId};
use crate::common_models::scan::ScanPayload;

pub mod error;
pub mod imp;
pub mod model;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ScanSource: Send + Sync {
    /// Lists the capture devices currently available to this source.
    async fn list_devices(&self) -> Result<Vec<CaptureDevice>, CaptureError>;

    /// Opens an armed capture session on the given device.
    async fn open(&self, device: &DeviceId) -> Result<CaptureSession, CaptureError>;
}

/// One live capture stream. Producers push candidate payloads into the
/// session and observe the armed flag; they stop pushing while the session
/// is paused and shut down when it is dropped.
pub struct CaptureSession {
    device: CaptureDevice,
    frames: mpsc::Receiver<ScanPayload>,
    armed: watch::Sender<bool>,
}

impl CaptureSession {
    pub fn new(
        device: CaptureDevice,
        frames: mpsc::Receiver<ScanPayload>,
        armed: watch::Sender<bool>,
    ) -> Self {
        Self {
            device,
            frames,
            armed,
        }
    }

    /// The device this session captures from; re-arming resumes on it.
    pub fn device(&self) -> &CaptureDevice {
        &self.device
    }

    pub fn is_armed(&self) -> bool {
        *self.armed.borrow()
    }

    /// Waits for the next candidate payload. Capture pauses the moment a
    /// candidate is returned; call [`CaptureSession::rearm`] once the
    /// attempt has been presented to resume scanning.
    pub async fn next_candidate(&mut self) -> Result<ScanPayload, CaptureError> {
        if !self.is_armed() {
            return Err(CaptureError::SessionPaused);
        }

        match self.frames.recv().await {
            Some(payload) => {
                self.armed.send_replace(false);
                Ok(payload)
            }
            None => Err(CaptureError::SourceClosed),
        }
    }

    /// Resumes capture on the session's device after an attempt finished.
    pub fn rearm(&mut self) {
        self.armed.send_replace(true);
    }

    /// Releases the device. Equivalent to dropping the session; exists so
    /// call sites can make the release explicit.
    pub fn close(self) {}
}
