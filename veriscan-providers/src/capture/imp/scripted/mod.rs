//! In-memory scan source backed by predefined frames.
//!
//! Stands in for a real camera during tests and demos: each device plays
//! back a fixed sequence of payloads, honoring the session's armed flag the
//! way a camera adapter has to.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch, Mutex};

use crate::capture::error::CaptureError;
use crate::capture::model::{CaptureDevice, DeviceId};
use crate::capture::{CaptureSession, ScanSource};
use crate::common_models::scan::ScanPayload;

pub struct ScriptedSource {
    frames: Arc<Mutex<HashMap<DeviceId, Vec<ScanPayload>>>>,
    devices: Vec<CaptureDevice>,
}

impl ScriptedSource {
    pub fn new(frames: HashMap<DeviceId, Vec<ScanPayload>>) -> Self {
        let devices = frames
            .keys()
            .map(|id| CaptureDevice {
                id: id.to_owned(),
                label: format!("Scripted camera {id}"),
            })
            .collect();

        Self {
            frames: Arc::new(Mutex::new(frames)),
            devices,
        }
    }

    /// A source with a single device playing back the given frames.
    pub fn single_device(frames: Vec<ScanPayload>) -> Self {
        Self::new(HashMap::from([(DeviceId::from("scripted-0"), frames)]))
    }
}

#[async_trait]
impl ScanSource for ScriptedSource {
    async fn list_devices(&self) -> Result<Vec<CaptureDevice>, CaptureError> {
        if self.devices.is_empty() {
            return Err(CaptureError::NoDevice);
        }

        Ok(self.devices.to_owned())
    }

    async fn open(&self, device: &DeviceId) -> Result<CaptureSession, CaptureError> {
        let frames = self
            .frames
            .lock()
            .await
            .get(device)
            .ok_or_else(|| CaptureError::UnknownDevice(device.to_owned()))?
            .to_owned();

        let descriptor = self
            .devices
            .iter()
            .find(|candidate| candidate.id == *device)
            .ok_or_else(|| CaptureError::UnknownDevice(device.to_owned()))?
            .to_owned();

        let (frame_tx, frame_rx) = mpsc::channel(1);
        let (armed_tx, mut armed_rx) = watch::channel(true);

        tokio::spawn(async move {
            for frame in frames {
                // hold back frames while the session is paused
                while !*armed_rx.borrow() {
                    if armed_rx.changed().await.is_err() {
                        return;
                    }
                }

                if frame_tx.send(frame).await.is_err() {
                    return;
                }
            }
        });

        Ok(CaptureSession::new(descriptor, frame_rx, armed_tx))
    }
}
