use serde::{Deserialize, Serialize};

use crate::common_models::macros::{impl_display, impl_from, impl_into};

/// Platform identifier of a capture device.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DeviceId(String);
impl_display!(DeviceId);
impl_from!(DeviceId; String);
impl_into!(DeviceId; String);

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CaptureDevice {
    pub id: DeviceId,
    pub label: String,
}
