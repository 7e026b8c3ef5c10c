pub mod decoder;
pub mod resolver;

use std::time::Duration;

/// Connection settings shared by the remote verification endpoints.
#[derive(Clone, Debug)]
pub struct Params {
    pub base_url: String,
    pub request_timeout: Option<Duration>,
}
