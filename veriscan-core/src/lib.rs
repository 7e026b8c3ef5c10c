//! **Veriscan Core** is a client library for verifying registrar-issued
//! documents (transcripts, diplomas, certifications) against a
//! document-verification backend.
//!
//! A scanned QR code yields either the encoded document payload itself or
//! a 64-character content-hash reference to it. The library resolves the
//! reference, has the backend decode the payload, classifies the response
//! into a single verification outcome (valid, revoked, or error) and
//! produces the view data for presenting it. It also reads the paginated
//! scan-history feed and resolves printable renditions of verified
//! documents.
//!
//! ## Repository structure
//!
//! The library consists of two crates:
//!
//! * **Providers**: modular building blocks behind traits
//!   * Scan capture sources and sessions
//!   * Payload resolution and decoding
//!   * Outcome classification
//!   * Scan-history access
//!   * Printable-artifact resolution
//! * **Core**: services orchestrating the providers
//!
//! ## Getting started
//!
//! Initialize the core with a session context; `None` selects the default
//! configuration:
//!
//! ```ignore rust
//! let core = VeriscanCore::new(None, SessionContext::anonymous(), Arc::new(ReqwestClient::default())).unwrap();
//! ```
//!
//! Then use the services:
//!
//! ```ignore rust
//! let report = core
//!     .verification_service
//!     .verify(&ScanPayload::from(scanned_text))
//!     .await;
//! ```
//!
//! See **/demos** in the repository for full capture-to-presentation
//! round trips.

use std::error::Error;
use std::sync::Arc;

use veriscan_providers::artifact::imp::remote::{
    Params as ArtifactParams, RemoteArtifactResolver,
};
use veriscan_providers::history::imp::remote::{Params as HistoryParams, RemoteScanHistory};
use veriscan_providers::http_client::imp::reqwest_client::ReqwestClient;
use veriscan_providers::http_client::HttpClient;
use veriscan_providers::verification::imp::{
    decoder::RemoteDecoder, resolver::RemoteResolver, Params as VerificationParams,
};

use config::CoreConfig;
use service::{
    artifact_service::ArtifactService, history_service::HistoryService,
    verification_service::VerificationService,
};
use session::SessionContext;

pub mod config;
pub mod model;
pub mod presenter;
pub mod service;
pub mod session;


pub struct VeriscanCore {
    pub verification_service: VerificationService,
    pub history_service: HistoryService,
    pub artifact_service: ArtifactService,
}

impl Default for VeriscanCore {
    fn default() -> Self {
        Self::new(
            None,
            SessionContext::anonymous(),
            Arc::new(ReqwestClient::default()),
        )
        .unwrap()
    }
}

impl VeriscanCore {
    pub fn new(
        config: Option<CoreConfig>,
        session: SessionContext,
        client: Arc<dyn HttpClient>,
    ) -> Result<Self, Box<dyn Error>> {
        let config = config.unwrap_or_default();

        let base_url = config.api.base_url.as_str().trim_end_matches('/').to_string();
        let public_base_url = config
            .api
            .public_base_url
            .as_str()
            .trim_end_matches('/')
            .to_string();

        // initialize the verification providers
        let resolver = Arc::new(RemoteResolver::new(
            VerificationParams {
                base_url: base_url.to_owned(),
                request_timeout: config.api.request_timeout,
            },
            client.clone(),
            session.token.clone(),
        ));
        let decoder = Arc::new(RemoteDecoder::new(
            VerificationParams {
                base_url: base_url.to_owned(),
                request_timeout: config.api.request_timeout,
            },
            client.clone(),
            session.token.clone(),
        ));

        // initialize the history provider
        let history = Arc::new(RemoteScanHistory::new(
            HistoryParams {
                base_url: base_url.to_owned(),
                request_timeout: config.api.request_timeout,
            },
            client.clone(),
            session.token.clone(),
        ));

        // initialize the artifact provider
        let artifacts = Arc::new(RemoteArtifactResolver::new(
            ArtifactParams {
                base_url,
                public_base_url,
                request_timeout: config.api.request_timeout,
            },
            client,
            session.token.clone(),
        ));

        let verification_service = VerificationService::new(resolver, decoder);
        let history_service = HistoryService::new(history, config.history.default_page_size);
        let artifact_service = ArtifactService::new(artifacts);

        Ok(Self {
            verification_service,
            history_service,
            artifact_service,
        })
    }
}
