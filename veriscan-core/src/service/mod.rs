//! Developer APIs orchestrating the providers into simple workflows.

pub mod artifact_service;
pub mod error;
pub mod history_service;
pub mod verification_service;
