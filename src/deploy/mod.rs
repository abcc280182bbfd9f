//! Deployment pipeline: resource specs, the sequential orchestrator and the
//! chain-backed provisioning service.

pub mod chain;
pub mod orchestrator;
pub mod spec;
