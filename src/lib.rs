//! Scripts for deploying the CRFTD marketplace smart contracts.

#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod constants;
pub mod errors;

/// Our deploy pipeline
pub mod deploy;

// Our output utils
pub mod output_writer;

/// Post-deployment reporting
pub mod summary;

pub mod tx;
