//! Core functionality for the meater-cloud workspace.
//!
//! This crate provides the configuration model, the shared error type and
//! logging initialization used by the client library and the `meater` CLI.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ApiConfig, AppIdentity, Config, SessionConfig};
pub use error::{Error, Result};
