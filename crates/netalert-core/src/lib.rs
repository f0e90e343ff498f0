//! # netalert-core
//!
//! Core types and utilities shared by the NetAlertX inventory crates.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy, error codes and exit status mapping
//! - [`config`] - Configuration for reaching the NetAlertX API
//! - [`client`] - HTTP client defaults

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;

pub use config::ApiConfig;
pub use error::{Error, ErrorCategory, Result};
