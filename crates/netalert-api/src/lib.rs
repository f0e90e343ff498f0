//! NetAlertX API client and device records.
//!
//! Provides the asynchronous client used to list devices known to a NetAlertX
//! instance, and the lenient device model the inventory is built from.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{DevicesClient, DevicesClientBuilder};
pub use models::{Device, DevicesResponse};

/// Convenient result alias sharing the `netalert-core` error type.
pub type Result<T> = netalert_core::Result<T>;
