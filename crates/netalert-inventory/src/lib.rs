//! Ansible dynamic inventory built from NetAlertX devices.
//!
//! Devices are grouped by the `TAGS=` entries of their free-text comments and
//! carry `VARS_*` entries as host variables.
//!
//! - [`annotation`] - Tokenizer and parser for device comments
//! - [`builder`] - Inventory construction and JSON rendering
//! - [`source`] - Where device records come from
//! - [`cli`] - Command line arguments and the run entry point

#![deny(missing_docs)]

pub mod annotation;
pub mod builder;
pub mod cli;
pub mod source;

pub use annotation::{parse_comments, Annotation, Segment};
pub use builder::{build_inventory, Inventory};
pub use cli::{run, Cli};
pub use source::DeviceSource;

/// Convenient result alias sharing the `netalert-core` error type.
pub type Result<T> = netalert_core::Result<T>;
