//! Command line arguments and the run entry point.
//!
//! Ansible invokes inventory scripts with either `--list` or `--host <name>`.
//! Running without arguments behaves like `--list`.

use crate::builder::build_inventory;
use crate::source::DeviceSource;
use crate::Result;
use clap::Parser;
use netalert_core::Error;
use tracing::debug;

/// Ansible dynamic inventory for hosts discovered by NetAlertX.
///
/// Connection settings are read from `NETALERTX_HOST`, `NETALERTX_PORT`,
/// `NETALERTX_TOKEN` and `NETALERTX_TIMEOUT`. Set `NETALERTX_DEBUG=1` for
/// debug output on stderr.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "netalert-inventory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the whole inventory (default).
    #[arg(long, conflicts_with = "host")]
    pub list: bool,

    /// Print the variables of a single host.
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,
}

/// What to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// The whole inventory.
    List,
    /// Variables of one host.
    Host(String),
}

impl Cli {
    /// Selected output mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match &self.host {
            Some(host) => Mode::Host(host.clone()),
            None => Mode::List,
        }
    }
}

/// Fetch devices and render the requested document.
///
/// Nothing is printed here; the caller writes the returned JSON to stdout
/// only when the whole run succeeded.
///
/// # Errors
///
/// Propagates fetch failures and returns [`Error::SerializeError`] if the
/// document cannot be rendered.
pub async fn run(cli: &Cli, source: &dyn DeviceSource) -> Result<String> {
    let devices = source.fetch_devices().await?;
    let inventory = build_inventory(&devices);
    debug!(
        devices = devices.len(),
        hosts = inventory.hostvars().len(),
        groups = inventory.groups().len(),
        "inventory built"
    );

    match cli.mode() {
        Mode::List => inventory.to_json_pretty(),
        Mode::Host(host) => serde_json::to_string_pretty(&inventory.hostvars_for(&host))
            .map_err(|err| Error::SerializeError(err.to_string())),
    }
}
