//! Where device records come from.

use crate::Result;
use async_trait::async_trait;
use netalert_api::DevicesClient;
use serde_json::Value;

/// Supplier of raw device records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceSource: Send + Sync {
    /// Fetch every device record.
    async fn fetch_devices(&self) -> Result<Vec<Value>>;
}

#[async_trait]
impl DeviceSource for DevicesClient {
    async fn fetch_devices(&self) -> Result<Vec<Value>> {
        self.list_devices().await
    }
}
