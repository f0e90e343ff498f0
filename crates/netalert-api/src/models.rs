//! NetAlertX device records.
//!
//! Device records are arbitrary JSON objects. Only the handful of fields the
//! inventory needs are extracted, and a field with an unexpected type is
//! treated as missing rather than failing the whole response.

use crate::Result;
use netalert_core::Error;
use serde_json::Value;

/// Field holding the fully-qualified domain name.
pub const FIELD_FQDN: &str = "devFQDN";
/// Field holding the device name, used when no FQDN is known.
pub const FIELD_NAME: &str = "devName";
/// Field holding the last seen IP address.
pub const FIELD_LAST_IP: &str = "devLastIP";
/// Field holding the free-text annotation.
pub const FIELD_COMMENTS: &str = "devComments";

/// Body of a `GET /devices` response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DevicesResponse {
    /// Raw device records, in the order the API returned them.
    pub devices: Vec<Value>,
}

impl DevicesResponse {
    /// Decode a response body.
    ///
    /// A missing or `null` `devices` field yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] if the body is not JSON, is not a JSON
    /// object, or carries a `devices` field that is not an array.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let body: Value = serde_json::from_slice(bytes)?;
        let Value::Object(mut body) = body else {
            return Err(Error::ParseError(
                "expected a JSON object at the top level".to_string(),
            ));
        };

        match body.remove("devices") {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Array(devices)) => Ok(Self { devices }),
            Some(other) => Err(Error::ParseError(format!(
                "`devices` must be an array, found {}",
                json_type(&other)
            ))),
        }
    }
}

/// The fields of a device record the inventory cares about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Device {
    /// `devFQDN`, when present as a string.
    pub fqdn: Option<String>,
    /// `devName`, when present as a string.
    pub name: Option<String>,
    /// `devLastIP`, verbatim; `null` when absent.
    pub last_ip: Value,
    /// `devComments`, when present as a string.
    pub comments: Option<String>,
}

impl Device {
    /// Extract a device from one raw record.
    ///
    /// Records that are not objects produce a device with no fields set.
    #[must_use]
    pub fn from_value(record: &Value) -> Self {
        let string_field = |field: &str| {
            record
                .get(field)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            fqdn: string_field(FIELD_FQDN),
            name: string_field(FIELD_NAME),
            last_ip: record.get(FIELD_LAST_IP).cloned().unwrap_or(Value::Null),
            comments: string_field(FIELD_COMMENTS),
        }
    }

    /// Inventory identifier for this device.
    ///
    /// Uses the FQDN when it is non-empty, otherwise the device name, with
    /// trailing dots removed. Returns `None` when neither is usable.
    #[must_use]
    pub fn identifier(&self) -> Option<String> {
        let raw = self
            .fqdn
            .as_deref()
            .filter(|fqdn| !fqdn.is_empty())
            .or_else(|| self.name.as_deref().filter(|name| !name.is_empty()))?;

        Some(raw.trim_end_matches('.').to_string())
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
