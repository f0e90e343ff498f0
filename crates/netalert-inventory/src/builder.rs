//! Inventory construction.
//!
//! The rendered document follows Ansible's dynamic inventory format:
//!
//! ```json
//! {
//!   "_meta": { "hostvars": { "a.b": { "ansible_host": "10.0.0.1", "role": "frontend" } } },
//!   "all": { "children": ["web", "db"] },
//!   "web": { "hosts": ["a.b"] },
//!   "db": { "hosts": ["a.b"] }
//! }
//! ```

use crate::annotation::parse_comments;
use crate::Result;
use netalert_api::Device;
use netalert_core::Error;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

/// Key of the per-host variables entry.
pub const META_KEY: &str = "_meta";
/// Key of the entry listing every group.
pub const ALL_KEY: &str = "all";
/// Host variable holding the address Ansible connects to.
pub const ANSIBLE_HOST_VAR: &str = "ansible_host";

const RESERVED_GROUPS: [&str; 2] = [META_KEY, ALL_KEY];

/// A tag group and its member hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group name, taken from a device tag.
    pub name: String,
    /// Member hosts in device order, duplicates included.
    pub hosts: Vec<String>,
}

/// Dynamic inventory built from device records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    hostvars: Map<String, Value>,
    groups: Vec<Group>,
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from raw device records.
    #[must_use]
    pub fn build(records: &[Value]) -> Self {
        let mut inventory = Self::new();
        for record in records {
            inventory.add_device(&Device::from_value(record));
        }
        inventory
    }

    /// Add one device.
    ///
    /// Devices without an identifier or without tags are skipped. Returns
    /// whether the device was added.
    pub fn add_device(&mut self, device: &Device) -> bool {
        let Some(host) = device.identifier() else {
            return false;
        };

        let annotation = parse_comments(device.comments.as_deref());
        if annotation.tags.is_empty() {
            return false;
        }

        let mut vars = Map::new();
        vars.insert(ANSIBLE_HOST_VAR.to_string(), device.last_ip.clone());
        for (name, value) in &annotation.vars {
            vars.insert(name.clone(), Value::String(value.clone()));
        }
        debug!(host = %host, tags = ?annotation.tags, vars = ?annotation.vars, "host added");
        self.hostvars.insert(host.clone(), Value::Object(vars));

        for tag in &annotation.tags {
            if RESERVED_GROUPS.contains(&tag.as_str()) {
                continue;
            }
            self.group_mut(tag).hosts.push(host.clone());
        }

        true
    }

    fn group_mut(&mut self, name: &str) -> &mut Group {
        let index = match self.groups.iter().position(|group| group.name == name) {
            Some(index) => index,
            None => {
                self.groups.push(Group {
                    name: name.to_string(),
                    hosts: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }

    /// Per-host variables, keyed by host identifier.
    #[must_use]
    pub fn hostvars(&self) -> &Map<String, Value> {
        &self.hostvars
    }

    /// Variables of one host; empty when the host is unknown.
    #[must_use]
    pub fn hostvars_for(&self, host: &str) -> Map<String, Value> {
        match self.hostvars.get(host) {
            Some(Value::Object(vars)) => vars.clone(),
            _ => Map::new(),
        }
    }

    /// Groups in the order they were first created.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Look up a group by name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Names listed under `all.children`.
    #[must_use]
    pub fn children(&self) -> Vec<&str> {
        self.groups.iter().map(|group| group.name.as_str()).collect()
    }

    /// Render the inventory as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializeError`] if rendering fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| Error::SerializeError(err.to_string()))
    }
}

#[derive(Serialize)]
struct MetaEntry<'a> {
    hostvars: &'a Map<String, Value>,
}

#[derive(Serialize)]
struct AllEntry<'a> {
    children: Vec<&'a str>,
}

#[derive(Serialize)]
struct GroupEntry<'a> {
    hosts: &'a [String],
}

impl Serialize for Inventory {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(RESERVED_GROUPS.len() + self.groups.len()))?;
        map.serialize_entry(
            META_KEY,
            &MetaEntry {
                hostvars: &self.hostvars,
            },
        )?;
        map.serialize_entry(
            ALL_KEY,
            &AllEntry {
                children: self.children(),
            },
        )?;
        for group in &self.groups {
            map.serialize_entry(&group.name, &GroupEntry { hosts: &group.hosts })?;
        }
        map.end()
    }
}

/// Build an inventory from raw device records.
#[must_use]
pub fn build_inventory(records: &[Value]) -> Inventory {
    Inventory::build(records)
}
