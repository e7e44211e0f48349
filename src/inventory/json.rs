//! JSON inventory parsing.

use serde::Deserialize;

use super::{Inventory, LoadError, RejectedRecord};
use crate::model::{DeviceRecord, Interface};

/// Top-level JSON document shape: `{"devices": [...]}`.
#[derive(Debug, Deserialize)]
struct InventoryDoc {
    devices: Vec<RawDevice>,
}

/// One device object as it appears on disk. Required fields are checked
/// during conversion so a missing key surfaces as a named error instead of
/// a serde failure for the whole document.
#[derive(Debug, Deserialize)]
struct RawDevice {
    #[serde(default)]
    hostname: Option<String>,
    #[serde(default)]
    vendor: Option<String>,
    #[serde(default)]
    loopback: Option<String>,
    #[serde(default)]
    interfaces: Vec<Interface>,
}

pub(crate) fn parse(bytes: &[u8]) -> Result<Inventory, LoadError> {
    let doc: InventoryDoc =
        serde_json::from_slice(bytes).map_err(|e| LoadError::Syntax(Box::new(e)))?;

    let mut inventory = Inventory::default();
    for (index, raw) in doc.devices.into_iter().enumerate() {
        match convert(index, raw) {
            Ok(record) => inventory.records.push(record),
            Err((hostname, error)) => inventory.rejected.push(RejectedRecord {
                index,
                hostname,
                error,
            }),
        }
    }
    Ok(inventory)
}

fn convert(index: usize, raw: RawDevice) -> Result<DeviceRecord, (Option<String>, LoadError)> {
    let hostname = match raw.hostname {
        Some(h) if !h.trim().is_empty() => h,
        _ => {
            return Err((
                None,
                LoadError::MissingField {
                    index,
                    field: "hostname",
                },
            ));
        }
    };

    let vendor = match raw.vendor {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            return Err((
                Some(hostname),
                LoadError::MissingField {
                    index,
                    field: "vendor",
                },
            ));
        }
    };

    Ok(DeviceRecord {
        hostname,
        vendor: Some(vendor),
        role: None,
        loopback: raw.loopback,
        interfaces: raw.interfaces,
        site: None,
        mgmt_ip: None,
        access_vlan: None,
    })
}
