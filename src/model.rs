//! Device inventory data model.
//!
//! This module provides:
//! - `DeviceRecord`: One inventory entry describing a single network device
//! - `Interface`: A named interface with its address
//! - `Vendor`: Closed set of CLI dialects the renderer knows about
//! - `DeviceRole`: Closed set of device roles for role-based templates

use serde::Deserialize;

/// Closed set of vendor CLI dialects.
///
/// Raw inventory tags are compared case-insensitively; tags outside this set
/// stay as plain strings on the record and surface as an unsupported-vendor
/// skip at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    /// Cisco IOS-style configuration (one-space command indent)
    Cisco,
    /// Arista EOS-style configuration (three-space command indent)
    Arista,
    /// Juniper Junos `set` command configuration
    Juniper,
}

impl Vendor {
    /// Parse a vendor from a raw inventory tag.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cisco" => Some(Vendor::Cisco),
            "arista" => Some(Vendor::Arista),
            "juniper" => Some(Vendor::Juniper),
            _ => None,
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vendor::Cisco => write!(f, "cisco"),
            Vendor::Arista => write!(f, "arista"),
            Vendor::Juniper => write!(f, "juniper"),
        }
    }
}

/// Closed set of device roles used by role-based templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceRole {
    /// WAN uplink + BGP stub template
    Router,
    /// Access VLAN + SVI template
    Switch,
}

impl DeviceRole {
    /// Parse a role from a raw inventory tag.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "router" => Some(DeviceRole::Router),
            "switch" => Some(DeviceRole::Switch),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeviceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceRole::Router => write!(f, "router"),
            DeviceRole::Switch => write!(f, "switch"),
        }
    }
}

/// A single named interface and its address in CIDR notation.
///
/// Addresses are opaque to the generator; no validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Interface {
    /// Interface name as it appears in the rendered output
    pub name: String,
    /// Address in CIDR notation (address + prefix length)
    pub ip: String,
}

impl Interface {
    /// Create a new interface pair.
    pub fn new(name: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
        }
    }
}

/// One inventory entry describing a single network device.
///
/// Records are immutable once loaded; the renderer only reads them. JSON
/// inventories carry a `vendor` tag and nested `interfaces`; CSV inventories
/// carry a `role` tag and flat management columns instead. Raw tags are kept
/// as strings so unrecognized values can be reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    /// Non-empty identifier; used as the output filename stem
    pub hostname: String,
    /// Raw vendor tag (JSON inventories)
    pub vendor: Option<String>,
    /// Raw role tag (CSV inventories)
    pub role: Option<String>,
    /// Loopback address in CIDR notation
    pub loopback: Option<String>,
    /// Ordered interface list; order is preserved into the rendered output
    pub interfaces: Vec<Interface>,
    /// Site identifier (CSV inventories)
    pub site: Option<String>,
    /// Management address (CSV inventories)
    pub mgmt_ip: Option<String>,
    /// Access VLAN id (CSV inventories)
    pub access_vlan: Option<String>,
}

impl DeviceRecord {
    /// Create a vendor-tagged record with the given hostname.
    pub fn with_vendor(hostname: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            vendor: Some(vendor.into()),
            role: None,
            loopback: None,
            interfaces: Vec::new(),
            site: None,
            mgmt_ip: None,
            access_vlan: None,
        }
    }

    /// Create a role-tagged record with the given hostname.
    pub fn with_role(hostname: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            vendor: None,
            role: Some(role.into()),
            loopback: None,
            interfaces: Vec::new(),
            site: None,
            mgmt_ip: None,
            access_vlan: None,
        }
    }

    /// Set the loopback address (builder pattern).
    pub fn with_loopback(mut self, loopback: impl Into<String>) -> Self {
        self.loopback = Some(loopback.into());
        self
    }

    /// Append an interface (builder pattern).
    pub fn with_interface(mut self, name: impl Into<String>, ip: impl Into<String>) -> Self {
        self.interfaces.push(Interface::new(name, ip));
        self
    }

    /// Set the management address (builder pattern).
    pub fn with_mgmt_ip(mut self, mgmt_ip: impl Into<String>) -> Self {
        self.mgmt_ip = Some(mgmt_ip.into());
        self
    }

    /// Set the access VLAN (builder pattern).
    pub fn with_access_vlan(mut self, vlan: impl Into<String>) -> Self {
        self.access_vlan = Some(vlan.into());
        self
    }
}
