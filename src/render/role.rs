//! Role-based template rendering for CSV inventories.
//!
//! Every record gets the shared IOS-style header; the role tag then selects
//! the section appended after it. Routers get a WAN uplink and a BGP stub,
//! switches get their access VLAN and an SVI. An unrecognized role keeps the
//! header and reports the skipped section instead of failing the device.

use std::fmt::Write;

use super::Rendered;
use crate::model::{DeviceRecord, DeviceRole};

pub(crate) fn render(record: &DeviceRecord) -> Rendered {
    let mut out = header(record);

    let tag = record.role.as_deref().unwrap_or_default();
    match DeviceRole::from_tag(tag) {
        Some(DeviceRole::Router) => {
            out.push_str(&router_section(record));
            Rendered {
                text: out,
                skipped: None,
            }
        }
        Some(DeviceRole::Switch) => {
            out.push_str(&switch_section(record));
            Rendered {
                text: out,
                skipped: None,
            }
        }
        None => Rendered {
            text: out,
            skipped: Some(format!(
                "unrecognized role tag `{tag}`; wrote header block only"
            )),
        },
    }
}

fn header(record: &DeviceRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "hostname {}", record.hostname);
    if let Some(site) = &record.site {
        let _ = writeln!(out, "! site: {site}");
    }
    out.push_str("!\n");
    out
}

fn router_section(record: &DeviceRecord) -> String {
    let mut out = String::new();
    out.push_str("interface GigabitEthernet0/0\n");
    out.push_str(" description WAN uplink\n");
    if let Some(mgmt_ip) = &record.mgmt_ip {
        let _ = writeln!(out, " ip address {mgmt_ip}");
    }
    out.push_str(" no shutdown\n");
    out.push_str("!\n");
    out.push_str("router bgp 65000\n");
    out.push_str(" bgp log-neighbor-changes\n");
    out.push_str("!\n");
    out
}

fn switch_section(record: &DeviceRecord) -> String {
    let vlan = record.access_vlan.as_deref().unwrap_or("1");
    let mut out = String::new();
    let _ = writeln!(out, "vlan {vlan}");
    out.push_str(" name ACCESS\n");
    out.push_str("!\n");
    let _ = writeln!(out, "interface Vlan{vlan}");
    if let Some(mgmt_ip) = &record.mgmt_ip {
        let _ = writeln!(out, " ip address {mgmt_ip}");
    }
    out.push_str(" no shutdown\n");
    out.push_str("!\n");
    out
}
