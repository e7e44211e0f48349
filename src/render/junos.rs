//! Junos `set` command rendering.
//!
//! Flat, non-hierarchical output: one `set` line per statement, no stanza
//! separators.

use std::fmt::Write;

use crate::model::DeviceRecord;

pub(crate) fn render(record: &DeviceRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "set system host-name {}", record.hostname);

    if let Some(loopback) = &record.loopback {
        let _ = writeln!(
            out,
            "set interfaces lo0 unit 0 family inet address {loopback}"
        );
    }

    for interface in &record.interfaces {
        let _ = writeln!(
            out,
            "set interfaces {} unit 0 family inet address {}",
            interface.name, interface.ip
        );
    }

    out
}
