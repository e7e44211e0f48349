//! IOS-style stanza rendering shared by the Cisco and Arista rules.
//!
//! The two dialects are structurally identical; they differ only in how far
//! command lines are indented. Stanzas are separated by lines containing a
//! single `!`.

use std::fmt::Write;

use crate::model::DeviceRecord;

/// IOS-style dialect selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// One leading space per command line
    Cisco,
    /// Three leading spaces per command line
    Arista,
}

impl Dialect {
    fn indent(self) -> &'static str {
        match self {
            Dialect::Cisco => " ",
            Dialect::Arista => "   ",
        }
    }
}

pub(crate) fn render(record: &DeviceRecord, dialect: Dialect) -> String {
    let pad = dialect.indent();
    let mut out = String::new();

    let _ = writeln!(out, "hostname {}", record.hostname);
    out.push_str("!\n");

    if let Some(loopback) = &record.loopback {
        out.push_str("interface Loopback0\n");
        let _ = writeln!(out, "{pad}ip address {loopback}");
        out.push_str("!\n");
    }

    for interface in &record.interfaces {
        let _ = writeln!(out, "interface {}", interface.name);
        let _ = writeln!(out, "{pad}ip address {}", interface.ip);
        let _ = writeln!(out, "{pad}no shutdown");
        out.push_str("!\n");
    }

    out
}
