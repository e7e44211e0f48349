//! CSV inventory parsing.
//!
//! CSV has no nested structures, so records carry a role tag and flat
//! management columns instead of an interface list. Column order is free;
//! fields are keyed by the header row. The legacy header `type` is accepted
//! as an alias for `role`.

use super::{Inventory, LoadError, RejectedRecord};
use crate::model::DeviceRecord;

struct Columns {
    hostname: usize,
    role: usize,
    site: Option<usize>,
    mgmt_ip: Option<usize>,
    access_vlan: Option<usize>,
}

pub(crate) fn parse(bytes: &[u8]) -> Result<Inventory, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = rdr
        .headers()
        .map_err(|e| LoadError::Syntax(Box::new(e)))?
        .clone();

    let find = |name: &str, alias: Option<&str>| {
        headers.iter().position(|h| {
            h.eq_ignore_ascii_case(name) || alias.is_some_and(|a| h.eq_ignore_ascii_case(a))
        })
    };

    let columns = Columns {
        hostname: find("hostname", None).ok_or(LoadError::MissingColumn("hostname"))?,
        role: find("role", Some("type")).ok_or(LoadError::MissingColumn("role"))?,
        site: find("site", None),
        mgmt_ip: find("mgmt_ip", None),
        access_vlan: find("access_vlan", None),
    };

    let mut inventory = Inventory::default();
    for (index, row) in rdr.records().enumerate() {
        let row = row.map_err(|e| LoadError::Syntax(Box::new(e)))?;
        match convert(index, &row, &columns) {
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

fn convert(
    index: usize,
    row: &csv::StringRecord,
    columns: &Columns,
) -> Result<DeviceRecord, (Option<String>, LoadError)> {
    let field = |i: usize| row.get(i).filter(|v| !v.is_empty()).map(str::to_string);

    let hostname = field(columns.hostname).ok_or_else(|| {
        (
            None,
            LoadError::MissingField {
                index,
                field: "hostname",
            },
        )
    })?;

    let role = field(columns.role).ok_or_else(|| {
        (
            Some(hostname.clone()),
            LoadError::MissingField {
                index,
                field: "role",
            },
        )
    })?;

    Ok(DeviceRecord {
        hostname,
        vendor: None,
        role: Some(role),
        loopback: None,
        interfaces: Vec::new(),
        site: columns.site.and_then(field),
        mgmt_ip: columns.mgmt_ip.and_then(field),
        access_vlan: columns.access_vlan.and_then(field),
    })
}
