//! Inventory format kind tests.

use std::path::Path;

use crate::inventory::{InventoryFormat, infer_format_from_path};

#[test]
fn format_from_str_accepts_known_names() {
    assert_eq!(InventoryFormat::from_str("json"), Some(InventoryFormat::Json));
    assert_eq!(InventoryFormat::from_str("CSV"), Some(InventoryFormat::Csv));
    assert_eq!(InventoryFormat::from_str("xml"), None);
}

#[test]
fn format_inferred_from_extension() {
    assert_eq!(
        infer_format_from_path(Path::new("devices.json")),
        Some(InventoryFormat::Json)
    );
    assert_eq!(
        infer_format_from_path(Path::new("inventory/site.CSV")),
        Some(InventoryFormat::Csv)
    );
    assert_eq!(infer_format_from_path(Path::new("devices.txt")), None);
    assert_eq!(infer_format_from_path(Path::new("devices")), None);
}

#[test]
fn format_display_matches_tag() {
    assert_eq!(InventoryFormat::Json.to_string(), "json");
    assert_eq!(InventoryFormat::Csv.to_string(), "csv");
}
