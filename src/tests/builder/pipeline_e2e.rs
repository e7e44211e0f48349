//! End-to-end pipeline tests: source → render → sink through the builder.

use std::sync::Arc;

use crate::builder::GeneratorBuilder;
use crate::error::RunError;
use crate::inventory::{InventoryFormat, LoadError, MemorySource, StdinSource};
use crate::sink::MemorySink;

const INVENTORY: &str = r#"{
    "devices": [
        {
            "hostname": "core-rtr-01",
            "vendor": "cisco",
            "loopback": "10.10.10.1/32",
            "interfaces": [{"name": "GigabitEthernet0/0", "ip": "192.168.10.1/24"}]
        },
        {"hostname": "core-sw-01", "vendor": "arista", "loopback": "10.10.10.2/32"},
        {"hostname": "win-box-01", "vendor": "windows"}
    ]
}"#;

#[test]
fn pipeline_e2e_generates_supported_devices_and_skips_the_rest() {
    let sink = Arc::new(MemorySink::new("out"));
    let generator = GeneratorBuilder::new()
        .source(Arc::new(MemorySource::from_string("mem", INVENTORY)))
        .format(InventoryFormat::Json)
        .sink(sink.clone())
        .build()
        .unwrap();

    let report = generator.execute().expect("run must succeed");

    assert_eq!(report.written, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 0);
    assert_eq!(sink.len(), 2);
    assert!(
        sink.get("core-rtr-01")
            .unwrap()
            .contains(" ip address 192.168.10.1/24\n")
    );
    assert!(sink.get("win-box-01").is_none());
}

#[test]
fn pipeline_e2e_is_idempotent() {
    let sink = Arc::new(MemorySink::new("out"));
    let generator = GeneratorBuilder::new()
        .source(Arc::new(MemorySource::from_string("mem", INVENTORY)))
        .format(InventoryFormat::Json)
        .sink(sink.clone())
        .build()
        .unwrap();

    generator.execute().unwrap();
    let first = sink.entries();
    generator.execute().unwrap();
    let second = sink.entries();

    assert_eq!(first, second);
}

#[test]
fn malformed_inventory_aborts_before_any_output() {
    let sink = Arc::new(MemorySink::new("out"));
    let generator = GeneratorBuilder::new()
        .source(Arc::new(MemorySource::from_string("mem", "{broken")))
        .format(InventoryFormat::Json)
        .sink(sink.clone())
        .build()
        .unwrap();

    let err = generator.execute().expect_err("malformed input must fail");
    assert!(matches!(err, RunError::Load(LoadError::Syntax(_))));
    assert!(sink.is_empty());
}

#[test]
fn pipeline_e2e_writes_one_file_per_device_and_keeps_stale_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("old-device.cfg"), "stale\n").unwrap();

    let generator = GeneratorBuilder::new()
        .source(Arc::new(MemorySource::from_string("mem", INVENTORY)))
        .format(InventoryFormat::Json)
        .out_dir(dir.path())
        .build()
        .unwrap();

    let report = generator.execute().unwrap();
    assert_eq!(report.written, 2);

    assert!(dir.path().join("core-rtr-01.cfg").exists());
    assert!(dir.path().join("core-sw-01.cfg").exists());
    assert!(!dir.path().join("win-box-01.cfg").exists());

    // Files the run did not write are never deleted.
    assert_eq!(
        std::fs::read_to_string(dir.path().join("old-device.cfg")).unwrap(),
        "stale\n"
    );
}

#[test]
fn unresolved_format_is_reported_at_execution_time() {
    let generator = GeneratorBuilder::new()
        .source(Arc::new(StdinSource::new()))
        .sink(Arc::new(MemorySink::new("out")))
        .build()
        .unwrap();

    let err = generator.execute().expect_err("unknown format must fail");
    assert!(matches!(
        err,
        RunError::Load(LoadError::UnknownFormat(id)) if id == "-"
    ));
}
