//! Run-loop and error-policy tests for Engine.

use std::sync::Arc;

use crate::engine::Engine;
use crate::error::{ErrorPolicy, RunError, Stage};
use crate::inventory::{Inventory, LoadError, RejectedRecord};
use crate::model::DeviceRecord;
use crate::sink::{ConfigSink, MemorySink, WriteError};

fn fixture_records() -> Vec<DeviceRecord> {
    vec![
        DeviceRecord::with_vendor("core-rtr-01", "cisco")
            .with_loopback("10.10.10.1/32")
            .with_interface("GigabitEthernet0/0", "192.168.10.1/24"),
        DeviceRecord::with_vendor("core-sw-01", "arista").with_loopback("10.10.10.2/32"),
        DeviceRecord::with_vendor("core-fw-01", "juniper").with_loopback("10.10.10.3/32"),
    ]
}

#[test]
fn engine_writes_one_entry_per_record() {
    let sink = Arc::new(MemorySink::new("out"));
    let engine = Engine::new(sink.clone(), ErrorPolicy::SkipAndReport);

    let report = engine
        .run(Inventory::from_records(fixture_records()))
        .expect("run must succeed");

    assert_eq!(report.written, 3);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.failed, 0);
    assert!(report.is_clean());
    assert_eq!(sink.len(), 3);
    assert!(sink.get("core-rtr-01").is_some());
    assert!(sink.get("core-sw-01").is_some());
    assert!(sink.get("core-fw-01").is_some());
}

#[test]
fn engine_skips_unsupported_vendor_and_continues() {
    let records = vec![
        DeviceRecord::with_vendor("win-box-01", "windows"),
        DeviceRecord::with_vendor("core-rtr-01", "cisco").with_loopback("10.0.0.1/32"),
    ];
    let sink = Arc::new(MemorySink::new("out"));
    let engine = Engine::new(sink.clone(), ErrorPolicy::SkipAndReport);

    let report = engine.run(Inventory::from_records(records)).unwrap();

    assert_eq!(report.written, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 0);
    assert!(sink.get("win-box-01").is_none());
    assert!(sink.get("core-rtr-01").is_some());
}

#[test]
fn unsupported_vendor_never_aborts_even_under_fail_fast() {
    let records = vec![
        DeviceRecord::with_vendor("win-box-01", "windows"),
        DeviceRecord::with_vendor("core-rtr-01", "cisco"),
    ];
    let engine = Engine::new(Arc::new(MemorySink::new("out")), ErrorPolicy::FailFast);

    let report = engine.run(Inventory::from_records(records)).unwrap();
    assert_eq!(report.skipped, 1);
    assert_eq!(report.written, 1);
}

#[test]
fn engine_reports_duplicate_hostnames() {
    let records = vec![
        DeviceRecord::with_vendor("core-rtr-01", "cisco").with_loopback("10.0.0.1/32"),
        DeviceRecord::with_vendor("core-rtr-01", "juniper").with_loopback("10.0.0.2/32"),
    ];
    let sink = Arc::new(MemorySink::new("out"));
    let engine = Engine::new(sink.clone(), ErrorPolicy::SkipAndReport);

    let report = engine.run(Inventory::from_records(records)).unwrap();

    assert_eq!(report.written, 2);
    assert_eq!(report.duplicates, ["core-rtr-01"]);
    assert!(!report.is_clean());

    // The later record wins.
    let text = sink.get("core-rtr-01").unwrap();
    assert!(text.starts_with("set system host-name core-rtr-01"));
}

#[test]
fn rejected_records_count_as_failures() {
    let inventory = Inventory {
        records: vec![DeviceRecord::with_vendor("ok-rtr", "cisco")],
        rejected: vec![RejectedRecord {
            index: 0,
            hostname: None,
            error: LoadError::MissingField {
                index: 0,
                field: "hostname",
            },
        }],
    };
    let engine = Engine::new(Arc::new(MemorySink::new("out")), ErrorPolicy::SkipAndReport);

    let report = engine.run(inventory).unwrap();

    assert_eq!(report.written, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].stage, Stage::Load);
    assert_eq!(report.errors[0].device, "#0");
}

#[test]
fn fail_fast_aborts_on_rejected_record() {
    let inventory = Inventory {
        records: vec![DeviceRecord::with_vendor("ok-rtr", "cisco")],
        rejected: vec![RejectedRecord {
            index: 2,
            hostname: Some("half-rtr".into()),
            error: LoadError::MissingField {
                index: 2,
                field: "vendor",
            },
        }],
    };
    let engine = Engine::new(Arc::new(MemorySink::new("out")), ErrorPolicy::FailFast);

    let err = engine.run(inventory).expect_err("fail-fast must abort");
    match err {
        RunError::Aborted(device) => {
            assert_eq!(device.stage, Stage::Load);
            assert_eq!(device.device, "half-rtr");
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// A sink that always fails, simulating a full or read-only disk.
#[derive(Debug)]
struct FailingSink;

impl ConfigSink for FailingSink {
    fn id(&self) -> &str {
        "failing"
    }

    fn write(&self, hostname: &str, _text: &str) -> Result<(), WriteError> {
        Err(WriteError::Io {
            target: format!("failing/{hostname}.cfg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "simulated"),
        })
    }
}

#[test]
fn write_errors_are_isolated_under_skip_and_report() {
    let engine = Engine::new(Arc::new(FailingSink), ErrorPolicy::SkipAndReport);

    let report = engine.run(Inventory::from_records(fixture_records())).unwrap();

    assert_eq!(report.written, 0);
    assert_eq!(report.failed, 3);
    assert!(report.errors.iter().all(|e| e.stage == Stage::Write));
}

#[test]
fn write_errors_abort_under_fail_fast() {
    let engine = Engine::new(Arc::new(FailingSink), ErrorPolicy::FailFast);

    let err = engine
        .run(Inventory::from_records(fixture_records()))
        .expect_err("fail-fast must abort");
    match err {
        RunError::Aborted(device) => {
            assert_eq!(device.stage, Stage::Write);
            assert_eq!(device.device, "core-rtr-01");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_role_still_writes_the_header_block() {
    let records = vec![DeviceRecord::with_role("lb-01", "loadbalancer")];
    let sink = Arc::new(MemorySink::new("out"));
    let engine = Engine::new(sink.clone(), ErrorPolicy::SkipAndReport);

    let report = engine.run(Inventory::from_records(records)).unwrap();

    assert_eq!(report.written, 1);
    assert_eq!(sink.get("lb-01").as_deref(), Some("hostname lb-01\n!\n"));
}

#[test]
fn report_display_includes_summary_and_errors() {
    let engine = Engine::new(Arc::new(FailingSink), ErrorPolicy::SkipAndReport);
    let report = engine
        .run(Inventory::from_records(vec![DeviceRecord::with_vendor(
            "core-rtr-01",
            "cisco",
        )]))
        .unwrap();

    let text = report.to_string();
    assert!(text.contains("processed 1 device(s): 0 written, 0 skipped, 1 failed"));
    assert!(text.contains("#1: [Write] core-rtr-01"));
}
