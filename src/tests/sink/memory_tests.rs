//! In-memory sink tests.

use crate::sink::{ConfigSink, MemorySink, WriteError};

#[test]
fn memory_sink_collects_entries_by_hostname() {
    let sink = MemorySink::new("out");
    assert!(sink.is_empty());

    sink.write("r1", "one\n").unwrap();
    sink.write("r2", "two\n").unwrap();

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.get("r1").as_deref(), Some("one\n"));
    assert_eq!(sink.get("missing"), None);
}

#[test]
fn memory_sink_overwrites_previous_content() {
    let sink = MemorySink::new("out");
    sink.write("r1", "first\n").unwrap();
    sink.write("r1", "second\n").unwrap();

    assert_eq!(sink.len(), 1);
    assert_eq!(sink.get("r1").as_deref(), Some("second\n"));
}

#[test]
fn memory_sink_applies_the_same_hostname_validation() {
    let sink = MemorySink::new("out");
    let err = sink.write("../evil", "x\n").unwrap_err();
    assert!(matches!(err, WriteError::InvalidHostname(_)));
    assert!(sink.is_empty());
}
