//! Renderer tests.


use crate::model::DeviceRecord;

/// The reference fixture used across the vendor rendering tests.
pub(crate) fn core_rtr_01(vendor: &str) -> DeviceRecord {
    DeviceRecord::with_vendor("core-rtr-01", vendor)
        .with_loopback("10.10.10.1/32")
        .with_interface("GigabitEthernet0/0", "192.168.10.1/24")
}
