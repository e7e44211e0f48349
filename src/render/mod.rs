//! Configuration text rendering.
//!
//! This module provides:
//! - `render`: Pure record-to-text dispatch over the closed vendor/role sets
//! - `RenderError`: Errors that can occur during rendering
//! - `Rendered`: The output block plus any skipped-section diagnostic
//!
//! Rendering is deterministic: the same record always yields byte-identical
//! text (no timestamps, no randomness), so repeated runs regenerate the same
//! files.

mod ios;
mod junos;
mod role;

use thiserror::Error;

use crate::model::{DeviceRecord, Vendor};

pub use ios::Dialect;

/// Errors that can occur during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The record's vendor tag is outside the supported set
    #[error("unsupported vendor tag `{0}`")]
    UnsupportedVendor(String),

    /// The record carries neither a vendor nor a role tag
    #[error("record declares neither a vendor nor a role")]
    NoDispatchTag,
}

/// A rendered configuration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The configuration text, newline-terminated
    pub text: String,
    /// Diagnostic for a section that was left out (e.g. unrecognized role)
    pub skipped: Option<String>,
}

impl Rendered {
    fn complete(text: String) -> Self {
        Self {
            text,
            skipped: None,
        }
    }
}

/// Render one device record into its configuration text.
///
/// Dispatch is an exhaustive match over the closed vendor set; records from
/// CSV inventories carry a role tag instead and go through the role-based
/// templates. Whatever renders successfully is returned; an unrecognized
/// role yields the shared header plus a `skipped` diagnostic, while an
/// unrecognized vendor renders nothing and returns an error so the caller
/// can skip the device.
pub fn render(record: &DeviceRecord) -> Result<Rendered, RenderError> {
    if let Some(tag) = record.vendor.as_deref() {
        let vendor = Vendor::from_tag(tag)
            .ok_or_else(|| RenderError::UnsupportedVendor(tag.to_string()))?;
        Ok(Rendered::complete(render_vendor(record, vendor)))
    } else if record.role.is_some() {
        Ok(role::render(record))
    } else {
        Err(RenderError::NoDispatchTag)
    }
}

/// Render a record for a specific vendor dialect.
pub fn render_vendor(record: &DeviceRecord, vendor: Vendor) -> String {
    match vendor {
        Vendor::Cisco => ios::render(record, Dialect::Cisco),
        Vendor::Arista => ios::render(record, Dialect::Arista),
        Vendor::Juniper => junos::render(record),
    }
}
