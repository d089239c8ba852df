//! Future device — a record pre-registering a device against a future
//! serial/product/customer combination, awaiting eventual activation.

use serde::{Deserialize, Serialize};

/// A pre-registered device record.
///
/// The `(serial_number, product_id, customer_id)` triple is unique across all
/// records. The storage layer enforces the invariant; no application-level
/// duplicate check is performed. Records are created once and read back via
/// the list operation; they are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureDevice {
    /// Device serial number.
    pub serial_number: String,
    /// Product the device belongs to.
    pub product_id: String,
    /// Customer the device is registered for.
    pub customer_id: i64,
}

impl FutureDevice {
    /// Build a record from its three key fields.
    #[must_use]
    pub fn new(
        serial_number: impl Into<String>,
        product_id: impl Into<String>,
        customer_id: i64,
    ) -> Self {
        Self {
            serial_number: serial_number.into(),
            product_id: product_id.into(),
            customer_id,
        }
    }
}
