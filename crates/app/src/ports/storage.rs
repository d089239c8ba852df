//! Storage port — repository trait for future-device persistence.

use std::future::Future;

use prereg_domain::error::PreregError;
use prereg_domain::future_device::FutureDevice;
use prereg_domain::page::{Page, PageRequest};

/// Failure modes for [`FutureDeviceRepository::insert`].
///
/// Uniqueness violations get their own variant so the service can translate
/// them into a domain conflict carrying the colliding values; every other
/// storage failure stays wrapped in [`PreregError`] and propagates untouched.
#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    /// The store rejected the write because the unique
    /// `(serial_number, product_id, customer_id)` triple already exists.
    #[error("unique constraint violated")]
    UniqueViolation,

    /// Any other storage failure.
    #[error(transparent)]
    Storage(#[from] PreregError),
}

/// Persistence operations for future devices.
pub trait FutureDeviceRepository {
    /// Fetch one page of records together with the total record count.
    fn find_page(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<FutureDevice>, PreregError>> + Send;

    /// Persist a new record, relying on the store's uniqueness constraint to
    /// reject duplicate triples.
    fn insert(
        &self,
        device: FutureDevice,
    ) -> impl Future<Output = Result<FutureDevice, InsertError>> + Send;
}
