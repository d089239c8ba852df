//! Future-device service — use-cases for the pre-registration slice.

use prereg_domain::error::{ConflictError, PreregError};
use prereg_domain::future_device::FutureDevice;
use prereg_domain::page::{Page, PageRequest};

use crate::ports::{FutureDeviceRepository, InsertError};

/// Application service exposing the list and create operations.
pub struct FutureDeviceService<R> {
    repo: R,
}

impl<R: FutureDeviceRepository> FutureDeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List one page of future devices.
    ///
    /// The `search` term is accepted for compatibility with the consumer API
    /// but is not applied; the page comes back unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`PreregError::Validation`] when the page request is invalid,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_future_devices(
        &self,
        page: PageRequest,
        search: Option<&str>,
    ) -> Result<Page<FutureDevice>, PreregError> {
        page.validate()?;
        // TODO: push `search` down into the repository query once the
        // matching fields are agreed with the consumer.
        if let Some(term) = search {
            tracing::debug!(%term, "search term accepted but filtering is not implemented");
        }
        self.repo.find_page(page).await
    }

    /// Register a new future device.
    ///
    /// # Errors
    ///
    /// Returns [`PreregError::Conflict`] when a record with the same
    /// `(serial_number, product_id, customer_id)` triple already exists, or a
    /// storage error propagated unmodified from the repository.
    #[tracing::instrument(
        skip(self, device),
        fields(serial_number = %device.serial_number, product_id = %device.product_id)
    )]
    pub async fn create_future_device(&self, device: FutureDevice) -> Result<(), PreregError> {
        match self.repo.insert(device.clone()).await {
            Ok(_) => Ok(()),
            Err(InsertError::UniqueViolation) => {
                let err = ConflictError {
                    serial_number: device.serial_number,
                    product_id: device.product_id,
                    customer_id: device.customer_id,
                };
                tracing::error!("{err}");
                Err(PreregError::Conflict(err))
            }
            Err(InsertError::Storage(err)) => Err(err),
        }
    }
}
