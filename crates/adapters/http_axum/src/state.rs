//! Shared application state for axum handlers.

use std::sync::Arc;

use prereg_app::ports::FutureDeviceRepository;
use prereg_app::services::future_device_service::FutureDeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Future-device list/create service.
    pub future_device_service: Arc<FutureDeviceService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            future_device_service: Arc::clone(&self.future_device_service),
        }
    }
}

impl<R> AppState<R>
where
    R: FutureDeviceRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(future_device_service: FutureDeviceService<R>) -> Self {
        Self {
            future_device_service: Arc::new(future_device_service),
        }
    }
}
