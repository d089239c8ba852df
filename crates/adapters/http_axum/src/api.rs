//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod future_devices;

use axum::Router;
use axum::routing::get;

use prereg_app::ports::FutureDeviceRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: FutureDeviceRepository + Send + Sync + 'static,
{
    Router::new().route(
        "/future-devices",
        get(future_devices::list::<R>).post(future_devices::create::<R>),
    )
}
