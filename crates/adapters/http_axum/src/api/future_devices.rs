//! JSON REST handlers for future devices.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use prereg_app::ports::FutureDeviceRepository;
use prereg_domain::future_device::FutureDevice;
use prereg_domain::page::{Page, PageRequest, SortKey, SortOrder};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u32,
    /// Page size.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Column to order by.
    #[serde(default)]
    pub sort: Option<SortKey>,
    /// Sort direction.
    #[serde(default)]
    pub order: SortOrder,
    /// Accepted for API compatibility; not applied to the result.
    #[serde(default)]
    pub search: Option<String>,
}

fn default_per_page() -> u32 {
    PageRequest::DEFAULT_PER_PAGE
}

/// Request body for registering a future device.
#[derive(Debug, Deserialize)]
pub struct CreateFutureDeviceRequest {
    pub serial_number: String,
    pub product_id: String,
    pub customer_id: i64,
}

impl From<CreateFutureDeviceRequest> for FutureDevice {
    fn from(req: CreateFutureDeviceRequest) -> Self {
        Self {
            serial_number: req.serial_number,
            product_id: req.product_id,
            customer_id: req.customer_id,
        }
    }
}

/// View shape for a single future device.
#[derive(Debug, Serialize)]
pub struct FutureDeviceResponse {
    pub serial_number: String,
    pub product_id: String,
    pub customer_id: i64,
}

impl From<FutureDevice> for FutureDeviceResponse {
    fn from(device: FutureDevice) -> Self {
        Self {
            serial_number: device.serial_number,
            product_id: device.product_id,
            customer_id: device.customer_id,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Page<FutureDeviceResponse>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => StatusCode::CREATED.into_response(),
        }
    }
}

/// `GET /api/future-devices`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    R: FutureDeviceRepository + Send + Sync + 'static,
{
    let request = PageRequest {
        page: query.page,
        per_page: query.per_page,
        sort: query.sort,
        order: query.order,
    };
    let page = state
        .future_device_service
        .list_future_devices(request, query.search.as_deref())
        .await?;
    Ok(ListResponse::Ok(Json(page.map(FutureDeviceResponse::from))))
}

/// `POST /api/future-devices`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<CreateFutureDeviceRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: FutureDeviceRepository + Send + Sync + 'static,
{
    state
        .future_device_service
        .create_future_device(req.into())
        .await?;
    Ok(CreateResponse::Created)
}
