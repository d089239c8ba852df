//! `SQLite` implementation of [`FutureDeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use prereg_app::ports::{FutureDeviceRepository, InsertError};
use prereg_domain::error::PreregError;
use prereg_domain::future_device::FutureDevice;
use prereg_domain::page::{Page, PageRequest, SortKey, SortOrder};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`FutureDevice`].
struct Wrapper(FutureDevice);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(FutureDevice {
            serial_number: row.try_get("serial_number")?,
            product_id: row.try_get("product_id")?,
            customer_id: row.try_get("customer_id")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO future_devices (serial_number, product_id, customer_id) VALUES (?, ?, ?)";
const SELECT_PAGE: &str = "SELECT serial_number, product_id, customer_id FROM future_devices";
const COUNT: &str = "SELECT COUNT(*) FROM future_devices";

/// Column used for `ORDER BY`; `rowid` keeps insertion order when no sort key
/// is requested.
fn sort_column(sort: Option<SortKey>) -> &'static str {
    match sort {
        None => "rowid",
        Some(SortKey::SerialNumber) => "serial_number",
        Some(SortKey::ProductId) => "product_id",
        Some(SortKey::CustomerId) => "customer_id",
    }
}

fn sort_direction(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}

/// `SQLite`-backed future-device repository.
pub struct SqliteFutureDeviceRepository {
    pool: SqlitePool,
}

impl SqliteFutureDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FutureDeviceRepository for SqliteFutureDeviceRepository {
    fn find_page(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<FutureDevice>, PreregError>> + Send {
        let pool = self.pool.clone();
        async move {
            let total: i64 = sqlx::query_scalar(COUNT)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            // Column and direction come from closed enums, never from input.
            let query = format!(
                "{SELECT_PAGE} ORDER BY {} {} LIMIT ? OFFSET ?",
                sort_column(page.sort),
                sort_direction(page.order),
            );
            let rows: Vec<Wrapper> = sqlx::query_as(&query)
                .bind(i64::from(page.per_page))
                .bind(i64::from(page.page) * i64::from(page.per_page))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Page {
                items: rows.into_iter().map(|w| w.0).collect(),
                page: page.page,
                per_page: page.per_page,
                total: u64::try_from(total).unwrap_or_default(),
            })
        }
    }

    fn insert(
        &self,
        device: FutureDevice,
    ) -> impl Future<Output = Result<FutureDevice, InsertError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(&device.serial_number)
                .bind(&device.product_id)
                .bind(device.customer_id)
                .execute(&pool)
                .await
                .map_err(|err| {
                    if is_unique_violation(&err) {
                        InsertError::UniqueViolation
                    } else {
                        InsertError::Storage(StorageError::from(err).into())
                    }
                })?;

            Ok(device)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteFutureDeviceRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteFutureDeviceRepository::new(db.pool().clone())
    }

    fn device(serial: &str, product: &str, customer: i64) -> FutureDevice {
        FutureDevice::new(serial, product, customer)
    }

    #[tokio::test]
    async fn should_insert_and_list_future_device() {
        let repo = setup().await;

        repo.insert(device("SN1", "P1", 7)).await.unwrap();

        let page = repo.find_page(PageRequest::default()).await.unwrap();
        assert_eq!(page.items, vec![device("SN1", "P1", 7)]);
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn should_report_unique_violation_when_triple_exists() {
        let repo = setup().await;
        repo.insert(device("SN1", "P1", 7)).await.unwrap();

        let result = repo.insert(device("SN1", "P1", 7)).await;

        assert!(matches!(result, Err(InsertError::UniqueViolation)));

        let page = repo.find_page(PageRequest::default()).await.unwrap();
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn should_accept_triple_differing_in_one_field() {
        let repo = setup().await;
        repo.insert(device("SN1", "P1", 7)).await.unwrap();

        repo.insert(device("SN1", "P1", 8)).await.unwrap();
        repo.insert(device("SN1", "P2", 7)).await.unwrap();
        repo.insert(device("SN2", "P1", 7)).await.unwrap();

        let page = repo.find_page(PageRequest::default()).await.unwrap();
        assert_eq!(page.total, 4);
    }

    #[tokio::test]
    async fn should_return_empty_page_when_table_is_empty() {
        let repo = setup().await;

        let page = repo.find_page(PageRequest::default()).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn should_window_results_and_keep_full_total() {
        let repo = setup().await;
        for n in 0..5 {
            repo.insert(device(&format!("SN{n}"), "P1", n)).await.unwrap();
        }

        let first = repo
            .find_page(PageRequest {
                page: 0,
                per_page: 2,
                ..PageRequest::default()
            })
            .await
            .unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total, 5);

        let last = repo
            .find_page(PageRequest {
                page: 2,
                per_page: 2,
                ..PageRequest::default()
            })
            .await
            .unwrap();
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.total, 5);
    }

    #[tokio::test]
    async fn should_return_empty_page_beyond_last_record() {
        let repo = setup().await;
        repo.insert(device("SN1", "P1", 7)).await.unwrap();

        let page = repo
            .find_page(PageRequest {
                page: 9,
                per_page: 10,
                ..PageRequest::default()
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn should_sort_by_requested_column_and_direction() {
        let repo = setup().await;
        repo.insert(device("SN-B", "P1", 2)).await.unwrap();
        repo.insert(device("SN-A", "P1", 1)).await.unwrap();

        let asc = repo
            .find_page(PageRequest {
                sort: Some(SortKey::SerialNumber),
                ..PageRequest::default()
            })
            .await
            .unwrap();
        assert_eq!(asc.items[0].serial_number, "SN-A");

        let desc = repo
            .find_page(PageRequest {
                sort: Some(SortKey::SerialNumber),
                order: SortOrder::Desc,
                ..PageRequest::default()
            })
            .await
            .unwrap();
        assert_eq!(desc.items[0].serial_number, "SN-B");
    }

    #[tokio::test]
    async fn should_keep_insertion_order_without_sort_key() {
        let repo = setup().await;
        repo.insert(device("SN-Z", "P1", 1)).await.unwrap();
        repo.insert(device("SN-A", "P1", 2)).await.unwrap();

        let page = repo.find_page(PageRequest::default()).await.unwrap();

        assert_eq!(page.items[0].serial_number, "SN-Z");
        assert_eq!(page.items[1].serial_number, "SN-A");
    }
}
