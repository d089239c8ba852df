//! # prereg-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `prereg-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Own the `UNIQUE (serial_number, product_id, customer_id)` constraint and
//!   surface its violations through the port's error contract
//!
//! ## Dependency rule
//! Depends on `prereg-app` (for the port trait) and `prereg-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod future_device_repo;
pub mod pool;

pub use error::StorageError;
pub use future_device_repo::SqliteFutureDeviceRepository;
pub use pool::{Config, Database};
