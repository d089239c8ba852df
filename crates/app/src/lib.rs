//! # prereg-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage port** that the persistence adapter implements:
//!   - `FutureDeviceRepository` — paged reads and uniqueness-aware inserts
//! - Define the **use-case service**:
//!   - `FutureDeviceService` — list (paginated) and create (conflict-aware)
//!
//! ## Dependency rule
//! Depends on `prereg-domain` only. Never imports adapter crates; adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
