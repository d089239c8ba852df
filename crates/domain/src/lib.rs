//! # prereg-domain
//!
//! Pure domain model for the future-device pre-registration service.
//!
//! ## Responsibilities
//! - Define the **`FutureDevice`** record (serial number / product id /
//!   customer id triple, unique across all records)
//! - Define the **pagination value types** (`PageRequest`, `Page`, sort options)
//! - Define the **error taxonomy** (`PreregError` and friends)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod future_device;
pub mod page;
