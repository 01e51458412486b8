//! # Shared Types Crate
//!
//! Record bundles shared by every index crate and the runtime.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate record types are defined here.
//! - **Plain Data**: Records arrive already validated. Nothing here enforces
//!   business rules; scoring and indexing live in their own crates.
//! - **Stable Identity**: Every record carries a `RecordId` assigned once by
//!   the store and never reused.

pub mod entities;

pub use entities::*;
