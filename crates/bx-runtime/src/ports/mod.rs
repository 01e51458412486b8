//! # Ports
//!
//! Outbound interfaces the runtime depends on.

pub mod store;

pub use store::{RecordStore, StoreError};
