//! # Adapter Implementations
//!
//! Concrete implementations of the runtime's outbound ports.

pub mod memory_store;

pub use memory_store::{InMemoryRecordStore, SeedData};
