//! # Domain Layer - Duplicate Index

pub mod duplicate_index;
pub mod errors;

pub use duplicate_index::DuplicateIndex;
pub use errors::LookupError;
