//! Error types for the Duplicate Index

use thiserror::Error;

/// Errors returned by duplicate-index lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Key not registered in duplicate index")]
    NotFound,
}
