//! Runtime error type.

use crate::container::ConfigError;
use crate::ports::StoreError;
use shared_types::RecordId;
use thiserror::Error;

/// Errors surfaced by the runtime to its callers.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A lead with this email is already registered.
    #[error("Lead with email {email} already exists (id {existing})")]
    DuplicateLead { email: String, existing: RecordId },

    /// The record store failed.
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
