//! # Record Store Port
//!
//! Persistent storage as seen by the runtime. The in-memory indexes are
//! derived data, rebuilt from this store on startup.

use shared_types::{AssessedClaim, Customer, Lead, LeadStage, Order, Product, RecordId};
use std::path::PathBuf;
use thiserror::Error;

/// Record store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this id.
    #[error("Record {0} not found")]
    NotFound(RecordId),

    /// A record with this id is already stored.
    #[error("Record {0} already exists")]
    AlreadyExists(RecordId),

    /// The seed document could not be read.
    #[error("Failed to read seed file {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed document is not valid JSON for [`crate::SeedData`].
    #[error("Failed to parse seed data: {0}")]
    SeedParse(#[from] serde_json::Error),
}

/// Persistent record storage.
///
/// Reads return owned copies in insertion order.
pub trait RecordStore: Send + Sync {
    fn leads(&self) -> Result<Vec<Lead>, StoreError>;
    fn products(&self) -> Result<Vec<Product>, StoreError>;
    fn customers(&self) -> Result<Vec<Customer>, StoreError>;
    fn orders(&self) -> Result<Vec<Order>, StoreError>;
    fn claims(&self) -> Result<Vec<AssessedClaim>, StoreError>;

    fn insert_lead(&self, lead: Lead) -> Result<RecordId, StoreError>;
    fn insert_claim(&self, claim: AssessedClaim) -> Result<RecordId, StoreError>;
    fn insert_customer(&self, customer: Customer) -> Result<RecordId, StoreError>;
    fn insert_product(&self, product: Product) -> Result<RecordId, StoreError>;
    fn insert_order(&self, order: Order) -> Result<RecordId, StoreError>;

    /// Moves a stored lead to `stage`.
    ///
    /// # Errors
    /// - `NotFound` if no lead has this id
    fn update_lead_stage(&self, id: RecordId, stage: LeadStage) -> Result<(), StoreError>;
}

/// Test double that fails every call.
#[cfg(test)]
pub struct FailingRecordStore;

#[cfg(test)]
impl FailingRecordStore {
    fn fail<T>() -> Result<T, StoreError> {
        Err(StoreError::NotFound(RecordId::from_u128(0)))
    }
}

#[cfg(test)]
impl RecordStore for FailingRecordStore {
    fn leads(&self) -> Result<Vec<Lead>, StoreError> {
        Self::fail()
    }
    fn products(&self) -> Result<Vec<Product>, StoreError> {
        Self::fail()
    }
    fn customers(&self) -> Result<Vec<Customer>, StoreError> {
        Self::fail()
    }
    fn orders(&self) -> Result<Vec<Order>, StoreError> {
        Self::fail()
    }
    fn claims(&self) -> Result<Vec<AssessedClaim>, StoreError> {
        Self::fail()
    }
    fn insert_lead(&self, _lead: Lead) -> Result<RecordId, StoreError> {
        Self::fail()
    }
    fn insert_claim(&self, _claim: AssessedClaim) -> Result<RecordId, StoreError> {
        Self::fail()
    }
    fn insert_customer(&self, _customer: Customer) -> Result<RecordId, StoreError> {
        Self::fail()
    }
    fn insert_product(&self, _product: Product) -> Result<RecordId, StoreError> {
        Self::fail()
    }
    fn insert_order(&self, _order: Order) -> Result<RecordId, StoreError> {
        Self::fail()
    }
    fn update_lead_stage(&self, _id: RecordId, _stage: LeadStage) -> Result<(), StoreError> {
        Self::fail()
    }
}
