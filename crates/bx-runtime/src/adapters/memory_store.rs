//! # In-Memory Record Store
//!
//! `RecordStore` backed by vectors behind a single `parking_lot::RwLock`,
//! optionally populated from a JSON seed document.

use crate::ports::{RecordStore, StoreError};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared_types::{AssessedClaim, Customer, Lead, LeadStage, Order, Product, RecordId};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Every stored collection, in the shape of the JSON seed document.
///
/// Missing collections default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeedData {
    pub leads: Vec<Lead>,
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub claims: Vec<AssessedClaim>,
}

impl SeedData {
    /// Parses a seed document.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the seed document at `path`.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::SeedIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Volatile record store.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    data: RwLock<SeedData>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `seed`.
    ///
    /// # Errors
    /// - `AlreadyExists` if two records of one collection share an id
    pub fn from_seed(seed: SeedData) -> Result<Self, StoreError> {
        ensure_unique(seed.leads.iter().map(|l| l.id))?;
        ensure_unique(seed.products.iter().map(|p| p.id))?;
        ensure_unique(seed.customers.iter().map(|c| c.id))?;
        ensure_unique(seed.orders.iter().map(|o| o.id))?;
        ensure_unique(seed.claims.iter().map(|c| c.claim.id))?;

        info!(
            leads = seed.leads.len(),
            products = seed.products.len(),
            customers = seed.customers.len(),
            orders = seed.orders.len(),
            claims = seed.claims.len(),
            "Loaded seed data"
        );
        Ok(Self {
            data: RwLock::new(seed),
        })
    }

    /// Reads the seed document at `path` and builds a store from it.
    pub fn from_seed_file(path: &Path) -> Result<Self, StoreError> {
        debug!(path = %path.display(), "Reading seed file");
        Self::from_seed(SeedData::from_path(path)?)
    }

    /// Copies every collection out of the store.
    pub fn export(&self) -> SeedData {
        self.data.read().clone()
    }
}

fn ensure_unique(ids: impl Iterator<Item = RecordId>) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::AlreadyExists(id));
        }
    }
    Ok(())
}

fn push_unique<T>(
    records: &mut Vec<T>,
    record: T,
    id_of: impl Fn(&T) -> RecordId,
) -> Result<RecordId, StoreError> {
    let id = id_of(&record);
    if records.iter().any(|existing| id_of(existing) == id) {
        return Err(StoreError::AlreadyExists(id));
    }
    records.push(record);
    Ok(id)
}

impl RecordStore for InMemoryRecordStore {
    fn leads(&self) -> Result<Vec<Lead>, StoreError> {
        Ok(self.data.read().leads.clone())
    }

    fn products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.data.read().products.clone())
    }

    fn customers(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.data.read().customers.clone())
    }

    fn orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.data.read().orders.clone())
    }

    fn claims(&self) -> Result<Vec<AssessedClaim>, StoreError> {
        Ok(self.data.read().claims.clone())
    }

    fn insert_lead(&self, lead: Lead) -> Result<RecordId, StoreError> {
        push_unique(&mut self.data.write().leads, lead, |l| l.id)
    }

    fn insert_claim(&self, claim: AssessedClaim) -> Result<RecordId, StoreError> {
        push_unique(&mut self.data.write().claims, claim, |c| c.claim.id)
    }

    fn insert_customer(&self, customer: Customer) -> Result<RecordId, StoreError> {
        push_unique(&mut self.data.write().customers, customer, |c| c.id)
    }

    fn insert_product(&self, product: Product) -> Result<RecordId, StoreError> {
        push_unique(&mut self.data.write().products, product, |p| p.id)
    }

    fn insert_order(&self, order: Order) -> Result<RecordId, StoreError> {
        push_unique(&mut self.data.write().orders, order, |o| o.id)
    }

    fn update_lead_stage(&self, id: RecordId, stage: LeadStage) -> Result<(), StoreError> {
        let mut data = self.data.write();
        let lead = data
            .leads
            .iter_mut()
            .find(|lead| lead.id == id)
            .ok_or(StoreError::NotFound(id))?;
        lead.stage = stage;
        Ok(())
    }
}
