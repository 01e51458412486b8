//! # Index State
//!
//! One instance of each structure, each behind its own lock. Cloning an
//! `IndexState` clones the handles, not the structures.

use bx_02_duplicate_index::DuplicateIndex;
use bx_03_price_index::PriceIndex;
use bx_04_intake_queue::IntakeQueue;
use bx_05_referral_graph::ReferralGraph;
use parking_lot::RwLock;
use shared_types::{Lead, Product, RecordId};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Leads ranked by intake score, lowest (most urgent) first.
pub type LeadQueue = IntakeQueue<Arc<Lead>, u32>;
/// Products keyed by price.
pub type ProductIndex = PriceIndex<f64, Arc<Product>>;
/// Customer referral relationships, referrer → referred.
pub type ReferralNetwork = ReferralGraph<RecordId>;

/// Shared handles to every in-memory index.
///
/// Lock acquisition order, when more than one is needed: `lead_emails`,
/// `lead_queue`, `products`, `referrals`.
#[derive(Debug, Clone, Default)]
pub struct IndexState {
    /// Lead email → lead id.
    pub lead_emails: Arc<RwLock<DuplicateIndex<String, RecordId>>>,
    /// Lead intake queue.
    pub lead_queue: Arc<RwLock<LeadQueue>>,
    /// Product price index.
    pub products: Arc<RwLock<ProductIndex>>,
    /// Referral graph over customer ids.
    pub referrals: Arc<RwLock<ReferralNetwork>>,
}

impl IndexState {
    /// Creates a container with every structure empty.
    #[instrument(name = "index_state::new")]
    pub fn new() -> Self {
        debug!("Creating empty index state");
        Self::default()
    }

    /// Empties every structure. Takes each write lock in turn.
    pub fn clear(&self) {
        self.lead_emails.write().clear();
        self.lead_queue.write().clear();
        self.products.write().clear();
        self.referrals.write().clear();
    }
}
