//! # Intake Service
//!
//! One method per inbound event of the serving layer. Each method persists
//! through the [`RecordStore`] first and only then updates the in-memory
//! structures, so a store failure never leaves an index ahead of the store.

use crate::container::{IndexState, RuntimeConfig};
use crate::errors::RuntimeError;
use crate::ports::RecordStore;
use bx_01_scoring::{assess_claim, moving_average, score_lead, HIGH_RISK_THRESHOLD};
use bx_04_intake_queue::QueueError;
use bx_05_referral_graph::Referrer;
use serde::Serialize;
use shared_types::{
    AssessedClaim, Claim, Customer, Lead, LeadStage, Order, Product, RecordId,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of admitting a new lead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAdmission {
    /// The lead as stored, score and stage filled in.
    pub lead: Lead,
    /// Queue length after the lead was enqueued.
    pub queue_size: usize,
}

/// Headline counters for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_leads: usize,
    pub total_claims: usize,
    pub total_customers: usize,
    pub total_orders: usize,
    /// Claims whose fraud score reaches the high-risk threshold.
    pub high_risk_claims: usize,
    /// Mean fraud score over stored claims, 0 when there are none.
    pub avg_fraud_score: f64,
    /// Leads currently waiting in the intake queue.
    pub queue_size: usize,
}

/// Drives the index structures for each inbound business event.
pub struct IntakeService<S> {
    store: Arc<S>,
    state: IndexState,
    config: RuntimeConfig,
}

impl<S: RecordStore> IntakeService<S> {
    pub fn new(store: Arc<S>, state: IndexState, config: RuntimeConfig) -> Self {
        Self {
            store,
            state,
            config,
        }
    }

    pub fn state(&self) -> &IndexState {
        &self.state
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Leads
    // -------------------------------------------------------------------------

    /// Scores, persists and enqueues a new lead.
    ///
    /// The lead-email write lock is held for the whole admission so two
    /// submissions with the same email cannot both pass the duplicate check.
    ///
    /// # Errors
    /// - `DuplicateLead` if the email is already registered
    /// - `Store` if persisting fails; no index is touched in that case
    pub fn submit_lead(&self, mut lead: Lead) -> Result<LeadAdmission, RuntimeError> {
        let mut emails = self.state.lead_emails.write();
        if let Ok(existing) = emails.get(lead.email.as_str()) {
            warn!(email = %lead.email, existing = %existing, "Rejected duplicate lead");
            return Err(RuntimeError::DuplicateLead {
                email: lead.email,
                existing: *existing,
            });
        }

        lead.score = score_lead(&lead);
        lead.stage = LeadStage::Prospect;
        let id = self.store.insert_lead(lead.clone())?;

        let queue_size = {
            let mut queue = self.state.lead_queue.write();
            queue.enqueue(Arc::new(lead.clone()), lead.score);
            queue.len()
        };
        emails.set(lead.email.clone(), id);

        info!(id = %id, score = lead.score, queue_size, "Lead admitted");
        Ok(LeadAdmission { lead, queue_size })
    }

    /// Removes and returns the most urgent lead.
    pub fn next_lead(&self) -> Result<Arc<Lead>, QueueError> {
        let entry = self.state.lead_queue.write().dequeue()?;
        debug!(id = %entry.item.id, score = entry.priority, "Lead dequeued");
        Ok(entry.item)
    }

    /// Returns the most urgent lead without removing it.
    pub fn peek_lead(&self) -> Result<Arc<Lead>, QueueError> {
        let queue = self.state.lead_queue.read();
        queue.peek().map(|entry| Arc::clone(&entry.item))
    }

    /// Every queued lead with its score, most urgent first.
    pub fn lead_queue(&self) -> Vec<(Arc<Lead>, u32)> {
        self.state
            .lead_queue
            .read()
            .snapshot()
            .into_iter()
            .map(|entry| (Arc::clone(&entry.item), entry.priority))
            .collect()
    }

    /// Persists a pipeline stage change.
    ///
    /// Queued entries keep the lead as it was when enqueued.
    pub fn advance_lead(&self, id: RecordId, stage: LeadStage) -> Result<(), RuntimeError> {
        self.store.update_lead_stage(id, stage)?;
        info!(id = %id, stage = ?stage, "Lead stage updated");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Claims
    // -------------------------------------------------------------------------

    /// Scores a claim for fraud and persists the assessment.
    pub fn assess_claim(&self, claim: Claim) -> Result<AssessedClaim, RuntimeError> {
        let assessed = assess_claim(claim);
        self.store.insert_claim(assessed.clone())?;
        info!(
            id = %assessed.claim.id,
            fraud_score = assessed.fraud_score,
            risk = %assessed.risk_level,
            "Claim assessed"
        );
        Ok(assessed)
    }

    /// Stored claims, highest fraud score first. Ties keep store order.
    pub fn claims_by_risk(&self) -> Result<Vec<AssessedClaim>, RuntimeError> {
        let mut claims = self.store.claims()?;
        claims.sort_by(|a, b| b.fraud_score.cmp(&a.fraud_score));
        Ok(claims)
    }

    // -------------------------------------------------------------------------
    // Customers and referrals
    // -------------------------------------------------------------------------

    /// Persists a customer and links it under its referrer, if any.
    pub fn register_customer(&self, customer: Customer) -> Result<RecordId, RuntimeError> {
        let referrer = customer.referred_by;
        let id = self.store.insert_customer(customer)?;

        let mut graph = self.state.referrals.write();
        graph.add_vertex(id);
        if let Some(referrer) = referrer {
            graph.add_edge(referrer, id);
        }
        debug!(id = %id, referred_by = ?referrer, "Customer registered");
        Ok(id)
    }

    /// Customers with the most direct referrals, limited by configuration.
    pub fn top_referrers(&self) -> Vec<Referrer<RecordId>> {
        self.state
            .referrals
            .read()
            .get_top_referrers(self.config.referral.top_limit)
    }

    /// Everyone reachable through referrals from `customer`, nearest first.
    /// The customer itself comes first.
    pub fn referral_reach(&self, customer: RecordId) -> Vec<RecordId> {
        self.state.referrals.read().bfs(&customer)
    }

    /// The referral tree under `customer` in depth-first pre-order.
    pub fn referral_tree(&self, customer: RecordId) -> Vec<RecordId> {
        self.state.referrals.read().dfs(&customer)
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// Persists a product and indexes it by price.
    pub fn register_product(&self, product: Product) -> Result<RecordId, RuntimeError> {
        let price = product.price;
        let product = Arc::new(product);
        let id = self.store.insert_product(Product::clone(&product))?;
        self.state.products.write().insert(price, product);
        debug!(id = %id, price, "Product indexed");
        Ok(id)
    }

    /// Products priced within `[min, max]`, cheapest first.
    ///
    /// A missing bound falls back to the configured default. An inverted
    /// range yields no products.
    pub fn search_products(&self, min: Option<f64>, max: Option<f64>) -> Vec<Arc<Product>> {
        let min = min.unwrap_or(self.config.search.default_min_price);
        let max = max.unwrap_or(self.config.search.default_max_price);
        self.state
            .products
            .read()
            .range_search(&min, &max)
            .into_iter()
            .map(|(_, product)| Arc::clone(product))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Orders and metrics
    // -------------------------------------------------------------------------

    pub fn record_order(&self, order: Order) -> Result<RecordId, RuntimeError> {
        Ok(self.store.insert_order(order)?)
    }

    /// Moving average of order amounts in date order, using the configured
    /// window. Orders on the same date keep store order.
    pub fn activity_moving_average(&self) -> Result<Vec<f64>, RuntimeError> {
        let mut orders = self.store.orders()?;
        orders.sort_by_key(|order| order.date);
        let amounts: Vec<f64> = orders.iter().map(|order| order.amount).collect();
        Ok(moving_average(
            &amounts,
            self.config.metrics.moving_average_window,
        ))
    }

    /// Headline counters across the store and the intake queue.
    pub fn dashboard(&self) -> Result<DashboardStats, RuntimeError> {
        let claims = self.store.claims()?;
        let high_risk_claims = claims
            .iter()
            .filter(|c| c.fraud_score >= HIGH_RISK_THRESHOLD)
            .count();
        let avg_fraud_score = if claims.is_empty() {
            0.0
        } else {
            claims.iter().map(|c| f64::from(c.fraud_score)).sum::<f64>() / claims.len() as f64
        };

        Ok(DashboardStats {
            total_leads: self.store.leads()?.len(),
            total_claims: claims.len(),
            total_customers: self.store.customers()?.len(),
            total_orders: self.store.orders()?.len(),
            high_risk_claims,
            avg_fraud_score,
            queue_size: self.state.lead_queue.read().len(),
        })
    }
}
