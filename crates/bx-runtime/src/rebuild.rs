//! # Startup Rebuild
//!
//! Repopulates every in-memory structure from the record store. Structures
//! are cleared first, so running it twice yields the same state.

use crate::container::IndexState;
use crate::ports::{RecordStore, StoreError};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Counts of what a rebuild loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebuildReport {
    /// Leads enqueued.
    pub leads_queued: usize,
    /// Distinct lead emails registered.
    pub emails_registered: usize,
    /// Products inserted into the price index.
    pub products_indexed: usize,
    /// Customer vertices in the referral graph.
    pub customers_linked: usize,
    /// Referral edges added.
    pub referral_edges: usize,
}

/// Rebuilds `state` from `store`.
///
/// Leads are enqueued under their stored score, not rescored. A repeated
/// email keeps the identifier of the last lead stored with it. A customer
/// whose `referred_by` names an unknown customer still gets the edge; the
/// referrer becomes a vertex of its own.
///
/// # Errors
/// Propagates the first store read failure. `state` is left cleared or
/// partially rebuilt in that case.
#[instrument(name = "rebuild", skip_all)]
pub fn rebuild<S: RecordStore + ?Sized>(
    store: &S,
    state: &IndexState,
) -> Result<RebuildReport, StoreError> {
    state.clear();
    let mut report = RebuildReport::default();

    let leads = store.leads()?;
    {
        let mut emails = state.lead_emails.write();
        let mut queue = state.lead_queue.write();
        for lead in leads {
            if emails.set(lead.email.clone(), lead.id).is_some() {
                warn!(email = %lead.email, id = %lead.id, "Stored leads share an email");
            }
            let score = lead.score;
            queue.enqueue(Arc::new(lead), score);
        }
        report.leads_queued = queue.len();
        report.emails_registered = emails.len();
    }
    debug!(leads = report.leads_queued, "Lead queue rebuilt");

    let products = store.products()?;
    {
        let mut index = state.products.write();
        for product in products {
            index.insert(product.price, Arc::new(product));
        }
        report.products_indexed = index.len();
    }
    debug!(products = report.products_indexed, "Price index rebuilt");

    let customers = store.customers()?;
    {
        let mut graph = state.referrals.write();
        for customer in &customers {
            graph.add_vertex(customer.id);
        }
        for customer in &customers {
            if let Some(referrer) = customer.referred_by {
                graph.add_edge(referrer, customer.id);
            }
        }
        report.customers_linked = graph.vertex_count();
        report.referral_edges = graph.edge_count();
    }

    info!(
        leads = report.leads_queued,
        products = report.products_indexed,
        customers = report.customers_linked,
        referrals = report.referral_edges,
        "Indexes rebuilt from store"
    );
    Ok(report)
}
