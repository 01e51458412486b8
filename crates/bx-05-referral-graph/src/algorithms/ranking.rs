//! Out-degree ranking
//!
//! Ranks by raw edge count, so a customer who referred the same person twice
//! counts twice.

use crate::domain::graph::ReferralGraph;
use crate::domain::value_objects::Referrer;
use std::hash::Hash;

/// The `limit` vertices with the highest out-degree, highest first.
///
/// The sort is stable over registration order, so among equal degrees the
/// earlier-registered vertex comes first.
pub fn top_referrers<V: Eq + Hash + Clone>(graph: &ReferralGraph<V>, limit: usize) -> Vec<Referrer<V>> {
    let mut degrees: Vec<(usize, usize)> = graph.degrees().collect();
    degrees.sort_by(|a, b| b.1.cmp(&a.1));
    degrees.truncate(limit);

    degrees
        .into_iter()
        .map(|(id, degree)| Referrer::new(graph.key(id).clone(), degree))
        .collect()
}
