//! Value objects for the referral graph

use serde::{Deserialize, Serialize};

/// Dense index of a vertex in the graph's arena, assigned in registration
/// order starting at zero.
pub type VertexId = usize;

/// A vertex together with its out-degree, as reported by the ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referrer<V> {
    pub vertex: V,
    /// Number of outgoing edges, parallel edges counted separately.
    pub degree: usize,
}

impl<V> Referrer<V> {
    pub fn new(vertex: V, degree: usize) -> Self {
        Self { vertex, degree }
    }
}
