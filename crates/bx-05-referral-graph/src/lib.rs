//! # BX-05: Referral Graph
//!
//! Directed graph of "A referred B" relationships between customers, with
//! breadth-first and depth-first reach queries and an out-degree ranking of
//! the most active referrers.
//!
//! ## Architecture
//!
//! - **Domain**: `ReferralGraph` (vertex arena plus identifier index),
//!   `VertexId`, `Referrer`
//! - **Algorithms**: BFS and DFS traversal, top-referrer ranking
//!
//! ## Invariants
//!
//! - Every edge endpoint is a registered vertex (`add_edge` registers both).
//! - Edges are append-only; self-loops and parallel edges are kept.
//! - Traversals report each reachable vertex exactly once.
//!
//! ## Example
//!
//! ```
//! use bx_05_referral_graph::ReferralGraph;
//!
//! let mut graph = ReferralGraph::new();
//! graph.add_edge("alice", "charlie");
//! graph.add_edge("alice", "dana");
//! graph.add_edge("charlie", "erin");
//!
//! assert_eq!(graph.bfs(&"alice"), vec!["alice", "charlie", "dana", "erin"]);
//! assert_eq!(graph.dfs(&"alice"), vec!["alice", "charlie", "erin", "dana"]);
//! assert_eq!(graph.get_top_referrers(1)[0].vertex, "alice");
//! ```

pub mod algorithms;
pub mod domain;

pub use algorithms::{breadth_first, depth_first, top_referrers};
pub use domain::graph::ReferralGraph;
pub use domain::value_objects::{Referrer, VertexId};
