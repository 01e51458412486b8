//! Referral graph storage
//!
//! Vertices live in an arena in registration order. A hash index maps each
//! identifier to its slot, and every slot owns the list of destination slots
//! for its outgoing edges, in the order the edges were added.

use super::value_objects::{Referrer, VertexId};
use crate::algorithms::{breadth_first, depth_first, top_referrers};
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Vertex<V> {
    key: V,
    out: Vec<VertexId>,
}

/// Directed multigraph keyed by opaque vertex identifiers.
#[derive(Debug, Clone)]
pub struct ReferralGraph<V> {
    vertices: Vec<Vertex<V>>,
    index: HashMap<V, VertexId>,
    edge_count: usize,
}

impl<V: Eq + Hash + Clone> ReferralGraph<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Registers `vertex` if it is not already present.
    ///
    /// Returns the vertex's slot either way.
    pub fn add_vertex(&mut self, vertex: V) -> VertexId {
        if let Some(&id) = self.index.get(&vertex) {
            return id;
        }
        let id = self.vertices.len();
        self.index.insert(vertex.clone(), id);
        self.vertices.push(Vertex {
            key: vertex,
            out: Vec::new(),
        });
        id
    }

    /// Appends the edge `from → to`, registering both endpoints first.
    pub fn add_edge(&mut self, from: V, to: V) {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.vertices[from].out.push(to);
        self.edge_count += 1;
    }

    /// Vertices reachable from `start` in breadth-first discovery order.
    ///
    /// An unregistered `start` is treated as an isolated vertex.
    pub fn bfs(&self, start: &V) -> Vec<V> {
        breadth_first(self, start)
    }

    /// Vertices reachable from `start` in depth-first pre-order, following
    /// edges in insertion order.
    ///
    /// An unregistered `start` is treated as an isolated vertex.
    pub fn dfs(&self, start: &V) -> Vec<V> {
        depth_first(self, start)
    }

    /// The `limit` vertices with the most outgoing edges, highest first.
    ///
    /// Ties keep vertex registration order.
    pub fn get_top_referrers(&self, limit: usize) -> Vec<Referrer<V>> {
        top_referrers(self, limit)
    }

    /// Returns true if `vertex` has been registered.
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Number of outgoing edges of `vertex`, or `None` if unregistered.
    pub fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.vertex_id(vertex).map(|id| self.vertices[id].out.len())
    }

    /// Destinations of `vertex`'s outgoing edges, in insertion order.
    /// Empty for an unregistered vertex.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        let out: &'a [VertexId] = match self.vertex_id(vertex) {
            Some(id) => &self.vertices[id].out,
            None => &[],
        };
        out.iter().map(move |&id| &self.vertices[id].key)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Drops every vertex and edge. Used before a rebuild from the store.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.edge_count = 0;
    }

    pub(crate) fn vertex_id(&self, vertex: &V) -> Option<VertexId> {
        self.index.get(vertex).copied()
    }

    pub(crate) fn key(&self, id: VertexId) -> &V {
        &self.vertices[id].key
    }

    pub(crate) fn out_edges(&self, id: VertexId) -> &[VertexId] {
        &self.vertices[id].out
    }

    /// Slots with their out-degree, in registration order.
    pub(crate) fn degrees(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(id, vertex)| (id, vertex.out.len()))
    }
}

impl<V: Eq + Hash + Clone> Default for ReferralGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}
