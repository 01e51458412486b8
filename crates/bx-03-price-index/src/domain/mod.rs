//! # Domain Layer - Price Index
//!
//! - `tree`: arena-backed binary search tree and its in-order iterator

pub mod tree;

pub use tree::{Iter, NodeId, PriceIndex};
