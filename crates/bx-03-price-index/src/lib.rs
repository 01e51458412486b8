//! # BX-03 Price Index
//!
//! Ordered index over numeric keys (product prices) answering inclusive range
//! queries in ascending key order.
//!
//! ## Structure
//!
//! An unbalanced binary search tree whose nodes live in a single arena
//! (`Vec<Node>`) and link to their children by index. There is no parent
//! pointer and no node is ever removed, so indices stay valid for the life of
//! the tree.
//!
//! ## Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Left subtree keys < node key | `PriceIndex::insert` descends left only on `key < node.key` |
//! | Right subtree keys >= node key | equal keys always descend right |
//! | Duplicates are kept | `insert` never replaces, every call allocates a node |
//!
//! ## Complexity
//!
//! Insert and range search are O(h) plus output size, where h is the tree
//! height. Without balancing, sorted insertion degrades h to n. Both
//! operations are iterative, so a degenerate tree costs time but never stack.
//!
//! ```
//! use bx_03_price_index::PriceIndex;
//!
//! let mut index = PriceIndex::new();
//! index.insert(1500.0, "Laptop");
//! index.insert(50.0, "Mouse");
//! index.insert(150.0, "Keyboard");
//! index.insert(400.0, "Monitor");
//!
//! let hits: Vec<_> = index.range_search(&100.0, &500.0).into_iter().map(|(_, v)| *v).collect();
//! assert_eq!(hits, vec!["Keyboard", "Monitor"]);
//! ```

pub mod domain;

pub use domain::{Iter, NodeId, PriceIndex};
