//! Algorithms module for the referral graph
//!
//! Contains:
//! - Breadth-first and depth-first traversal
//! - Out-degree ranking

pub mod ranking;
pub mod traversal;

pub use ranking::top_referrers;
pub use traversal::{breadth_first, depth_first};
