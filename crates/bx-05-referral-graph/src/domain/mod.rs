//! Domain module for the referral graph

pub mod graph;
pub mod value_objects;
