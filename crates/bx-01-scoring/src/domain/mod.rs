//! # Domain Layer - Scoring
//!
//! - `lead`: intake priority for sales leads
//! - `fraud`: fraud risk score and tier for medical claims

pub mod fraud;
pub mod lead;
