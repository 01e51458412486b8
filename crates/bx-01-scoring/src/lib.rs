//! # BX-01: Scoring Functions
//!
//! Pure functions that turn a record's attributes into the numbers the index
//! structures order on.
//!
//! ## Functions
//!
//! | Function | Input | Output | Consumer |
//! |----------|-------|--------|----------|
//! | `score_lead` | `Lead` | priority in `1..=100`, lower is more urgent | Intake Queue |
//! | `score_fraud` | `Claim` | score in `0..=100` plus `RiskLevel` | claim review |
//! | `moving_average` | `&[f64]`, window | causal rolling mean | activity metrics |
//!
//! All functions are deterministic and allocation-free except
//! `moving_average`, which returns a vector of the input's length.

pub mod algorithms;
pub mod domain;

pub use algorithms::moving_average::{moving_average, DEFAULT_WINDOW};
pub use domain::fraud::{
    assess_claim, risk_level_for, score_fraud, FraudAssessment, HIGH_RISK_THRESHOLD,
    MEDIUM_RISK_THRESHOLD,
};
pub use domain::lead::score_lead;
