//! Lead intake priority.
//!
//! Lower values are more urgent so the score feeds a min-heap directly.

use shared_types::{Lead, LeadSource};

/// Starting priority before any adjustment.
pub const BASE_LEAD_SCORE: i64 = 100;

/// Budget at or above which a lead is treated as enterprise.
pub const ENTERPRISE_BUDGET: f64 = 50_000.0;

/// Budget at or above which a lead is treated as mid-market.
pub const MID_MARKET_BUDGET: f64 = 10_000.0;

/// Floor of the priority range. A lead never scores zero or below.
pub const MIN_LEAD_SCORE: i64 = 1;

/// Computes the intake priority of a lead.
///
/// Budget and source adjustments each apply at most once: the first matching
/// tier wins.
pub fn score_lead(lead: &Lead) -> u32 {
    let mut score = BASE_LEAD_SCORE;

    if lead.budget >= ENTERPRISE_BUDGET {
        score -= 30;
    } else if lead.budget >= MID_MARKET_BUDGET {
        score -= 20;
    }

    score -= match lead.source {
        LeadSource::Referral => 25,
        LeadSource::Direct => 15,
        LeadSource::Website | LeadSource::Other => 0,
    };

    score.max(MIN_LEAD_SCORE) as u32
}
