//! Claim fraud risk.
//!
//! Additive heuristics over the billed amount and procedure count, capped at
//! [`MAX_FRAUD_SCORE`].

use serde::{Deserialize, Serialize};
use shared_types::{AssessedClaim, Claim, RiskLevel};

pub const MAX_FRAUD_SCORE: u32 = 100;

/// Amount above which a claim is considered very large.
pub const LARGE_CLAIM_AMOUNT: f64 = 10_000.0;

/// Amount above which a claim is considered elevated.
pub const ELEVATED_CLAIM_AMOUNT: f64 = 5_000.0;

/// Round-number heuristic modulus.
pub const ROUND_AMOUNT_UNIT: f64 = 1_000.0;

/// Procedure count above which a claim is considered bundled.
pub const MAX_ROUTINE_PROCEDURES: usize = 3;

pub const HIGH_RISK_THRESHOLD: u32 = 50;
pub const MEDIUM_RISK_THRESHOLD: u32 = 30;

/// Fraud score with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudAssessment {
    pub score: u32,
    pub tier: RiskLevel,
}

/// Maps a fraud score to its tier.
pub fn risk_level_for(score: u32) -> RiskLevel {
    if score >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Scores a claim.
pub fn score_fraud(claim: &Claim) -> FraudAssessment {
    let mut score = 0u32;

    if claim.amount > LARGE_CLAIM_AMOUNT {
        score += 30;
    } else if claim.amount > ELEVATED_CLAIM_AMOUNT {
        score += 20;
    }

    if claim.amount % ROUND_AMOUNT_UNIT == 0.0 {
        score += 15;
    }

    if claim.procedures.len() > MAX_ROUTINE_PROCEDURES {
        score += 20;
    }

    let score = score.min(MAX_FRAUD_SCORE);
    FraudAssessment {
        score,
        tier: risk_level_for(score),
    }
}

/// Scores a claim and attaches the result to it.
pub fn assess_claim(claim: Claim) -> AssessedClaim {
    let FraudAssessment { score, tier } = score_fraud(&claim);
    AssessedClaim {
        claim,
        fraud_score: score,
        risk_level: tier,
    }
}
