//! # Business Record Entities
//!
//! Plain, already-validated record bundles handed to the index structures by
//! the serving layer. Field names serialize in camelCase so stored documents
//! and seed files share one shape.
//!
//! ## Clusters
//!
//! - **Sales**: `Lead`, `LeadSource`, `LeadStage`
//! - **Claims**: `Claim`, `AssessedClaim`, `RiskLevel`
//! - **Catalog**: `Product`
//! - **Customers**: `Customer`, `Order`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier assigned to every stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Builds a deterministic identifier, mostly useful in fixtures.
    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// CLUSTER A: SALES
// =============================================================================

/// Channel a lead arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    /// Introduced by an existing customer.
    Referral,
    /// Reached out directly.
    Direct,
    /// Came in through the website form.
    Website,
    /// Anything else.
    #[default]
    #[serde(other)]
    Other,
}

/// Pipeline stage of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadStage {
    #[default]
    Prospect,
    Qualified,
    Proposal,
    Won,
    Lost,
}

/// A sales lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Store identifier.
    #[serde(default)]
    pub id: RecordId,
    /// Contact name.
    pub name: String,
    /// Contact email, the duplicate-detection key.
    pub email: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Acquisition channel.
    #[serde(default)]
    pub source: LeadSource,
    /// Declared budget.
    #[serde(default)]
    pub budget: f64,
    /// Intake priority (lower is more urgent). Zero until scored.
    #[serde(default)]
    pub score: u32,
    /// Pipeline stage.
    #[serde(default)]
    pub stage: LeadStage,
}

impl Lead {
    /// Creates an unscored prospect with a fresh identifier.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            source: LeadSource::Other,
            budget: 0.0,
            score: 0,
            stage: LeadStage::Prospect,
        }
    }

    pub fn with_source(mut self, source: LeadSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }
}

// =============================================================================
// CLUSTER B: CLAIMS
// =============================================================================

/// Fraud risk tier derived from a claim's fraud score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        f.write_str(label)
    }
}

/// A medical billing claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    #[serde(default)]
    pub id: RecordId,
    pub patient_name: String,
    pub provider_name: String,
    /// Billed amount.
    pub amount: f64,
    /// Procedure codes billed on this claim.
    #[serde(default)]
    pub procedures: Vec<String>,
}

impl Claim {
    pub fn new(
        patient_name: impl Into<String>,
        provider_name: impl Into<String>,
        amount: f64,
        procedures: Vec<String>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            patient_name: patient_name.into(),
            provider_name: provider_name.into(),
            amount,
            procedures,
        }
    }
}

/// A claim together with its fraud assessment, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessedClaim {
    #[serde(flatten)]
    pub claim: Claim,
    pub fraud_score: u32,
    pub risk_level: RiskLevel,
}

// =============================================================================
// CLUSTER C: CATALOG
// =============================================================================

/// A catalog product, indexed by price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub sku: String,
    pub price: f64,
    #[serde(default)]
    pub inventory: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, sku: impl Into<String>, price: f64) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            sku: sku.into(),
            price,
            inventory: 0,
        }
    }
}

// =============================================================================
// CLUSTER D: CUSTOMERS
// =============================================================================

/// A customer, optionally referred by another customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// The customer who referred this one.
    #[serde(default)]
    pub referred_by: Option<RecordId>,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            referred_by: None,
        }
    }

    pub fn referred_by(mut self, referrer: RecordId) -> Self {
        self.referred_by = Some(referrer);
        self
    }
}

/// A customer order, the input to activity metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: RecordId,
    pub customer_id: RecordId,
    pub amount: f64,
    #[serde(default)]
    pub channel: String,
    pub date: NaiveDate,
}
