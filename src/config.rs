use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;

/// origination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginationConfig {
    pub scoring: ScoringConfig,
    pub policy: PolicyConfig,
}

impl OriginationConfig {
    /// standard configuration matching the published rate-correction table
    pub fn standard() -> Self {
        Self {
            scoring: ScoringConfig::standard(),
            policy: PolicyConfig::standard(),
        }
    }
}

impl Default for OriginationConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// scoring configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// points granted per loan on record
    pub points_per_loan: u32,
    /// cap applied to the raw score
    pub max_score: u32,
}

impl ScoringConfig {
    pub fn standard() -> Self {
        Self {
            points_per_loan: 10,
            max_score: 100,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// eligibility policy configuration
///
/// tier boundaries are exclusive lower bounds: a score qualifies for a tier
/// when it is strictly above the boundary
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// above this score the requested rate stands
    pub prime_score: u32,
    /// above this score the standard floor applies
    pub standard_score: u32,
    /// above this score the subprime floor applies; at or below it, reject
    pub subprime_score: u32,
    /// rate floor for the standard tier
    pub standard_floor: Rate,
    /// rate floor for the subprime tier
    pub subprime_floor: Rate,
    /// maximum fraction of monthly salary existing repayments may consume
    pub max_repayment_ratio: Decimal,
}

impl PolicyConfig {
    pub fn standard() -> Self {
        Self {
            prime_score: 50,
            standard_score: 30,
            subprime_score: 10,
            standard_floor: Rate::from_percentage(12),
            subprime_floor: Rate::from_percentage(16),
            max_repayment_ratio: dec!(0.5),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::standard()
    }
}
