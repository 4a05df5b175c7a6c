use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;
use crate::decimal::{Money, Rate};
use crate::types::{CreditScore, DecisionReason};

/// outcome of a policy evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyDecision {
    pub approved: bool,
    pub corrected_rate: Rate,
    pub reason: DecisionReason,
}

/// tiered approval policy with an income-based repayment gate
///
/// The tier table is evaluated top-down on the credit score; the repayment
/// gate can override any tier approval into a rejection.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityPolicy {
    config: PolicyConfig,
}

impl EligibilityPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// decide approval and the corrected rate for a scored request
    ///
    /// `total_monthly_repayment` must already reflect the caller's exclusion
    /// choice: all prior loans for a new origination, or all but the loan
    /// under re-evaluation for an eligibility check.
    pub fn decide(
        &self,
        score: CreditScore,
        requested_rate: Rate,
        total_monthly_repayment: Money,
        monthly_salary: Money,
    ) -> PolicyDecision {
        let tier = self.tier_decision(score, requested_rate);
        if !tier.approved {
            return tier;
        }

        let repayment_cap = monthly_salary * self.config.max_repayment_ratio;
        if total_monthly_repayment > repayment_cap {
            return PolicyDecision {
                approved: false,
                corrected_rate: Rate::ZERO,
                reason: DecisionReason::EmiBurdenExceeded,
            };
        }

        tier
    }

    fn tier_decision(&self, score: CreditScore, requested_rate: Rate) -> PolicyDecision {
        let score = score.value();

        if score > self.config.prime_score {
            PolicyDecision {
                approved: true,
                corrected_rate: requested_rate,
                reason: DecisionReason::Approved,
            }
        } else if score > self.config.standard_score {
            floored(requested_rate, self.config.standard_floor)
        } else if score > self.config.subprime_score {
            floored(requested_rate, self.config.subprime_floor)
        } else {
            PolicyDecision {
                approved: false,
                corrected_rate: Rate::ZERO,
                reason: DecisionReason::ScoreTooLow,
            }
        }
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::new(PolicyConfig::standard())
    }
}

fn floored(requested_rate: Rate, floor: Rate) -> PolicyDecision {
    let corrected_rate = requested_rate.max(floor);
    let reason = if corrected_rate > requested_rate {
        DecisionReason::ApprovedAtFloorRate
    } else {
        DecisionReason::Approved
    };

    PolicyDecision {
        approved: true,
        corrected_rate,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(score: u32, requested_percent: u32) -> PolicyDecision {
        EligibilityPolicy::default().decide(
            CreditScore::new(score),
            Rate::from_percentage(requested_percent),
            Money::ZERO,
            Money::from_major(100_000),
        )
    }

    #[test]
    fn test_prime_tier_keeps_requested_rate() {
        let decision = decide(60, 10);
        assert!(decision.approved);
        assert_eq!(decision.corrected_rate, Rate::from_percentage(10));
        assert_eq!(decision.reason, DecisionReason::Approved);
    }

    #[test]
    fn test_standard_tier_floors_at_twelve() {
        let decision = decide(40, 10);
        assert!(decision.approved);
        assert_eq!(decision.corrected_rate, Rate::from_percentage(12));
        assert_eq!(decision.reason, DecisionReason::ApprovedAtFloorRate);
    }

    #[test]
    fn test_standard_tier_keeps_higher_requested_rate() {
        let decision = decide(40, 14);
        assert!(decision.approved);
        assert_eq!(decision.corrected_rate, Rate::from_percentage(14));
        assert_eq!(decision.reason, DecisionReason::Approved);
    }

    #[test]
    fn test_subprime_tier_floors_at_sixteen() {
        let decision = decide(20, 10);
        assert!(decision.approved);
        assert_eq!(decision.corrected_rate, Rate::from_percentage(16));
        assert_eq!(decision.reason, DecisionReason::ApprovedAtFloorRate);
    }

    #[test]
    fn test_lowest_band_rejected_with_zero_rate() {
        let decision = decide(10, 10);
        assert!(!decision.approved);
        assert_eq!(decision.corrected_rate, Rate::ZERO);
        assert_eq!(decision.reason, DecisionReason::ScoreTooLow);
    }

    #[test]
    fn test_tier_boundaries() {
        // 51 is prime, 50 is standard
        assert_eq!(decide(51, 10).corrected_rate, Rate::from_percentage(10));
        assert_eq!(decide(50, 10).corrected_rate, Rate::from_percentage(12));
        // 31 is standard, 30 is subprime
        assert_eq!(decide(31, 10).corrected_rate, Rate::from_percentage(12));
        assert_eq!(decide(30, 10).corrected_rate, Rate::from_percentage(16));
        // 11 is subprime, 10 is rejected
        assert_eq!(decide(11, 10).corrected_rate, Rate::from_percentage(16));
        assert!(!decide(10, 10).approved);
    }

    #[test]
    fn test_repayment_gate_overrides_tier_approval() {
        let policy = EligibilityPolicy::default();
        let decision = policy.decide(
            CreditScore::new(60),
            Rate::from_percentage(10),
            Money::from_major(6_000),
            Money::from_major(10_000),
        );
        assert!(!decision.approved);
        assert_eq!(decision.corrected_rate, Rate::ZERO);
        assert_eq!(decision.reason, DecisionReason::EmiBurdenExceeded);
    }

    #[test]
    fn test_repayment_exactly_at_cap_passes() {
        let policy = EligibilityPolicy::default();
        let decision = policy.decide(
            CreditScore::new(60),
            Rate::from_percentage(10),
            Money::from_major(5_000),
            Money::from_major(10_000),
        );
        assert!(decision.approved);
    }

    #[test]
    fn test_gate_not_reached_when_score_rejects() {
        let policy = EligibilityPolicy::default();
        let decision = policy.decide(
            CreditScore::new(0),
            Rate::from_percentage(10),
            Money::from_major(9_000),
            Money::from_major(10_000),
        );
        assert_eq!(decision.reason, DecisionReason::ScoreTooLow);
    }
}
