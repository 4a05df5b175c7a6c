use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// unique identifier for a customer
pub type CustomerId = Uuid;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// bounded credit score in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct CreditScore(u32);

impl CreditScore {
    pub const MIN: CreditScore = CreditScore(0);
    pub const MAX: CreditScore = CreditScore(100);

    /// create a score, clamping to the upper bound
    pub fn new(raw: u32) -> Self {
        CreditScore(raw.min(Self::MAX.0))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CreditScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// reason code attached to every eligibility and origination outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionReason {
    /// approved at the requested rate
    Approved,
    /// approved, but a policy floor raised the requested rate
    ApprovedAtFloorRate,
    /// credit score at or below the lowest approval tier
    ScoreTooLow,
    /// existing repayment obligations exceed the income cap
    EmiBurdenExceeded,
    /// eligibility passed but the loan row could not be appended
    PersistenceFailed,
}

impl DecisionReason {
    /// whether this reason accompanies an approval
    pub fn is_approval(&self) -> bool {
        matches!(
            self,
            DecisionReason::Approved | DecisionReason::ApprovedAtFloorRate
        )
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            DecisionReason::Approved => "loan approved",
            DecisionReason::ApprovedAtFloorRate => "loan approved at the policy floor rate",
            DecisionReason::ScoreTooLow => "credit score too low",
            DecisionReason::EmiBurdenExceeded => "existing EMI burden exceeds 50% of income",
            DecisionReason::PersistenceFailed => "approved loan could not be persisted",
        };
        write!(f, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_to_upper_bound() {
        assert_eq!(CreditScore::new(40).value(), 40);
        assert_eq!(CreditScore::new(100).value(), 100);
        assert_eq!(CreditScore::new(150).value(), 100);
    }

    #[test]
    fn test_reason_approval_flag() {
        assert!(DecisionReason::Approved.is_approval());
        assert!(DecisionReason::ApprovedAtFloorRate.is_approval());
        assert!(!DecisionReason::ScoreTooLow.is_approval());
        assert!(!DecisionReason::EmiBurdenExceeded.is_approval());
        assert!(!DecisionReason::PersistenceFailed.is_approval());
    }
}
