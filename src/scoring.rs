use crate::config::ScoringConfig;
use crate::records::Customer;
use crate::types::CreditScore;

/// credit scoring strategy
///
/// Implementations derive a bounded score from a customer and their loan
/// count; swapping the strategy never touches orchestration.
pub trait CreditScorer {
    fn score(&self, customer: &Customer, loan_count: u64) -> CreditScore;
}

/// default scorer: fixed points per loan on record, capped
///
/// The entire scoring signal is the loan count. Payment history, loan size,
/// and delinquency carry no weight.
#[derive(Debug, Clone, Copy)]
pub struct LoanCountScorer {
    config: ScoringConfig,
}

impl LoanCountScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }
}

impl Default for LoanCountScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::standard())
    }
}

impl CreditScorer for LoanCountScorer {
    fn score(&self, _customer: &Customer, loan_count: u64) -> CreditScore {
        let raw = loan_count.saturating_mul(self.config.points_per_loan as u64);
        let capped = raw.min(self.config.max_score as u64);
        CreditScore::new(capped as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;

    fn customer() -> Customer {
        Customer::new("Ravi", "Iyer", "9876500002", 40, Money::from_major(75_000))
    }

    #[test]
    fn test_no_history_scores_zero() {
        let scorer = LoanCountScorer::default();
        assert_eq!(scorer.score(&customer(), 0), CreditScore::new(0));
    }

    #[test]
    fn test_ten_points_per_loan() {
        let scorer = LoanCountScorer::default();
        assert_eq!(scorer.score(&customer(), 4), CreditScore::new(40));
        assert_eq!(scorer.score(&customer(), 6), CreditScore::new(60));
    }

    #[test]
    fn test_score_caps_at_one_hundred() {
        let scorer = LoanCountScorer::default();
        assert_eq!(scorer.score(&customer(), 10), CreditScore::MAX);
        assert_eq!(scorer.score(&customer(), 250), CreditScore::MAX);
    }

    #[test]
    fn test_score_never_decreases_with_more_loans() {
        let scorer = LoanCountScorer::default();
        let c = customer();
        let mut previous = scorer.score(&c, 0);
        for count in 1..=15 {
            let current = scorer.score(&c, count);
            assert!(current >= previous);
            previous = current;
        }
    }
}
