use hourglass_rs::SafeTimeProvider;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::amortization::monthly_installment;
use crate::config::OriginationConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{OriginationError, Result};
use crate::events::{Event, EventStore};
use crate::policy::{EligibilityPolicy, PolicyDecision};
use crate::records::NewLoan;
use crate::scoring::{CreditScorer, LoanCountScorer};
use crate::store::LoanStore;
use crate::types::{CreditScore, CustomerId, DecisionReason, LoanId};

/// result of a read-only eligibility check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityReport {
    pub customer_id: CustomerId,
    pub score: CreditScore,
    pub approved: bool,
    pub corrected_rate: Rate,
    pub tenure_months: u32,
    /// installment at the corrected rate; zero when rejected, since the
    /// corrected rate is zero and a zero rate amortizes to zero
    pub monthly_installment: Money,
    pub reason: DecisionReason,
}

/// result of a loan origination attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginationOutcome {
    pub customer_id: CustomerId,
    pub approved: bool,
    pub loan_id: Option<LoanId>,
    pub corrected_rate: Rate,
    pub monthly_installment: Option<Money>,
    pub reason: DecisionReason,
}

/// orchestrates scoring, policy, and amortization against the store
pub struct LoanOriginationService<S: LoanStore> {
    store: S,
    scorer: Box<dyn CreditScorer>,
    policy: EligibilityPolicy,
    events: EventStore,
}

impl<S: LoanStore> LoanOriginationService<S> {
    /// create a service with the standard configuration
    pub fn new(store: S) -> Self {
        Self::with_config(store, OriginationConfig::standard())
    }

    /// create a service with explicit configuration
    pub fn with_config(store: S, config: OriginationConfig) -> Self {
        Self {
            store,
            scorer: Box::new(LoanCountScorer::new(config.scoring)),
            policy: EligibilityPolicy::new(config.policy),
            events: EventStore::new(),
        }
    }

    /// replace the scoring strategy
    pub fn with_scorer(mut self, scorer: Box<dyn CreditScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// access the backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// get events
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// read-only eligibility check with system time
    pub fn check_eligibility_now(
        &mut self,
        customer_id: CustomerId,
        loan_amount: Money,
        requested_rate: Rate,
        tenure_months: u32,
        exclude_loan: Option<LoanId>,
    ) -> Result<EligibilityReport> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.check_eligibility(
            customer_id,
            loan_amount,
            requested_rate,
            tenure_months,
            exclude_loan,
            &time,
        )
    }

    /// read-only eligibility check
    ///
    /// Runs the same scoring and policy steps as origination without
    /// persisting anything. When `exclude_loan` names an existing loan, that
    /// loan's installment is left out of the repayment total, so a loan can
    /// be re-evaluated without counting against itself.
    pub fn check_eligibility(
        &mut self,
        customer_id: CustomerId,
        loan_amount: Money,
        requested_rate: Rate,
        tenure_months: u32,
        exclude_loan: Option<LoanId>,
        time_provider: &SafeTimeProvider,
    ) -> Result<EligibilityReport> {
        validate_request(loan_amount, requested_rate, tenure_months)?;

        let (score, decision) = self.evaluate(customer_id, requested_rate, exclude_loan)?;

        // mirrors the upstream report: the installment is quoted even on a
        // rejection, where the zero corrected rate makes it zero
        let installment = monthly_installment(loan_amount, decision.corrected_rate, tenure_months);

        debug!(
            customer_id = %customer_id,
            score = %score,
            approved = decision.approved,
            corrected_rate = %decision.corrected_rate,
            "eligibility checked"
        );

        self.events.emit(Event::EligibilityChecked {
            customer_id,
            score,
            approved: decision.approved,
            corrected_rate: decision.corrected_rate,
            timestamp: time_provider.now(),
        });

        Ok(EligibilityReport {
            customer_id,
            score,
            approved: decision.approved,
            corrected_rate: decision.corrected_rate,
            tenure_months,
            monthly_installment: installment,
            reason: decision.reason,
        })
    }

    /// originate a loan with system time
    pub fn originate_now(
        &mut self,
        customer_id: CustomerId,
        loan_amount: Money,
        requested_rate: Rate,
        tenure_months: u32,
    ) -> Result<OriginationOutcome> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.originate(customer_id, loan_amount, requested_rate, tenure_months, &time)
    }

    /// originate a loan
    ///
    /// Scores the customer, applies the eligibility policy against the full
    /// current repayment obligation, and on approval persists a new loan
    /// starting now. A store failure after approval is reported as a
    /// rejection with `PersistenceFailed`, never as a success.
    pub fn originate(
        &mut self,
        customer_id: CustomerId,
        loan_amount: Money,
        requested_rate: Rate,
        tenure_months: u32,
        time_provider: &SafeTimeProvider,
    ) -> Result<OriginationOutcome> {
        validate_request(loan_amount, requested_rate, tenure_months)?;

        let (score, decision) = self.evaluate(customer_id, requested_rate, None)?;
        let now = time_provider.now();

        if !decision.approved {
            debug!(
                customer_id = %customer_id,
                score = %score,
                reason = %decision.reason,
                "loan request rejected"
            );
            self.events.emit(Event::LoanRejected {
                customer_id,
                score,
                reason: decision.reason,
                timestamp: now,
            });
            return Ok(rejection(customer_id, decision.corrected_rate, decision.reason));
        }

        let installment = monthly_installment(loan_amount, decision.corrected_rate, tenure_months);
        let loan = NewLoan::new(
            customer_id,
            loan_amount,
            decision.corrected_rate,
            tenure_months,
            installment,
            now,
        );

        match self.store.insert_loan(loan) {
            Ok(loan_id) => {
                info!(
                    customer_id = %customer_id,
                    loan_id = %loan_id,
                    principal = %loan_amount,
                    rate = %decision.corrected_rate,
                    installment = %installment,
                    "loan originated"
                );
                self.events.emit(Event::LoanOriginated {
                    loan_id,
                    customer_id,
                    principal: loan_amount,
                    annual_rate: decision.corrected_rate,
                    monthly_installment: installment,
                    timestamp: now,
                });
                Ok(OriginationOutcome {
                    customer_id,
                    approved: true,
                    loan_id: Some(loan_id),
                    corrected_rate: decision.corrected_rate,
                    monthly_installment: Some(installment),
                    reason: decision.reason,
                })
            }
            Err(err) => {
                warn!(
                    customer_id = %customer_id,
                    error = %err,
                    "loan approved but could not be persisted"
                );
                self.events.emit(Event::LoanRejected {
                    customer_id,
                    score,
                    reason: DecisionReason::PersistenceFailed,
                    timestamp: now,
                });
                Ok(rejection(
                    customer_id,
                    decision.corrected_rate,
                    DecisionReason::PersistenceFailed,
                ))
            }
        }
    }

    /// shared scoring + policy steps
    fn evaluate(
        &self,
        customer_id: CustomerId,
        requested_rate: Rate,
        exclude_loan: Option<LoanId>,
    ) -> Result<(CreditScore, PolicyDecision)> {
        let customer = self.store.customer(customer_id)?;
        let loan_count = self.store.loan_count(customer_id)?;
        let score = self.scorer.score(&customer, loan_count);
        let total_repayment = self
            .store
            .monthly_repayment_total(customer_id, exclude_loan)?;

        let decision = self.policy.decide(
            score,
            requested_rate,
            total_repayment,
            customer.monthly_salary,
        );

        Ok((score, decision))
    }
}

fn rejection(
    customer_id: CustomerId,
    corrected_rate: Rate,
    reason: DecisionReason,
) -> OriginationOutcome {
    OriginationOutcome {
        customer_id,
        approved: false,
        loan_id: None,
        corrected_rate,
        monthly_installment: None,
        reason,
    }
}

fn validate_request(loan_amount: Money, requested_rate: Rate, tenure_months: u32) -> Result<()> {
    if loan_amount <= Money::ZERO {
        return Err(OriginationError::InvalidLoanAmount {
            amount: loan_amount,
        });
    }
    if requested_rate < Rate::ZERO || requested_rate.as_percentage() > dec!(100) {
        return Err(OriginationError::InvalidInterestRate {
            rate: requested_rate,
        });
    }
    if tenure_months == 0 {
        return Err(OriginationError::InvalidTenure {
            months: tenure_months,
        });
    }
    Ok(())
}
