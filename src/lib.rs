pub mod amortization;
pub mod batch;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod origination;
pub mod policy;
pub mod records;
pub mod scoring;
pub mod store;
pub mod types;

// re-export key types
pub use amortization::monthly_installment;
pub use batch::{BatchLoader, BatchSummary};
pub use config::{OriginationConfig, PolicyConfig, ScoringConfig};
pub use decimal::{Money, Rate};
pub use errors::{OriginationError, Result};
pub use events::{Event, EventStore};
pub use origination::{EligibilityReport, LoanOriginationService, OriginationOutcome};
pub use policy::{EligibilityPolicy, PolicyDecision};
pub use records::{Customer, Loan, NewLoan};
pub use scoring::{CreditScorer, LoanCountScorer};
pub use store::{LoanStore, MemoryStore};
pub use types::{CreditScore, CustomerId, DecisionReason, LoanId};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
