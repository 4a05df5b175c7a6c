pub mod memory;

pub use memory::MemoryStore;

use crate::decimal::Money;
use crate::errors::Result;
use crate::records::{Customer, Loan, NewLoan};
use crate::types::{CustomerId, LoanId};

/// durable record store the origination core reads and writes
///
/// Implementations must keep `monthly_repayment_total` consistent with
/// `insert_loan` for the same customer: concurrent originations have to
/// observe each other's appends when re-reading the repayment total. The
/// core holds no locks of its own.
pub trait LoanStore {
    /// fetch a customer by id
    fn customer(&self, id: CustomerId) -> Result<Customer>;

    /// register a customer, returning the stored id
    fn insert_customer(&self, customer: Customer) -> Result<CustomerId>;

    /// number of loans on record for a customer
    fn loan_count(&self, customer_id: CustomerId) -> Result<u64>;

    /// sum of monthly installments across a customer's loans, optionally
    /// leaving one loan out when it is being re-evaluated
    fn monthly_repayment_total(
        &self,
        customer_id: CustomerId,
        exclude: Option<LoanId>,
    ) -> Result<Money>;

    /// append a loan row; the store assigns a unique id
    fn insert_loan(&self, loan: NewLoan) -> Result<LoanId>;

    /// fetch a loan by id
    fn loan(&self, id: LoanId) -> Result<Loan>;

    /// all loans on record for a customer, in insertion order
    fn loans_for_customer(&self, customer_id: CustomerId) -> Result<Vec<Loan>>;
}
