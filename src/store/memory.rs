use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{OriginationError, Result};
use crate::records::{Customer, Loan, NewLoan};
use crate::store::LoanStore;
use crate::types::{CustomerId, LoanId};

/// in-memory reference store
///
/// A single lock over both record maps keeps the repayment total and the
/// loan append mutually consistent, as the `LoanStore` contract requires.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    customers: HashMap<CustomerId, Customer>,
    loans: Vec<Loan>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// snapshot of all customers on record
    pub fn customers(&self) -> Vec<Customer> {
        let inner = self.inner.read().unwrap();
        inner.customers.values().cloned().collect()
    }
}

impl LoanStore for MemoryStore {
    fn customer(&self, id: CustomerId) -> Result<Customer> {
        let inner = self.inner.read().unwrap();
        inner
            .customers
            .get(&id)
            .cloned()
            .ok_or(OriginationError::CustomerNotFound { id })
    }

    fn insert_customer(&self, customer: Customer) -> Result<CustomerId> {
        let mut inner = self.inner.write().unwrap();
        let id = customer.id;
        inner.customers.insert(id, customer);
        Ok(id)
    }

    fn loan_count(&self, customer_id: CustomerId) -> Result<u64> {
        let inner = self.inner.read().unwrap();
        let count = inner
            .loans
            .iter()
            .filter(|loan| loan.customer_id == customer_id)
            .count();
        Ok(count as u64)
    }

    fn monthly_repayment_total(
        &self,
        customer_id: CustomerId,
        exclude: Option<LoanId>,
    ) -> Result<Money> {
        let inner = self.inner.read().unwrap();
        let total = inner
            .loans
            .iter()
            .filter(|loan| loan.customer_id == customer_id)
            .filter(|loan| Some(loan.id) != exclude)
            .fold(Money::ZERO, |acc, loan| acc + loan.monthly_installment);
        Ok(total)
    }

    fn insert_loan(&self, loan: NewLoan) -> Result<LoanId> {
        let mut inner = self.inner.write().unwrap();
        let id = Uuid::new_v4();
        inner.loans.push(Loan::from_new(id, loan));
        Ok(id)
    }

    fn loan(&self, id: LoanId) -> Result<Loan> {
        let inner = self.inner.read().unwrap();
        inner
            .loans
            .iter()
            .find(|loan| loan.id == id)
            .cloned()
            .ok_or(OriginationError::LoanNotFound { id })
    }

    fn loans_for_customer(&self, customer_id: CustomerId) -> Result<Vec<Loan>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .loans
            .iter()
            .filter(|loan| loan.customer_id == customer_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use chrono::Utc;

    fn seeded_customer(store: &MemoryStore) -> CustomerId {
        let customer = Customer::new("Meera", "Shah", "9876500003", 29, Money::from_major(60_000));
        store.insert_customer(customer).unwrap()
    }

    fn seed_loan(store: &MemoryStore, customer_id: CustomerId, installment: Money) -> LoanId {
        let loan = NewLoan::new(
            customer_id,
            Money::from_major(50_000),
            Rate::from_percentage(12),
            12,
            installment,
            Utc::now(),
        );
        store.insert_loan(loan).unwrap()
    }

    #[test]
    fn test_customer_round_trip() {
        let store = MemoryStore::new();
        let id = seeded_customer(&store);
        let fetched = store.customer(id).unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.first_name, "Meera");
    }

    #[test]
    fn test_missing_customer_is_not_found() {
        let store = MemoryStore::new();
        let err = store.customer(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, OriginationError::CustomerNotFound { .. }));
    }

    #[test]
    fn test_loan_count_scoped_to_customer() {
        let store = MemoryStore::new();
        let first = seeded_customer(&store);
        let second = seeded_customer(&store);
        seed_loan(&store, first, Money::from_major(1_000));
        seed_loan(&store, first, Money::from_major(2_000));
        seed_loan(&store, second, Money::from_major(3_000));

        assert_eq!(store.loan_count(first).unwrap(), 2);
        assert_eq!(store.loan_count(second).unwrap(), 1);
    }

    #[test]
    fn test_repayment_total_with_exclusion() {
        let store = MemoryStore::new();
        let customer_id = seeded_customer(&store);
        let excluded = seed_loan(&store, customer_id, Money::from_major(6_000));
        seed_loan(&store, customer_id, Money::from_major(1_500));

        let full = store.monthly_repayment_total(customer_id, None).unwrap();
        assert_eq!(full, Money::from_major(7_500));

        let partial = store
            .monthly_repayment_total(customer_id, Some(excluded))
            .unwrap();
        assert_eq!(partial, Money::from_major(1_500));
    }

    #[test]
    fn test_store_assigns_unique_loan_ids() {
        let store = MemoryStore::new();
        let customer_id = seeded_customer(&store);
        let a = seed_loan(&store, customer_id, Money::from_major(1_000));
        let b = seed_loan(&store, customer_id, Money::from_major(1_000));
        assert_ne!(a, b);

        let fetched = store.loan(a).unwrap();
        assert_eq!(fetched.id, a);
    }
}
