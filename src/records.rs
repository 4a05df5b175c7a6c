use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::types::{CustomerId, LoanId};

/// multiple of monthly salary granted as the approved credit limit
const APPROVED_LIMIT_SALARY_MULTIPLE: u32 = 36;

/// scheduled days per tenure month when deriving a loan's end date
const DAYS_PER_TENURE_MONTH: i64 = 30;

/// customer record as held by the backing store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub age: u32,
    pub monthly_salary: Money,
    // fixed at registration; later salary edits do not refresh it
    approved_limit: Money,
}

impl Customer {
    /// register a new customer, deriving the approved credit limit from salary
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        age: u32,
        monthly_salary: Money,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            age,
            monthly_salary,
            approved_limit: monthly_salary * Decimal::from(APPROVED_LIMIT_SALARY_MULTIPLE),
        }
    }

    /// approved credit limit, computed once at registration
    pub fn approved_limit(&self) -> Money {
        self.approved_limit
    }
}

/// loan record as held by the backing store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub customer_id: CustomerId,
    pub principal: Money,
    pub tenure_months: u32,
    pub annual_rate: Rate,
    pub monthly_installment: Money,
    pub emis_paid_on_time: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Loan {
    /// materialize a stored loan from an id-less row and the store-assigned id
    pub fn from_new(id: LoanId, new: NewLoan) -> Self {
        Self {
            id,
            customer_id: new.customer_id,
            principal: new.principal,
            tenure_months: new.tenure_months,
            annual_rate: new.annual_rate,
            monthly_installment: new.monthly_installment,
            emis_paid_on_time: new.emis_paid_on_time,
            start_date: new.start_date,
            end_date: new.end_date,
        }
    }
}

/// loan row awaiting insertion; the store assigns the id
///
/// end date is derived in the constructor: end = start + 30 * tenure days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLoan {
    pub customer_id: CustomerId,
    pub principal: Money,
    pub tenure_months: u32,
    pub annual_rate: Rate,
    pub monthly_installment: Money,
    pub emis_paid_on_time: u32,
    pub start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl NewLoan {
    pub fn new(
        customer_id: CustomerId,
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
        monthly_installment: Money,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            customer_id,
            principal,
            tenure_months,
            annual_rate,
            monthly_installment,
            emis_paid_on_time: 0,
            start_date,
            end_date: start_date + Duration::days(DAYS_PER_TENURE_MONTH * tenure_months as i64),
        }
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_approved_limit_is_36x_salary() {
        let customer = Customer::new("Asha", "Verma", "9876500001", 31, Money::from_major(50_000));
        assert_eq!(customer.approved_limit(), Money::from_major(1_800_000));
    }

    #[test]
    fn test_approved_limit_not_refreshed_on_salary_edit() {
        let mut customer =
            Customer::new("Asha", "Verma", "9876500001", 31, Money::from_major(50_000));
        customer.monthly_salary = Money::from_major(80_000);
        assert_eq!(customer.approved_limit(), Money::from_major(1_800_000));
    }

    #[test]
    fn test_new_loan_end_date() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let loan = NewLoan::new(
            Uuid::new_v4(),
            Money::from_major(120_000),
            Rate::from_percentage(12),
            12,
            Money::from_major(10_662),
            start,
        );
        assert_eq!(loan.end_date() - loan.start_date, Duration::days(360));
        assert_eq!(loan.emis_paid_on_time, 0);
    }
}
