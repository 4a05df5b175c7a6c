use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::{CustomerId, LoanId};

#[derive(Error, Debug)]
pub enum OriginationError {
    #[error("customer not found: {id}")]
    CustomerNotFound {
        id: CustomerId,
    },

    #[error("loan not found: {id}")]
    LoanNotFound {
        id: LoanId,
    },

    #[error("invalid loan amount: {amount}")]
    InvalidLoanAmount {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid tenure: {months} months")]
    InvalidTenure {
        months: u32,
    },

    #[error("persistence error: {message}")]
    Persistence {
        message: String,
    },

    #[error("invalid record at line {line}: {message}")]
    InvalidRecord {
        line: u64,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, OriginationError>;
