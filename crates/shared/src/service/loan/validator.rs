use crate::{domain::requests::loan::CreateLoanRequest, errors::ServiceError};
use chrono::NaiveDate;

pub const PAYMENT_AFTER_DUE_DATE: &str = "Payment date cannot be greater than the due date";

/// Business rules a loan must satisfy before it is handed to the store.
pub fn validate_loan(loan: &CreateLoanRequest) -> Result<(), ServiceError> {
    validate_dates(loan.payment_date, loan.due_date)
}

pub fn validate_dates(payment_date: NaiveDate, due_date: NaiveDate) -> Result<(), ServiceError> {
    if payment_date > due_date {
        return Err(ServiceError::Validation(vec![
            PAYMENT_AFTER_DUE_DATE.to_string(),
        ]));
    }

    Ok(())
}
