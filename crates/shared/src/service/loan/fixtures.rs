use crate::{domain::requests::loan::CreateLoanRequest, model::loan::LoanModel};
use chrono::NaiveDate;

pub(crate) const EPSILON: f64 = 1e-4;

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn loan_request(loan_id: &str, customer_id: &str, lender_id: &str) -> CreateLoanRequest {
    CreateLoanRequest {
        loan_id: loan_id.to_string(),
        customer_id: customer_id.to_string(),
        lender_id: lender_id.to_string(),
        amount: 10000.0,
        remaining_amount: 10000.0,
        payment_date: date(2024, 1, 15),
        interest_per_day: 0.01,
        due_date: date(2024, 2, 15),
        penalty_per_day: 0.01,
        cancelled: false,
    }
}

pub(crate) fn loan(
    id: i64,
    customer_id: &str,
    lender_id: &str,
    amount: f64,
    remaining_amount: f64,
    interest_per_day: f64,
    penalty_per_day: f64,
) -> LoanModel {
    LoanModel {
        id,
        loan_id: format!("L-{id}"),
        customer_id: customer_id.to_string(),
        lender_id: lender_id.to_string(),
        amount,
        remaining_amount,
        payment_date: date(2024, 1, 15),
        interest_per_day,
        due_date: date(2024, 2, 15),
        penalty_per_day,
        cancelled: false,
        created_at: None,
    }
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
