use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LoanModel {
    pub id: i64,
    pub loan_id: String,
    pub customer_id: String,
    pub lender_id: String,
    pub amount: f64,
    pub remaining_amount: f64,
    pub payment_date: NaiveDate,
    pub interest_per_day: f64,
    pub due_date: NaiveDate,
    pub penalty_per_day: f64,
    pub cancelled: bool,
    pub created_at: Option<NaiveDateTime>,
}
