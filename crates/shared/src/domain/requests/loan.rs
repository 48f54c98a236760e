use crate::utils::deserialize_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    #[validate(length(min = 1, message = "Loan ID is required"))]
    pub loan_id: String,

    #[validate(length(min = 1, message = "Customer ID is required"))]
    pub customer_id: String,

    #[validate(length(min = 1, message = "Lender ID is required"))]
    pub lender_id: String,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,

    #[validate(range(min = 0.0, message = "Remaining amount must not be negative"))]
    pub remaining_amount: f64,

    #[serde(deserialize_with = "deserialize_date")]
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub payment_date: NaiveDate,

    #[validate(range(min = 0.0, message = "Interest per day must not be negative"))]
    pub interest_per_day: f64,

    #[serde(deserialize_with = "deserialize_date")]
    #[schema(value_type = String, format = Date, example = "2024-02-15")]
    pub due_date: NaiveDate,

    #[validate(range(min = 0.0, message = "Penalty per day must not be negative"))]
    pub penalty_per_day: f64,

    #[serde(default)]
    pub cancelled: bool,
}
