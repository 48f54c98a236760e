use crate::model::loan::LoanModel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    pub loan_id: String,
    pub customer_id: String,
    pub lender_id: String,
    pub amount: f64,
    pub remaining_amount: f64,
    #[schema(value_type = String, format = Date)]
    pub payment_date: NaiveDate,
    pub interest_per_day: f64,
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
    pub penalty_per_day: f64,
    pub cancelled: bool,
}

// model to response
impl From<LoanModel> for LoanResponse {
    fn from(value: LoanModel) -> Self {
        LoanResponse {
            loan_id: value.loan_id,
            customer_id: value.customer_id,
            lender_id: value.lender_id,
            amount: value.amount,
            remaining_amount: value.remaining_amount,
            payment_date: value.payment_date,
            interest_per_day: value.interest_per_day,
            due_date: value.due_date,
            penalty_per_day: value.penalty_per_day,
            cancelled: value.cancelled,
        }
    }
}
