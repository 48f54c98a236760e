use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanAggregateResponse {
    /// Grouping dimension: `Lender`, `Customer` or `Interest`.
    pub group_by: String,
    pub total_remaining_amount: f64,
    pub total_interest: f64,
    pub total_penalty: f64,
}
