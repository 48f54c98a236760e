pub mod command;
pub mod memory;
pub mod query;

const LOAN_COLUMNS: &str = "id, loan_id, customer_id, lender_id, amount, remaining_amount, \
     payment_date, interest_per_day, due_date, penalty_per_day, cancelled, created_at";
