use crate::{domain::responses::LoanResponse, errors::ServiceError};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynLoanQueryService = Arc<dyn LoanQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait LoanQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<LoanResponse>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<LoanResponse, ServiceError>;
    async fn find_by_loan_id(&self, loan_id: &str) -> Result<LoanResponse, ServiceError>;
    async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Vec<LoanResponse>, ServiceError>;
    async fn find_by_lender_id(&self, lender_id: &str) -> Result<Vec<LoanResponse>, ServiceError>;
}
