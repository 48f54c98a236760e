use crate::{errors::RepositoryError, model::loan::LoanModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynLoanQueryRepository = Arc<dyn LoanQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait LoanQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<LoanModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<LoanModel>, RepositoryError>;
    async fn find_by_loan_id(&self, loan_id: &str) -> Result<Option<LoanModel>, RepositoryError>;
    async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Vec<LoanModel>, RepositoryError>;
    async fn find_by_lender_id(&self, lender_id: &str)
    -> Result<Vec<LoanModel>, RepositoryError>;
}
