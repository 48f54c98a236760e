use crate::{
    domain::requests::loan::CreateLoanRequest, errors::RepositoryError, model::loan::LoanModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynLoanCommandRepository = Arc<dyn LoanCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait LoanCommandRepositoryTrait {
    /// Persists a loan and returns it with its store-assigned id.
    /// A duplicate `loan_id` fails with `RepositoryError::AlreadyExists`.
    async fn create(&self, req: &CreateLoanRequest) -> Result<LoanModel, RepositoryError>;
}
