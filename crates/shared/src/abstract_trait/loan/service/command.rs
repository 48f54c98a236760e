use crate::{
    domain::{requests::loan::CreateLoanRequest, responses::LoanResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynLoanCommandService = Arc<dyn LoanCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait LoanCommandServiceTrait {
    async fn create(&self, req: &CreateLoanRequest) -> Result<LoanResponse, ServiceError>;
}
