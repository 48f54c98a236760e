use crate::{domain::responses::LoanAggregateResponse, errors::ServiceError};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynLoanStatsService = Arc<dyn LoanStatsServiceTrait + Send + Sync>;

#[async_trait]
pub trait LoanStatsServiceTrait {
    async fn aggregate_by_lender(&self) -> Result<LoanAggregateResponse, ServiceError>;
    async fn aggregate_by_customer(&self) -> Result<LoanAggregateResponse, ServiceError>;
    async fn aggregate_by_interest(&self) -> Result<LoanAggregateResponse, ServiceError>;
}
