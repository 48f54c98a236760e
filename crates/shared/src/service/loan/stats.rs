use crate::{
    abstract_trait::loan::{
        repository::query::DynLoanQueryRepository, service::stats::LoanStatsServiceTrait,
    },
    domain::responses::LoanAggregateResponse,
    errors::ServiceError,
    service::loan::aggregate::GroupBy,
    utils::{Method, Metrics, Status},
};
use anyhow::Result;
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info};

/// Aggregates always re-read the full loan collection; nothing is cached between calls.
pub struct LoanStatsService {
    query: DynLoanQueryRepository,
    metrics: Metrics,
}

impl LoanStatsService {
    pub fn new(query: DynLoanQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
    }

    async fn aggregate(&self, group_by: GroupBy) -> Result<LoanAggregateResponse, ServiceError> {
        info!("📊 Aggregating loans by {group_by}");
        let start = Instant::now();

        let result = match self.query.find_all().await {
            Ok(loans) => {
                let aggregate = group_by.aggregate(&loans);
                info!(
                    "✅ Aggregated {} loans by {group_by}: remaining={}, interest={}, penalty={}",
                    loans.len(),
                    aggregate.total_remaining_amount,
                    aggregate.total_interest,
                    aggregate.total_penalty
                );
                Ok(aggregate)
            }
            Err(e) => {
                error!("❌ Failed to load loans for aggregation by {group_by}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        };

        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics
            .record(Method::Get, status, start.elapsed().as_secs_f64());

        result
    }
}

#[async_trait]
impl LoanStatsServiceTrait for LoanStatsService {
    async fn aggregate_by_lender(&self) -> Result<LoanAggregateResponse, ServiceError> {
        self.aggregate(GroupBy::Lender).await
    }

    async fn aggregate_by_customer(&self) -> Result<LoanAggregateResponse, ServiceError> {
        self.aggregate(GroupBy::Customer).await
    }

    async fn aggregate_by_interest(&self) -> Result<LoanAggregateResponse, ServiceError> {
        self.aggregate(GroupBy::Interest).await
    }
}
