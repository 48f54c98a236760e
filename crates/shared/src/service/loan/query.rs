use crate::{
    abstract_trait::loan::{
        repository::query::DynLoanQueryRepository, service::query::LoanQueryServiceTrait,
    },
    domain::responses::LoanResponse,
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use anyhow::Result;
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info, warn};

pub struct LoanQueryService {
    query: DynLoanQueryRepository,
    metrics: Metrics,
}

impl LoanQueryService {
    pub fn new(query: DynLoanQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
    }

    fn complete<T>(&self, start: Instant, result: &Result<T, ServiceError>) {
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics
            .record(Method::Get, status, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl LoanQueryServiceTrait for LoanQueryService {
    async fn find_all(&self) -> Result<Vec<LoanResponse>, ServiceError> {
        info!("📋 Retrieving all loans");
        let start = Instant::now();

        let result = match self.query.find_all().await {
            Ok(loans) => {
                info!("✅ Found {} loans", loans.len());
                Ok(loans.into_iter().map(LoanResponse::from).collect())
            }
            Err(e) => {
                error!("❌ Failed to fetch all loans: {e:?}");
                Err(ServiceError::Repo(e))
            }
        };

        self.complete(start, &result);
        result
    }

    async fn find_by_id(&self, id: i64) -> Result<LoanResponse, ServiceError> {
        info!("🔍 Retrieving loan by id={id}");
        let start = Instant::now();

        let result = match self.query.find_by_id(id).await {
            Ok(Some(loan)) => Ok(LoanResponse::from(loan)),
            Ok(None) => {
                warn!("⚠️ Loan with id={id} not found");
                Err(ServiceError::NotFound(format!("Loan with id {id} not found")))
            }
            Err(e) => {
                error!("❌ Failed to fetch loan by id={id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        };

        self.complete(start, &result);
        result
    }

    async fn find_by_loan_id(&self, loan_id: &str) -> Result<LoanResponse, ServiceError> {
        info!("🔍 Retrieving loan by loan ID: {loan_id}");
        let start = Instant::now();

        let result = match self.query.find_by_loan_id(loan_id).await {
            Ok(Some(loan)) => {
                info!("✅ Retrieved loan details for ID {loan_id}");
                Ok(LoanResponse::from(loan))
            }
            Ok(None) => {
                warn!("⚠️ Loan with ID {loan_id} not found");
                Err(ServiceError::NotFound(format!(
                    "Loan with Loan ID {loan_id} not found"
                )))
            }
            Err(e) => {
                error!("❌ Failed to fetch loan by loan ID {loan_id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        };

        self.complete(start, &result);
        result
    }

    async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Vec<LoanResponse>, ServiceError> {
        info!("👤 Retrieving loans by customer ID: {customer_id}");
        let start = Instant::now();

        let result = match self.query.find_by_customer_id(customer_id).await {
            Ok(loans) => {
                info!("✅ Retrieved {} loans for customer {customer_id}", loans.len());
                Ok(loans.into_iter().map(LoanResponse::from).collect())
            }
            Err(e) => {
                error!("❌ Failed to fetch loans for customer {customer_id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        };

        self.complete(start, &result);
        result
    }

    async fn find_by_lender_id(&self, lender_id: &str) -> Result<Vec<LoanResponse>, ServiceError> {
        info!("🏦 Retrieving loans by lender ID: {lender_id}");
        let start = Instant::now();

        let result = match self.query.find_by_lender_id(lender_id).await {
            Ok(loans) => {
                info!("✅ Retrieved {} loans for lender {lender_id}", loans.len());
                Ok(loans.into_iter().map(LoanResponse::from).collect())
            }
            Err(e) => {
                error!("❌ Failed to fetch loans for lender {lender_id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        };

        self.complete(start, &result);
        result
    }
}
