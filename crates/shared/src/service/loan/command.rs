use crate::{
    abstract_trait::loan::{
        repository::command::DynLoanCommandRepository, service::command::LoanCommandServiceTrait,
    },
    domain::{requests::loan::CreateLoanRequest, responses::LoanResponse},
    errors::ServiceError,
    service::loan::validator::validate_loan,
    utils::{Method, Metrics, Status},
};
use anyhow::Result;
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info};

pub struct LoanCommandService {
    command: DynLoanCommandRepository,
    metrics: Metrics,
}

impl LoanCommandService {
    pub fn new(command: DynLoanCommandRepository, metrics: Metrics) -> Self {
        Self { command, metrics }
    }
}

#[async_trait]
impl LoanCommandServiceTrait for LoanCommandService {
    async fn create(&self, req: &CreateLoanRequest) -> Result<LoanResponse, ServiceError> {
        info!("🆕 Creating loan with loan ID: {}", req.loan_id);
        let start = Instant::now();

        // nothing reaches the store unless the loan passes validation
        let result = match validate_loan(req) {
            Err(e) => {
                error!(
                    "📝 Payment date {} is after due date {} for loan {}",
                    req.payment_date, req.due_date, req.loan_id
                );
                Err(e)
            }
            Ok(()) => match self.command.create(req).await {
                Ok(loan) => {
                    info!("✅ Loan added successfully with id={}", loan.id);
                    Ok(LoanResponse::from(loan))
                }
                Err(e) => {
                    error!("💥 Failed to create loan {}: {e:?}", req.loan_id);
                    Err(ServiceError::Repo(e))
                }
            },
        };

        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics
            .record(Method::Post, status, start.elapsed().as_secs_f64());

        result
    }
}
