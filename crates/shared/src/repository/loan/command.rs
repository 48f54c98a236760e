use super::LOAN_COLUMNS;
use crate::{
    abstract_trait::loan::repository::command::LoanCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::loan::CreateLoanRequest, errors::RepositoryError,
    model::loan::LoanModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct LoanCommandRepository {
    db: ConnectionPool,
}

impl LoanCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl LoanCommandRepositoryTrait for LoanCommandRepository {
    async fn create(&self, req: &CreateLoanRequest) -> Result<LoanModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            r#"
            INSERT INTO loans (
                loan_id, customer_id, lender_id, amount, remaining_amount,
                payment_date, interest_per_day, due_date, penalty_per_day, cancelled,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, current_timestamp)
            RETURNING {LOAN_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, LoanModel>(&sql)
            .bind(&req.loan_id)
            .bind(&req.customer_id)
            .bind(&req.lender_id)
            .bind(req.amount)
            .bind(req.remaining_amount)
            .bind(req.payment_date)
            .bind(req.interest_per_day)
            .bind(req.due_date)
            .bind(req.penalty_per_day)
            .bind(req.cancelled)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create loan '{}': {err:?}", req.loan_id);
                RepositoryError::from(err)
            })?;

        info!("💾 Stored loan '{}' with id={}", result.loan_id, result.id);

        Ok(result)
    }
}
