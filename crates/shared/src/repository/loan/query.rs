use super::LOAN_COLUMNS;
use crate::{
    abstract_trait::loan::repository::query::LoanQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::loan::LoanModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct LoanQueryRepository {
    db: ConnectionPool,
}

impl LoanQueryRepository {
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
impl LoanQueryRepositoryTrait for LoanQueryRepository {
    async fn find_all(&self) -> Result<Vec<LoanModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {LOAN_COLUMNS} FROM loans ORDER BY id ASC");

        sqlx::query_as::<_, LoanModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch loans: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<LoanModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {LOAN_COLUMNS} FROM loans WHERE id = $1");

        sqlx::query_as::<_, LoanModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Error fetching loan by id {id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_loan_id(&self, loan_id: &str) -> Result<Option<LoanModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {LOAN_COLUMNS} FROM loans WHERE loan_id = $1");

        sqlx::query_as::<_, LoanModel>(&sql)
            .bind(loan_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Error fetching loan by loan_id '{loan_id}': {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Vec<LoanModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {LOAN_COLUMNS} FROM loans WHERE customer_id = $1 ORDER BY id ASC");

        sqlx::query_as::<_, LoanModel>(&sql)
            .bind(customer_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Error fetching loans by customer_id '{customer_id}': {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_lender_id(
        &self,
        lender_id: &str,
    ) -> Result<Vec<LoanModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {LOAN_COLUMNS} FROM loans WHERE lender_id = $1 ORDER BY id ASC");

        sqlx::query_as::<_, LoanModel>(&sql)
            .bind(lender_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Error fetching loans by lender_id '{lender_id}': {e:?}");
                RepositoryError::from(e)
            })
    }
}
