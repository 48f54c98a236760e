use crate::{
    abstract_trait::loan::repository::{
        command::LoanCommandRepositoryTrait, query::LoanQueryRepositoryTrait,
    },
    domain::requests::loan::CreateLoanRequest,
    errors::RepositoryError,
    model::loan::LoanModel,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};
use tokio::sync::RwLock;

/// Process-local loan store with the same contract as the Postgres repositories.
/// Clones share storage, so one instance can back both the query and command sides.
#[derive(Clone, Default)]
pub struct LoanMemoryRepository {
    loans: Arc<RwLock<Vec<LoanModel>>>,
    next_id: Arc<AtomicI64>,
}

impl LoanMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.loans.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.loans.read().await.is_empty()
    }

    async fn filter<F>(&self, predicate: F) -> Vec<LoanModel>
    where
        F: Fn(&LoanModel) -> bool + Send,
    {
        self.loans
            .read()
            .await
            .iter()
            .filter(|loan| predicate(loan))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl LoanQueryRepositoryTrait for LoanMemoryRepository {
    async fn find_all(&self) -> Result<Vec<LoanModel>, RepositoryError> {
        Ok(self.loans.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<LoanModel>, RepositoryError> {
        Ok(self.filter(|loan| loan.id == id).await.into_iter().next())
    }

    async fn find_by_loan_id(&self, loan_id: &str) -> Result<Option<LoanModel>, RepositoryError> {
        Ok(self
            .filter(|loan| loan.loan_id == loan_id)
            .await
            .into_iter()
            .next())
    }

    async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Vec<LoanModel>, RepositoryError> {
        Ok(self.filter(|loan| loan.customer_id == customer_id).await)
    }

    async fn find_by_lender_id(
        &self,
        lender_id: &str,
    ) -> Result<Vec<LoanModel>, RepositoryError> {
        Ok(self.filter(|loan| loan.lender_id == lender_id).await)
    }
}

#[async_trait]
impl LoanCommandRepositoryTrait for LoanMemoryRepository {
    async fn create(&self, req: &CreateLoanRequest) -> Result<LoanModel, RepositoryError> {
        let mut loans = self.loans.write().await;

        if loans.iter().any(|loan| loan.loan_id == req.loan_id) {
            return Err(RepositoryError::AlreadyExists(format!(
                "Loan with Loan ID {} already exists",
                req.loan_id
            )));
        }

        let loan = LoanModel {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            loan_id: req.loan_id.clone(),
            customer_id: req.customer_id.clone(),
            lender_id: req.lender_id.clone(),
            amount: req.amount,
            remaining_amount: req.remaining_amount,
            payment_date: req.payment_date,
            interest_per_day: req.interest_per_day,
            due_date: req.due_date,
            penalty_per_day: req.penalty_per_day,
            cancelled: req.cancelled,
            created_at: Some(Utc::now().naive_utc()),
        };

        loans.push(loan.clone());

        Ok(loan)
    }
}
