use anyhow::Result;
use shared::{
    abstract_trait::loan::{
        repository::{command::DynLoanCommandRepository, query::DynLoanQueryRepository},
        service::{
            command::DynLoanCommandService, query::DynLoanQueryService,
            stats::DynLoanStatsService,
        },
    },
    config::ConnectionPool,
    repository::loan::{command::LoanCommandRepository, query::LoanQueryRepository},
    service::loan::{
        command::LoanCommandService, query::LoanQueryService, stats::LoanStatsService,
    },
    utils::Metrics,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct LoanQueryDeps {
    pub service: DynLoanQueryService,
}

impl LoanQueryDeps {
    pub fn new(repo: DynLoanQueryRepository, metrics: Metrics) -> Self {
        let service = Arc::new(LoanQueryService::new(repo, metrics)) as DynLoanQueryService;

        Self { service }
    }
}

#[derive(Clone)]
pub struct LoanCommandDeps {
    pub service: DynLoanCommandService,
}

impl LoanCommandDeps {
    pub fn new(repo: DynLoanCommandRepository, metrics: Metrics) -> Self {
        let service = Arc::new(LoanCommandService::new(repo, metrics)) as DynLoanCommandService;

        Self { service }
    }
}

#[derive(Clone)]
pub struct LoanStatsDeps {
    pub service: DynLoanStatsService,
}

impl LoanStatsDeps {
    pub fn new(repo: DynLoanQueryRepository, metrics: Metrics) -> Self {
        let service = Arc::new(LoanStatsService::new(repo, metrics)) as DynLoanStatsService;

        Self { service }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub loan_query: LoanQueryDeps,
    pub loan_command: LoanCommandDeps,
    pub loan_stats: LoanStatsDeps,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("loan_query", &"LoanQueryService")
            .field("loan_command", &"LoanCommandService")
            .field("loan_stats", &"LoanStatsService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool, metrics: Metrics) -> Result<Self> {
        let query_repo = Arc::new(LoanQueryRepository::new(db.clone())) as DynLoanQueryRepository;
        let command_repo =
            Arc::new(LoanCommandRepository::new(db.clone())) as DynLoanCommandRepository;

        Ok(Self::from_repositories(query_repo, command_repo, metrics))
    }

    pub fn from_repositories(
        query_repo: DynLoanQueryRepository,
        command_repo: DynLoanCommandRepository,
        metrics: Metrics,
    ) -> Self {
        let loan_query = LoanQueryDeps::new(query_repo.clone(), metrics.clone());
        let loan_command = LoanCommandDeps::new(command_repo, metrics.clone());
        let loan_stats = LoanStatsDeps::new(query_repo, metrics);

        Self {
            loan_query,
            loan_command,
            loan_stats,
        }
    }
}
