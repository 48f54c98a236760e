use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::loan::repository::{
        command::DynLoanCommandRepository, query::DynLoanQueryRepository,
    },
    config::ConnectionPool,
    utils::Metrics,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(db: ConnectionPool) -> Result<Self> {
        let metrics = Metrics::new();
        let registry = Self::registry(&metrics);

        let di_container = DependenciesInject::new(db, metrics)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            di_container,
            registry,
        })
    }

    pub fn from_repositories(
        query_repo: DynLoanQueryRepository,
        command_repo: DynLoanCommandRepository,
    ) -> Self {
        let metrics = Metrics::new();
        let registry = Self::registry(&metrics);

        Self {
            di_container: DependenciesInject::from_repositories(query_repo, command_repo, metrics),
            registry,
        }
    }

    fn registry(metrics: &Metrics) -> Arc<Registry> {
        let mut registry = Registry::default();
        metrics.register(&mut registry);
        Arc::new(registry)
    }
}
