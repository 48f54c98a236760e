mod loan;
mod metrics;

#[cfg(test)]
mod tests;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{Json, Router, extract::DefaultBodyLimit, routing::get};
use shared::{
    domain::{
        requests::loan::CreateLoanRequest,
        responses::{LoanAggregateResponse, LoanResponse},
    },
    errors::ErrorResponse,
    utils::shutdown_signal,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

pub use self::loan::loan_routes;
pub use self::metrics::metrics_routes;

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        loan::get_all_loans,
        loan::create_loan,
        loan::get_loan,
        loan::get_loans_by_customer,
        loan::get_loans_by_lender,
        loan::aggregate_by_lender,
        loan::aggregate_by_customer,
        loan::aggregate_by_interest,
    ),
    components(schemas(CreateLoanRequest, LoanResponse, LoanAggregateResponse, ErrorResponse)),
    tags(
        (name = "Loan", description = "Loan creation and lookup endpoints"),
        (name = "Loan Stats", description = "Aggregated loan totals"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(loan_routes(shared_state.clone()))
            .merge(metrics_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.route(
            "/api-docs/openapi.json",
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📚 OpenAPI document at http://localhost:{port}/api-docs/openapi.json");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        Ok(())
    }
}
