use crate::{
    middleware::{path::SimplePath, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::loan::service::{
        command::DynLoanCommandService, query::DynLoanQueryService, stats::DynLoanStatsService,
    },
    domain::{
        requests::loan::CreateLoanRequest,
        responses::{LoanAggregateResponse, LoanResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/loans/all",
    tag = "Loan",
    responses(
        (status = 200, description = "List of all loans", body = Vec<LoanResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_all_loans(
    Extension(service): Extension<DynLoanQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all().await?;
    info!("Retrieved {} loans.", response.len());
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/loans/add",
    tag = "Loan",
    request_body = CreateLoanRequest,
    responses(
        (status = 201, description = "Loan created", body = LoanResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Loan ID already exists", body = ErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = ErrorResponse),
        (status = 415, description = "Body is not JSON", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_loan(
    Extension(service): Extension<DynLoanCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateLoanRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/loans/{loan_id}",
    tag = "Loan",
    params(("loan_id" = String, Path, description = "Business loan identifier")),
    responses(
        (status = 200, description = "Loan details", body = LoanResponse),
        (status = 400, description = "Malformed path", body = ErrorResponse),
        (status = 404, description = "Loan not found", body = ErrorResponse)
    )
)]
pub async fn get_loan(
    Extension(service): Extension<DynLoanQueryService>,
    SimplePath(loan_id): SimplePath<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_loan_id(&loan_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/loans/customer/{customer_id}",
    tag = "Loan",
    params(("customer_id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Loans of the customer, possibly empty", body = Vec<LoanResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_loans_by_customer(
    Extension(service): Extension<DynLoanQueryService>,
    SimplePath(customer_id): SimplePath<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_customer_id(&customer_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/loans/lender/{lender_id}",
    tag = "Loan",
    params(("lender_id" = String, Path, description = "Lender ID")),
    responses(
        (status = 200, description = "Loans of the lender, possibly empty", body = Vec<LoanResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_loans_by_lender(
    Extension(service): Extension<DynLoanQueryService>,
    SimplePath(lender_id): SimplePath<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_lender_id(&lender_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/loans/aggregate/lender",
    tag = "Loan Stats",
    responses(
        (status = 200, description = "Totals labelled Lender", body = LoanAggregateResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn aggregate_by_lender(
    Extension(service): Extension<DynLoanStatsService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.aggregate_by_lender().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/loans/aggregate/customer",
    tag = "Loan Stats",
    responses(
        (status = 200, description = "Totals labelled Customer", body = LoanAggregateResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn aggregate_by_customer(
    Extension(service): Extension<DynLoanStatsService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.aggregate_by_customer().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/loans/aggregate/interest",
    tag = "Loan Stats",
    responses(
        (status = 200, description = "Totals labelled Interest", body = LoanAggregateResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn aggregate_by_interest(
    Extension(service): Extension<DynLoanStatsService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.aggregate_by_interest().await?;
    Ok(Json(response))
}

pub fn loan_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/loans/all", get(get_all_loans))
        .route("/loans/add", post(create_loan))
        .route("/loans/{loan_id}", get(get_loan))
        .route("/loans/customer/{customer_id}", get(get_loans_by_customer))
        .route("/loans/lender/{lender_id}", get(get_loans_by_lender))
        .route("/loans/aggregate/lender", get(aggregate_by_lender))
        .route("/loans/aggregate/customer", get(aggregate_by_customer))
        .route("/loans/aggregate/interest", get(aggregate_by_interest))
        .layer(Extension(app_state.di_container.loan_query.service.clone()))
        .layer(Extension(app_state.di_container.loan_command.service.clone()))
        .layer(Extension(app_state.di_container.loan_stats.service.clone()))
}
