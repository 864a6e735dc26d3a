use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Serialize;
use tracing::info;

use crate::api::params::{BinsParams, ClientParams, LimitParams, ListParams, MerchantParams, PageParams, SearchRequest};
use crate::api::{ApiError, AppState};
use crate::config::{API_TITLE, API_VERSION};
use crate::models::{
    AmountDistribution, CategoryStats, Customer, CustomerPage, DailyStats, FraudByCategory, FraudSummary, Page,
    RiskAssessment, StatsOverview, TopCustomer, Transaction
};
use crate::risk::RiskInput;
use crate::types::ClientId;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub version: &'static str,
    pub health: &'static str
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub message: &'static str,
    pub id: String
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub uptime: String,
    pub dataset_loaded: bool,
    pub total_records: usize
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub version: &'static str,
    pub last_update: String,
    pub api_name: &'static str
}

pub async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: API_TITLE,
        version: API_VERSION,
        health: "/api/system/health"
    })
}

pub async fn list_transactions(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>
) -> ApiResult<Page<Transaction>> {
    let Query(params) = params?;
    let page = state.engine.query_transactions(&params.filter(), params.pagination()?)?;

    Ok(Json(page))
}

pub async fn search_transactions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
    body: Result<Json<SearchRequest>, JsonRejection>
) -> ApiResult<Page<Transaction>> {
    let Query(params) = params?;
    let Json(request) = body?;
    let page = state.engine.search_transactions(&request.filter()?, params.pagination()?)?;

    Ok(Json(page))
}

pub async fn transaction_types(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    Ok(Json(state.engine.distinct_categories()?))
}

pub async fn recent_transactions(
    State(state): State<AppState>,
    params: Result<Query<LimitParams>, QueryRejection>
) -> ApiResult<Vec<Transaction>> {
    let Query(params) = params?;
    Ok(Json(state.engine.recent(params.validated()?)?))
}

pub async fn transactions_by_customer(
    State(state): State<AppState>,
    params: Result<Query<ClientParams>, QueryRejection>
) -> ApiResult<Vec<Transaction>> {
    let Query(params) = params?;
    Ok(Json(state.engine.by_client(params.client_id, params.validated_limit()?)?))
}

pub async fn transactions_to_merchant(
    State(state): State<AppState>,
    params: Result<Query<MerchantParams>, QueryRejection>
) -> ApiResult<Vec<Transaction>> {
    let Query(params) = params?;
    Ok(Json(state.engine.by_merchant(params.merchant_id, params.validated_limit()?)?))
}

pub async fn transaction_by_id(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Transaction> {
    state.engine.transaction_by_id(&id)?
        .map(Json)
        .ok_or(ApiError::NotFound("Transaction"))
}

pub async fn delete_transaction(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Deleted> {
    if !state.engine.delete_by_id(&id)? {
        return Err(ApiError::NotFound("Transaction"));
    }

    Ok(Json(Deleted { message: "Transaction deleted successfully", id }))
}

pub async fn stats_overview(State(state): State<AppState>) -> ApiResult<StatsOverview> {
    Ok(Json(state.engine.stats_overview()?))
}

pub async fn amount_distribution(
    State(state): State<AppState>,
    params: Result<Query<BinsParams>, QueryRejection>
) -> ApiResult<AmountDistribution> {
    let Query(params) = params?;
    Ok(Json(state.engine.amount_histogram(params.validated()?)?))
}

pub async fn stats_by_chip(State(state): State<AppState>) -> ApiResult<Vec<CategoryStats>> {
    Ok(Json(state.engine.stats_by_category()?))
}

pub async fn stats_daily(State(state): State<AppState>) -> ApiResult<Vec<DailyStats>> {
    Ok(Json(state.engine.daily_stats()?))
}

pub async fn fraud_summary(State(state): State<AppState>) -> ApiResult<FraudSummary> {
    Ok(Json(state.engine.fraud_summary()?))
}

pub async fn fraud_by_category(State(state): State<AppState>) -> ApiResult<Vec<FraudByCategory>> {
    Ok(Json(state.engine.fraud_by_category()?))
}

pub async fn predict_fraud(
    State(state): State<AppState>,
    body: Result<Json<RiskInput>, JsonRejection>
) -> ApiResult<RiskAssessment> {
    let Json(input) = body?;
    let assessment = state.engine.predict_fraud(&input);

    info!("Fraud prediction for amount [{}]: score [{}], suspicious [{}]",
        input.amount, assessment.score, assessment.is_suspicious);

    Ok(Json(assessment))
}

pub async fn list_customers(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>
) -> ApiResult<CustomerPage> {
    let Query(params) = params?;
    Ok(Json(state.engine.list_customers(params.pagination()?)?))
}

pub async fn top_customers(
    State(state): State<AppState>,
    params: Result<Query<LimitParams>, QueryRejection>
) -> ApiResult<Vec<TopCustomer>> {
    let Query(params) = params?;
    Ok(Json(state.engine.top_customers(params.validated()?)?))
}

pub async fn customer_profile(
    State(state): State<AppState>,
    customer_id: Result<Path<ClientId>, PathRejection>
) -> ApiResult<Customer> {
    let Path(customer_id) = customer_id?;

    state.engine.customer_profile(customer_id)?
        .map(Json)
        .ok_or(ApiError::NotFound("Customer"))
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let uptime = state.started.elapsed().as_secs();
    let dataset_loaded = state.engine.is_loaded();

    Json(Health {
        status: if dataset_loaded { "ok" } else { "degraded" },
        uptime: format!("{}h {}min", uptime / 3600, uptime % 3600 / 60),
        dataset_loaded,
        total_records: state.engine.count()
    })
}

pub async fn metadata() -> Json<Metadata> {
    Json(Metadata {
        version: API_VERSION,
        last_update: chrono::Utc::now().to_rfc3339(),
        api_name: API_TITLE
    })
}
