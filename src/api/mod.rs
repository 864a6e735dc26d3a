mod error;
mod handlers;
mod params;
mod state;
#[cfg(test)]
mod tests;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use params::{BinsParams, ClientParams, LimitParams, ListParams, MerchantParams, PageParams, SearchRequest};
pub use state::AppState;

use crate::api::handlers::{
    amount_distribution, customer_profile, delete_transaction, fraud_by_category, fraud_summary, health, list_customers,
    list_transactions, metadata, predict_fraud, recent_transactions, root, search_transactions, stats_by_chip,
    stats_daily, stats_overview, top_customers, transaction_by_id, transaction_types, transactions_by_customer,
    transactions_to_merchant
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/transactions", get(list_transactions))
        .route("/api/transactions/search", post(search_transactions))
        .route("/api/transactions/types", get(transaction_types))
        .route("/api/transactions/recent", get(recent_transactions))
        .route("/api/transactions/by-customer", get(transactions_by_customer))
        .route("/api/transactions/to-merchant", get(transactions_to_merchant))
        .route("/api/transactions/{id}", get(transaction_by_id).delete(delete_transaction))
        .route("/api/stats/overview", get(stats_overview))
        .route("/api/stats/amount-distribution", get(amount_distribution))
        .route("/api/stats/by-chip", get(stats_by_chip))
        .route("/api/stats/daily", get(stats_daily))
        .route("/api/fraud/summary", get(fraud_summary))
        .route("/api/fraud/by-merchant", get(fraud_by_category))
        .route("/api/fraud/predict", post(predict_fraud))
        .route("/api/customers", get(list_customers))
        .route("/api/customers/top", get(top_customers))
        .route("/api/customers/{customer_id}", get(customer_profile))
        .route("/api/system/health", get(health))
        .route("/api/system/metadata", get(metadata))
}

/// The full application: every route, request tracing and the shared state.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
