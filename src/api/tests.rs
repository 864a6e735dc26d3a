use super::handlers::{
    amount_distribution, customer_profile, delete_transaction, health, list_transactions, predict_fraud,
    recent_transactions, search_transactions, stats_overview, top_customers, transaction_by_id, transactions_by_customer
};
use super::{ApiError, AppState, BinsParams, ClientParams, LimitParams, ListParams, PageParams, SearchRequest};

use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::body::to_bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::Value;

use crate::engine::BankingEngine;
use crate::models::{DatasetError, RiskLevel, Transaction};
use crate::risk::RiskInput;
use crate::storage::{DatasetStore, Storage};

fn create_transaction(id: &str, client_id: u64, amount: f64, use_chip: &str, merchant_state: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: format!("2019-03-{:02} 10:00:00", client_id % 28 + 1),
        client_id,
        card_id: 1,
        amount,
        use_chip: use_chip.to_string(),
        merchant_id: client_id * 10,
        merchant_city: "Austin".to_string(),
        merchant_state: merchant_state.to_string(),
        zip: 73301,
        mcc: 5411,
        errors: None
    }
}

fn create_state(loaded: bool) -> AppState {
    let storage = Arc::new(DatasetStore::new());

    if loaded {
        storage.load(vec![
            create_transaction("tx_1", 1, 120.0, "Swipe Transaction", "TX"),
            create_transaction("tx_2", 2, -80.0, "Chip Transaction", "CA"),
            create_transaction("tx_3", 1, 7500.0, "Online Transaction", ""),
            create_transaction("tx_4", 3, 40.0, "Swipe Transaction", "TX")
        ]);
    }

    AppState::new(Arc::new(BankingEngine::new(storage)))
}

async fn error_body(error: ApiError) -> Result<(StatusCode, Value)> {
    let response = error.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;

    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn test_list_transactions_filters_and_reports_page() -> Result<()> {
    let params = ListParams {
        use_chip: Some("Swipe Transaction".to_string()),
        ..ListParams::default()
    };

    let Json(page) = list_transactions(State(create_state(true)), Ok(Query(params))).await?;

    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 100);
    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_list_transactions_skip_maps_to_page() -> Result<()> {
    let params = ListParams { skip: 2, limit: 2, ..ListParams::default() };

    let Json(page) = list_transactions(State(create_state(true)), Ok(Query(params))).await?;

    assert_eq!(page.page, 2);
    assert_eq!(page.total, 4);
    assert_eq!(page.items.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(), vec!["tx_3", "tx_4"]);

    Ok(())
}

#[tokio::test]
async fn test_out_of_range_limits_are_unprocessable() -> Result<()> {
    let state = create_state(true);

    let listing = list_transactions(State(state.clone()), Ok(Query(ListParams { limit: 0, ..ListParams::default() }))).await;
    let recent = recent_transactions(State(state.clone()), Ok(Query(LimitParams { limit: 101 }))).await;
    let histogram = amount_distribution(State(state.clone()), Ok(Query(BinsParams { bins: 4 }))).await;
    let by_customer = transactions_by_customer(State(state), Ok(Query(ClientParams { client_id: 1, limit: 1001 }))).await;

    for error in [listing.err(), recent.err(), histogram.err(), by_customer.err()] {
        let error = error.ok_or_else(|| anyhow!("expected a validation error"))?;
        assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    Ok(())
}

#[tokio::test]
async fn test_search_rejects_inverted_amount_range() -> Result<()> {
    let request = SearchRequest {
        amount_range: Some(vec![500.0, 100.0]),
        ..SearchRequest::default()
    };

    let error = search_transactions(State(create_state(true)), Ok(Query(PageParams::default())), Ok(Json(request)))
        .await
        .err()
        .ok_or_else(|| anyhow!("inverted range accepted"))?;

    let (status, body) = error_body(error).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "ValidationError");
    assert!(body["detail"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_search_combines_criteria() -> Result<()> {
    let request = SearchRequest {
        client_id: Some(1),
        amount_range: Some(vec![0.0, 1000.0]),
        ..SearchRequest::default()
    };

    let Json(page) = search_transactions(State(create_state(true)), Ok(Query(PageParams::default())), Ok(Json(request))).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, "tx_1");

    Ok(())
}

#[tokio::test]
async fn test_transaction_lookup_and_delete_report_absence() -> Result<()> {
    let state = create_state(true);

    let Json(found) = transaction_by_id(State(state.clone()), Path("tx_2".to_string())).await?;
    assert_eq!(found.amount, -80.0);

    let missing = transaction_by_id(State(state.clone()), Path("tx_404".to_string())).await.err()
        .ok_or_else(|| anyhow!("missing id found"))?;
    let (status, body) = error_body(missing).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Transaction not found");

    let Json(deleted) = delete_transaction(State(state.clone()), Path("tx_2".to_string())).await?;
    assert_eq!(deleted.id, "tx_2");
    assert!(transaction_by_id(State(state.clone()), Path("tx_2".to_string())).await.is_ok());

    let not_deleted = delete_transaction(State(state), Path("tx_404".to_string())).await.err();
    assert_eq!(not_deleted.map(|error| error.status()), Some(StatusCode::NOT_FOUND));

    Ok(())
}

#[tokio::test]
async fn test_reports_without_dataset_are_unavailable() -> Result<()> {
    let error = stats_overview(State(create_state(false))).await.err()
        .ok_or_else(|| anyhow!("overview served without a dataset"))?;

    assert!(matches!(error, ApiError::Dataset(DatasetError::NotLoaded)));

    let (status, body) = error_body(error).await?;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "ServiceUnavailable");
    assert!(body.get("detail").is_none());

    Ok(())
}

#[tokio::test]
async fn test_load_failures_are_internal_errors() -> Result<()> {
    let (status, body) = error_body(ApiError::Dataset(DatasetError::load("bad row"))).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "InternalServerError");
    assert_eq!(body["detail"], "Error loading data: bad row");

    Ok(())
}

#[tokio::test]
async fn test_predict_works_without_dataset() -> Result<()> {
    let input = RiskInput::new(6000.0, 6011)
        .with_use_chip("Online Transaction")
        .with_merchant_state("CA");

    let Json(assessment) = predict_fraud(State(create_state(false)), Ok(Json(input))).await?;

    assert_eq!(assessment.score, 70.0);
    assert_eq!(assessment.level, RiskLevel::High);
    assert!(assessment.is_suspicious);
    assert_eq!(assessment.reasons.len(), 4);

    Ok(())
}

#[tokio::test]
async fn test_customer_routes() -> Result<()> {
    let state = create_state(true);

    let Json(profile) = customer_profile(State(state.clone()), Ok(Path(1))).await?;
    assert_eq!(profile.transactions_count, 2);
    assert_eq!(profile.total_amount, 7620.0);

    let missing = customer_profile(State(state.clone()), Ok(Path(99))).await.err();
    assert_eq!(missing.map(|error| error.status()), Some(StatusCode::NOT_FOUND));

    let Json(top) = top_customers(State(state), Ok(Query(LimitParams { limit: 2 }))).await?;
    assert_eq!(top.iter().map(|customer| customer.customer_id).collect::<Vec<_>>(), vec![1, 2]);

    Ok(())
}

#[tokio::test]
async fn test_health_reflects_dataset_state() -> Result<()> {
    let Json(degraded) = health(State(create_state(false))).await;
    assert_eq!(degraded.status, "degraded");
    assert!(!degraded.dataset_loaded);
    assert_eq!(degraded.total_records, 0);
    assert_eq!(degraded.uptime, "0h 0min");

    let Json(ok) = health(State(create_state(true))).await;
    assert_eq!(ok.status, "ok");
    assert_eq!(ok.total_records, 4);

    Ok(())
}
