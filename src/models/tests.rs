use super::{DatasetError, Page, RiskAssessment, RiskLevel, Transaction};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde_json::json;

fn create_transaction(id: &str, date: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: date.to_string(),
        client_id: 1,
        card_id: 2,
        amount: 10.5,
        use_chip: "Chip Transaction".to_string(),
        merchant_id: 3,
        merchant_city: "Austin".to_string(),
        merchant_state: "TX".to_string(),
        zip: 73301,
        mcc: 5411,
        errors: None
    }
}

#[test]
fn test_calendar_date_truncates_supported_timestamp_formats() -> Result<()> {
    let expected = NaiveDate::from_ymd_opt(2010, 1, 2).ok_or_else(|| anyhow!("invalid date"))?;

    for date in ["2010-01-02 00:01:00", "2010-01-02T23:59:59", "2010-01-02 08:30:00.250", "2010-01-02"] {
        assert_eq!(create_transaction("1", date).calendar_date(), Some(expected), "date: {date}");
    }

    Ok(())
}

#[test]
fn test_calendar_date_is_absent_for_unparseable_values() {
    assert!(create_transaction("1", "").calendar_date().is_none());
    assert!(create_transaction("1", "yesterday").calendar_date().is_none());
    assert!(create_transaction("1", "2010-13-40").calendar_date().is_none());
}

#[test]
fn test_risk_level_boundaries() {
    assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(29.9), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(30.0), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(69.9), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(70.0), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(100.0).as_str(), "high");
}

#[test]
fn test_transaction_serializes_with_source_column_names() -> Result<()> {
    let value = serde_json::to_value(create_transaction("7475327", "2010-01-01 00:01:00"))?;

    assert_eq!(value["id"], json!("7475327"));
    assert_eq!(value["use_chip"], json!("Chip Transaction"));
    assert_eq!(value["zip"], json!(73301));
    assert_eq!(value["errors"], json!(null));

    Ok(())
}

#[test]
fn test_page_and_assessment_serialize_with_api_field_names() -> Result<()> {
    let page = Page { page: 2, limit: 10, total: 11, items: vec![create_transaction("1", "2010-01-01")] };
    let value = serde_json::to_value(&page)?;

    assert_eq!(value["total"], json!(11));
    assert_eq!(value["transactions"].as_array().map(Vec::len), Some(1));

    let assessment = RiskAssessment {
        is_suspicious: false,
        score: 30.0,
        level: RiskLevel::Medium,
        reasons: vec!["Negative amount (chargeback/refund)".to_string()]
    };
    let value = serde_json::to_value(&assessment)?;

    assert_eq!(value["risk_score"], json!(30.0));
    assert_eq!(value["risk_level"], json!("medium"));

    Ok(())
}

#[test]
fn test_dataset_error_messages() {
    assert_eq!(DatasetError::not_found("data/missing.csv").to_string(), "Data file not found: data/missing.csv");
    assert_eq!(DatasetError::load_at_row(3, "bad amount").to_string(), "Error loading data: row [3]: bad amount");
    assert!(DatasetError::NotLoaded.to_string().starts_with("Data not loaded"));
}
