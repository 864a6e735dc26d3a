use super::{load_transactions, read_transactions};
use crate::models::DatasetError;

use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Result};
use tempfile::NamedTempFile;

const HEADER: &str = "id,date,client_id,card_id,amount,use_chip,merchant_id,merchant_city,merchant_state,zip,mcc,errors";

fn create_temporary_csv(lines: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    for line in lines {
        writeln!(file, "{line}")?;
    }

    Ok(file)
}

#[test]
fn test_loader_normalizes_a_complete_file() -> Result<()> {
    let file = create_temporary_csv(&[
        HEADER,
        "7475327,2010-01-01 00:01:00,1556,2972,$-77.00,Swipe Transaction,59935,Beulah,ND,58523.0,5499,",
        "7475328,2010-01-01 00:02:00,561,4575,$14.57,Online Transaction,67570,ONLINE,,,5311,Bad PIN"
    ])?;

    let transactions = load_transactions(file.path())?;

    assert_eq!(transactions.len(), 2);

    let refund = &transactions[0];
    assert_eq!(refund.id, "7475327");
    assert_eq!(refund.client_id, 1556);
    assert_eq!(refund.amount, -77.0);
    assert_eq!(refund.use_chip, "Swipe Transaction");
    assert_eq!(refund.zip, 58523);
    assert_eq!(refund.mcc, 5499);
    assert!(refund.errors.is_none());

    let online = &transactions[1];
    assert_eq!(online.amount, 14.57);
    assert_eq!(online.merchant_state, "");
    assert_eq!(online.zip, 0);
    assert_eq!(online.errors.as_deref(), Some("Bad PIN"));

    Ok(())
}

#[test]
fn test_loader_strips_currency_symbol_from_amounts() -> Result<()> {
    let transactions = read_transactions("id,amount\n1,$100.50\n2,42\n".as_bytes())?;

    assert_eq!(transactions[0].amount, 100.50);
    assert_eq!(transactions[1].amount, 42.0);

    Ok(())
}

#[test]
fn test_loader_fills_missing_optional_columns() -> Result<()> {
    let transactions = read_transactions("id,amount\ntx_1,10\n".as_bytes())?;
    let transaction = transactions.first().ok_or_else(|| anyhow!("row missing"))?;

    assert_eq!(transaction.zip, 0);
    assert_eq!(transaction.client_id, 0);
    assert_eq!(transaction.use_chip, "");
    assert_eq!(transaction.merchant_city, "");
    assert_eq!(transaction.date, "");
    assert!(transaction.errors.is_none());

    Ok(())
}

#[test]
fn test_loader_normalizes_nan_marker_in_errors_to_absent() -> Result<()> {
    let transactions = read_transactions("id,amount,errors\n1,1,nan\n2,2,\n3,3,Insufficient Balance\n".as_bytes())?;

    assert!(transactions[0].errors.is_none());
    assert!(transactions[1].errors.is_none());
    assert_eq!(transactions[2].errors.as_deref(), Some("Insufficient Balance"));

    Ok(())
}

#[test]
fn test_loader_preserves_file_order() -> Result<()> {
    let transactions = read_transactions("id,amount\nc,1\na,2\nb,3\n".as_bytes())?;
    let ids: Vec<&str> = transactions.iter().map(|transaction| transaction.id.as_str()).collect();

    assert_eq!(ids, vec!["c", "a", "b"]);

    Ok(())
}

#[test]
fn test_loader_accepts_header_only_file() -> Result<()> {
    assert!(read_transactions(format!("{HEADER}\n").as_bytes())?.is_empty());

    Ok(())
}

#[test]
fn test_loader_fails_for_missing_file() {
    let result = load_transactions(Path::new("does/not/exist.csv"));

    assert!(matches!(result, Err(DatasetError::NotFound { .. })));
}

#[test]
fn test_loader_fails_for_non_numeric_amount() {
    let result = read_transactions("id,amount\n1,$10\n2,$ten\n".as_bytes());

    assert!(matches!(&result, Err(DatasetError::Load { reason }) if reason.starts_with("row [3]")));
}

#[test]
fn test_loader_fails_for_missing_mandatory_column() {
    assert!(matches!(read_transactions("id,date\n1,2019-01-01\n".as_bytes()), Err(DatasetError::Load { .. })));
    assert!(matches!(read_transactions("amount,date\n1,2019-01-01\n".as_bytes()), Err(DatasetError::Load { .. })));
}

#[test]
fn test_loader_fails_for_malformed_row_structure() {
    let result = read_transactions("id,amount,mcc\n1,10,5411\n2,20\n".as_bytes());

    assert!(matches!(result, Err(DatasetError::Load { .. })));
}

#[test]
fn test_loader_fails_for_uncoercible_integers() {
    assert!(matches!(read_transactions("id,amount,mcc\n1,10,abc\n".as_bytes()), Err(DatasetError::Load { .. })));
    assert!(matches!(read_transactions("id,amount,client_id\n1,10,\n".as_bytes()), Err(DatasetError::Load { .. })));
    assert!(matches!(read_transactions("id,amount,zip\n1,10,-5\n".as_bytes()), Err(DatasetError::Load { .. })));
    assert!(matches!(read_transactions("id,amount,zip\n1,10,123.5\n".as_bytes()), Err(DatasetError::Load { .. })));
}

#[test]
fn test_loader_rejects_duplicate_and_empty_ids() {
    let duplicate = read_transactions("id,amount\n1,10\n2,20\n1,30\n".as_bytes());

    assert!(matches!(&duplicate, Err(DatasetError::Load { reason }) if reason.contains("Duplicate transaction id [1]")));
    assert!(matches!(read_transactions("id,amount\n,10\n".as_bytes()), Err(DatasetError::Load { .. })));
}
