use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::{debug, info};

use crate::loader::errors::FieldError;
use crate::models::{DatasetError, Transaction};
use crate::types::parse_amount;

const NAN_MARKER: &str = "nan";

/// A row exactly as it appears in the CSV file, before any coercion.
///
/// Only `id` and `amount` are mandatory columns, a missing mandatory column fails
/// deserialization of the first row.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: String,
    amount: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    card_id: Option<String>,
    #[serde(default)]
    use_chip: Option<String>,
    #[serde(default)]
    merchant_id: Option<String>,
    #[serde(default)]
    merchant_city: Option<String>,
    #[serde(default)]
    merchant_state: Option<String>,
    #[serde(default)]
    zip: Option<String>,
    #[serde(default)]
    mcc: Option<String>,
    #[serde(default)]
    errors: Option<String>
}

/// Which optional integer columns the header declares.
///
/// A declared column must hold a value on every row, an undeclared one defaults to 0.
struct IntegerColumns {
    client_id: bool,
    card_id: bool,
    merchant_id: bool,
    mcc: bool
}

impl IntegerColumns {
    fn from_headers(headers: &StringRecord) -> Self {
        let has = |name: &str| headers.iter().any(|header| header == name);

        Self {
            client_id: has("client_id"),
            card_id: has("card_id"),
            merchant_id: has("merchant_id"),
            mcc: has("mcc")
        }
    }
}

/// Reads and normalizes every transaction of the CSV file at `path`.
///
/// # Errors
/// - `DatasetError::NotFound` if nothing exists at `path`.
/// - `DatasetError::Load` on unreadable files, malformed rows, uncoercible values or
///   duplicate ids. No rows are returned in that case.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::not_found(path));
    }

    info!("Loading data from {}", path.display());

    let file = File::open(path).map_err(DatasetError::load)?;
    let transactions = read_transactions(BufReader::new(file))?;

    info!("Data loaded successfully: {} transactions", transactions.len());

    Ok(transactions)
}

/// Normalizes CSV content from any reader, see [`load_transactions`].
pub fn read_transactions<R: Read>(source: R) -> Result<Vec<Transaction>, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(source);

    let columns = IntegerColumns::from_headers(reader.headers().map_err(DatasetError::load)?);
    let mut seen_ids = HashSet::new();
    let mut transactions = Vec::new();

    for (index, result) in reader.deserialize::<RawRecord>().enumerate() {
        //NOTE: Line 1 is the header
        let line = index + 2;
        let record = result.map_err(|error| DatasetError::load_at_row(line, error))?;
        let transaction = normalize(record, &columns).map_err(|error| DatasetError::load_at_row(line, error))?;

        if !seen_ids.insert(transaction.id.clone()) {
            return Err(DatasetError::load_at_row(line, FieldError::DuplicateId(transaction.id)));
        }

        transactions.push(transaction);
    }

    debug!("Normalized [{}] rows", transactions.len());

    Ok(transactions)
}

fn normalize(record: RawRecord, columns: &IntegerColumns) -> Result<Transaction, FieldError> {
    if record.id.is_empty() {
        return Err(FieldError::EmptyId);
    }

    Ok(Transaction {
        id: record.id,
        date: record.date.unwrap_or_default(),
        client_id: required_integer("client_id", record.client_id, columns.client_id)?,
        card_id: required_integer("card_id", record.card_id, columns.card_id)?,
        amount: parse_amount(&record.amount)?,
        use_chip: record.use_chip.unwrap_or_default(),
        merchant_id: required_integer("merchant_id", record.merchant_id, columns.merchant_id)?,
        merchant_city: record.merchant_city.unwrap_or_default(),
        merchant_state: record.merchant_state.unwrap_or_default(),
        zip: record.zip.map_or(Ok(0), |value| parse_integer("zip", &value))?,
        mcc: required_integer("mcc", record.mcc, columns.mcc)?,
        errors: record.errors.filter(|value| !value.is_empty() && value != NAN_MARKER)
    })
}

fn required_integer<T: TryFrom<u64>>(column: &'static str, value: Option<String>, declared: bool) -> Result<T, FieldError> {
    match value {
        Some(value) => parse_integer(column, &value),
        None if declared => Err(FieldError::MissingValue { column }),
        None => parse_integer(column, "0")
    }
}

/// Parses a non-negative integer, also accepting integral floats such as `10001.0`.
fn parse_integer<T: TryFrom<u64>>(column: &'static str, value: &str) -> Result<T, FieldError> {
    let invalid = || FieldError::InvalidInteger { column, value: value.to_string() };

    let integer = match value.parse::<u64>() {
        Ok(integer) => integer,
        Err(_) => {
            let float: f64 = value.parse().map_err(|_| invalid())?;

            if !float.is_finite() || float < 0.0 || float.fract() != 0.0 || float > u64::MAX as f64 {
                return Err(invalid());
            }

            float as u64
        }
    };

    T::try_from(integer).map_err(|_| invalid())
}
