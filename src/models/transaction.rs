use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::types::{CardId, ClientId, Mcc, MerchantId, TransactionId, Zip};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single normalized row of the transaction dataset.
///
/// Text columns never carry a missing-value marker: absent text is the empty string
/// and an absent `errors` value is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Unique key within the dataset.
    pub id: TransactionId,
    /// Timestamp as written in the source file.
    pub date: String,
    pub client_id: ClientId,
    pub card_id: CardId,
    /// Signed amount, negative values are refunds or chargebacks.
    pub amount: f64,
    /// Transaction mode, e.g. "Swipe Transaction" or "Online Transaction".
    pub use_chip: String,
    pub merchant_id: MerchantId,
    pub merchant_city: String,
    pub merchant_state: String,
    pub zip: Zip,
    /// Merchant category code.
    pub mcc: Mcc,
    pub errors: Option<String>
}

impl Transaction {
    /// Calendar day of `date`, ignoring any time of day and timezone.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let value = self.date.trim();

        DATE_TIME_FORMATS.iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .map(|date_time| date_time.date())
            .or_else(|| NaiveDate::parse_from_str(value, DATE_FORMAT).ok())
    }
}
