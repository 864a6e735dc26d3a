mod amount;
mod errors;

pub use amount::parse_amount;
pub use errors::AmountError;

pub type TransactionId = String;
pub type ClientId = u64;
pub type CardId = u64;
pub type MerchantId = u64;
pub type Mcc = u32;
pub type Zip = u32;
