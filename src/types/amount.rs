use crate::types::errors::AmountError;

const CURRENCY_SYMBOL: char = '$';

/// Parses a possibly currency-formatted amount such as `$100.50`, `$-77.00` or `-$12`.
///
/// A single leading currency symbol is stripped (either before or after the sign) and
/// the remainder must parse as a finite `f64`.
pub fn parse_amount(value: &str) -> Result<f64, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
    }

    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value.strip_prefix('+').unwrap_or(value))
    };

    let digits = unsigned.strip_prefix(CURRENCY_SYMBOL).unwrap_or(unsigned).trim_start();

    if digits.is_empty() {
        return Err(AmountError::InvalidFormat(format!("Value [{value}] has no digits")));
    }

    //NOTE: `$-77.00` leaves a sign behind the symbol, a second sign after that is malformed
    if !sign.is_empty() && digits.starts_with(['-', '+']) {
        return Err(AmountError::InvalidFormat(format!("Value [{value}] has more than one sign")));
    }

    let amount: f64 = format!("{sign}{digits}").parse()?;

    if !amount.is_finite() {
        return Err(AmountError::NotFinite(value.to_string()));
    }

    Ok(amount)
}
