//! Currency formatting for the fixed [`LOCALE`](crate::constants::LOCALE).
//!
//! `2540.75 EUR` renders as `2.540,75 €`: `.` groups thousands, `,` marks
//! the decimals, and the symbol follows the number after a no-break space.
//! Amounts are rounded on their shortest decimal form, half away from zero.

use crate::constants::HOME_CURRENCY;
use crate::errors::FormatError;

/// Separator between the number and the currency symbol.
const SYMBOL_SEPARATOR: char = '\u{a0}';

/// Symbol and minor-unit digits for an upper-case ISO 4217 code.
fn currency_info(code: &str) -> (&str, usize) {
    match code {
        "EUR" => ("€", 2),
        "USD" => ("$", 2),
        "GBP" => ("£", 2),
        "JPY" => ("¥", 0),
        "KRW" | "VND" | "CLP" | "ISK" => (code, 0),
        "BHD" | "KWD" | "JOD" | "OMR" | "TND" => (code, 3),
        _ => (code, 2),
    }
}

/// Validate and upper-case a currency code.
fn normalize_code(code: &str) -> Result<String, FormatError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(FormatError::InvalidCurrency(code.to_string()))
    }
}

/// Round the shortest decimal form of `abs` to `digits` fraction digits,
/// ties away from zero. Returns the integer and fraction digits.
fn round_half_expand(abs: f64, digits: usize) -> (String, String) {
    let shortest = abs.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut kept: Vec<u8> = int_part.bytes().collect();
    kept.extend(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits));

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let frac = kept.split_off(kept.len() - digits);
    (
        String::from_utf8_lossy(&kept).into_owned(),
        String::from_utf8_lossy(&frac).into_owned(),
    )
}

/// Insert `.` between groups of three integer digits.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    result
}

/// Format `amount` as a `de-DE` currency string.
///
/// `currency` defaults to the home currency. Negative amounts keep their
/// sign even when they round to zero.
///
/// # Example
/// ```
/// use finora_core::currency::format_currency;
///
/// assert_eq!(format_currency(2540.75, Some("EUR")).unwrap(), "2.540,75\u{a0}€");
/// assert_eq!(format_currency(-450.25, None).unwrap(), "-450,25\u{a0}€");
/// assert!(format_currency(f64::NAN, None).is_err());
/// ```
pub fn format_currency(amount: f64, currency: Option<&str>) -> Result<String, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::NonFinite(amount));
    }
    let code = normalize_code(currency.unwrap_or(HOME_CURRENCY))?;
    let (symbol, minor_digits) = currency_info(&code);

    let (int_part, frac_part) = round_half_expand(amount.abs(), minor_digits);

    let mut out = String::with_capacity(int_part.len() + frac_part.len() + 8);
    if amount.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(&frac_part);
    }
    out.push(SYMBOL_SEPARATOR);
    out.push_str(symbol);
    Ok(out)
}

/// Format an amount in the home currency.
pub fn format_home(amount: f64) -> Result<String, FormatError> {
    format_currency(amount, None)
}
