use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{Error, Result};

const EXCERPT_LIMIT: usize = 500;

pub fn parse_voucher_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    // chrono accepts unpadded fields, so insist on the exact shape first
    let well_formed = value.len() == 10
        && value.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });

    if !well_formed {
        return Err(invalid_date(value));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid_date(value))
}

fn invalid_date(value: &str) -> Error {
    Error::Config(format!(
        "--voucher-date must be a valid ISO formatted date (YYYY-MM-DD), got '{}'",
        value
    ))
}

pub fn parse_amount(value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| {
        Error::Config(format!(
            "--amount must be a decimal number, got '{}'",
            value
        ))
    })
}

/// Rejects blank descriptions. Anything else is free text and kept as is.
pub fn parse_description(value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::Config("--description must not be empty".to_string()));
    }
    Ok(value.to_string())
}

/// A single-line manual voucher is balanced by Dinero against the balancing
/// account, so positive amounts are posted as negative.
pub fn normalize_amount(amount: Decimal) -> Decimal {
    if amount > Decimal::ZERO {
        -amount
    } else {
        amount
    }
}

/// Shortens a response body for use in an error message.
pub fn excerpt(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "<empty body>".to_string();
    }

    match body.char_indices().nth(EXCERPT_LIMIT) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
