use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Bearer token returned by the token endpoint.
///
/// The expiry is not tracked; a token lives for a single run.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

pub const UNKNOWN_ORGANIZATION_NAME: &str = "<unknown>";

/// An organization the token has access to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

impl Organization {
    pub fn matches(&self, organization_id: &str) -> bool {
        self.id.eq_ignore_ascii_case(organization_id.trim())
    }
}

/// One entry of the organization listing as Dinero sends it. Archived or
/// partial entries may lack an id or a name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationEntry {
    #[serde(default, alias = "Id", deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
}

impl OrganizationEntry {
    /// Entries without a usable id cannot match and are dropped.
    pub fn into_organization(self) -> Option<Organization> {
        let id = self.id?;
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ORGANIZATION_NAME.to_string());
        Some(Organization { id, name })
    }
}

// Organization ids come back as numbers, but are configured as text.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    })
}

/// Validated user input for a single-line manual voucher.
#[derive(Debug, Clone, PartialEq)]
pub struct VoucherInput {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub accounts: LedgerAccounts,
}

/// Account pair the voucher line is posted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerAccounts {
    pub account: u32,
    pub balancing_account: u32,
}

impl Default for LedgerAccounts {
    fn default() -> Self {
        Self {
            account: 55000,
            balancing_account: 60140,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualVoucherRequest {
    pub voucher_date: NaiveDate,
    pub lines: Vec<VoucherLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherLine {
    pub description: String,
    pub account_number: u32,
    pub balancing_account_number: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub account_vat_code: Option<String>,
    pub balancing_account_vat_code: Option<String>,
}

/// Raw body of a successful voucher creation. Dinero is not consistent in
/// the casing of these keys.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedVoucherResponse {
    #[serde(
        default,
        alias = "Guid",
        alias = "voucherGuid",
        alias = "VoucherGuid"
    )]
    pub guid: Option<String>,
    #[serde(default, alias = "voucherNumber", alias = "VoucherNumber")]
    pub voucher_number: Option<i64>,
    #[serde(
        default,
        alias = "Timestamp",
        alias = "timeStamp",
        alias = "TimeStamp"
    )]
    pub timestamp: Option<String>,
}

/// A voucher that exists remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoucherRecord {
    pub voucher_number: Option<i64>,
    pub guid: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookVoucherRequest {
    pub timestamp: String,
}
