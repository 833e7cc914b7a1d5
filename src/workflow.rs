//! # Voucher Workflow
//!
//! The fixed pipeline that verifies access to an organization and then
//! creates and books one manual voucher:
//!
//! ```text
//! Workflow ──authenticate──▶ Authenticated ──verify_organization──▶ Verified
//!     ──create_voucher──▶ Created ──book──▶ Booked ──into_report──▶ Report
//! ```
//!
//! Each stage owns the output of the one before it, so calling the remote
//! operations out of order does not type check. Any failure ends the run;
//! nothing is retried and a created voucher is never rolled back.

use std::fmt;

use crate::{
    config::Credentials,
    dinero::AccountingApi,
    error::{Error, Result},
    types::{
        AccessToken, LedgerAccounts, ManualVoucherRequest, Organization, VoucherInput,
        VoucherLine, VoucherRecord,
    },
    utils,
};

/// Everything a run needs, validated before the first network call.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub credentials: Credentials,
    pub input: VoucherInput,
}

impl Invocation {
    /// Validates the raw command-line values and reads the credentials
    /// through `lookup`. Input is checked before credentials, mirroring the
    /// order in which the flags are parsed.
    pub fn prepare<F>(
        lookup: F,
        voucher_date: &str,
        description: &str,
        amount: &str,
        accounts: LedgerAccounts,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = VoucherInput {
            date: utils::parse_voucher_date(voucher_date)?,
            description: utils::parse_description(description)?,
            amount: utils::parse_amount(amount)?,
            accounts,
        };
        let credentials = Credentials::from_lookup(lookup)?;

        Ok(Self { credentials, input })
    }
}

pub struct Workflow<'a, A> {
    api: &'a A,
    credentials: &'a Credentials,
}

impl<'a, A: AccountingApi> Workflow<'a, A> {
    pub fn new(api: &'a A, credentials: &'a Credentials) -> Self {
        Self { api, credentials }
    }

    pub async fn authenticate(self) -> Result<Authenticated<'a, A>> {
        let token = self.api.fetch_access_token(self.credentials).await?;
        Ok(Authenticated {
            api: self.api,
            credentials: self.credentials,
            token,
        })
    }
}

pub struct Authenticated<'a, A> {
    api: &'a A,
    credentials: &'a Credentials,
    token: AccessToken,
}

impl<'a, A: AccountingApi> Authenticated<'a, A> {
    /// Confirms the configured organization is among those the token can
    /// see.
    pub async fn verify_organization(self) -> Result<Verified<'a, A>> {
        let organizations = self
            .api
            .list_organizations(self.credentials, &self.token)
            .await?;
        let organization = find_organization(&organizations, &self.credentials.organization_id)?;

        Ok(Verified {
            api: self.api,
            credentials: self.credentials,
            token: self.token,
            organization,
        })
    }
}

/// Linear scan for `organization_id`. Comparison ignores ASCII case.
pub fn find_organization(
    organizations: &[Organization],
    organization_id: &str,
) -> Result<Organization> {
    organizations
        .iter()
        .find(|organization| organization.matches(organization_id))
        .cloned()
        .ok_or_else(|| {
            Error::Verification(format!(
                "organization {} not found among {} accessible organizations; \
                 ensure the API key belongs to this organization",
                organization_id,
                organizations.len()
            ))
        })
}

pub struct Verified<'a, A> {
    api: &'a A,
    credentials: &'a Credentials,
    token: AccessToken,
    organization: Organization,
}

impl<'a, A: AccountingApi> Verified<'a, A> {
    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    pub async fn create_voucher(self, input: &VoucherInput) -> Result<Created<'a, A>> {
        let request = voucher_request(input);
        let voucher = self
            .api
            .create_manual_voucher(self.credentials, &self.token, &request)
            .await?;

        Ok(Created {
            api: self.api,
            credentials: self.credentials,
            token: self.token,
            organization: self.organization,
            voucher,
        })
    }
}

/// Builds the single-line voucher body with the amount sign normalized.
pub fn voucher_request(input: &VoucherInput) -> ManualVoucherRequest {
    ManualVoucherRequest {
        voucher_date: input.date,
        lines: vec![VoucherLine {
            description: input.description.clone(),
            account_number: input.accounts.account,
            balancing_account_number: input.accounts.balancing_account,
            amount: utils::normalize_amount(input.amount),
            account_vat_code: None,
            balancing_account_vat_code: None,
        }],
    }
}

pub struct Created<'a, A> {
    api: &'a A,
    credentials: &'a Credentials,
    token: AccessToken,
    organization: Organization,
    voucher: VoucherRecord,
}

impl<'a, A: AccountingApi> Created<'a, A> {
    pub fn voucher(&self) -> &VoucherRecord {
        &self.voucher
    }

    pub async fn book(self) -> Result<Booked> {
        self.api
            .book_manual_voucher(self.credentials, &self.token, &self.voucher)
            .await?;

        Ok(Booked {
            organization: self.organization,
            voucher: self.voucher,
        })
    }
}

/// A voucher that was created and booked.
#[derive(Debug, Clone)]
pub struct Booked {
    organization: Organization,
    voucher: VoucherRecord,
}

impl Booked {
    pub fn into_report(self) -> Report {
        Report {
            organization_name: self.organization.name,
            organization_id: self.organization.id,
            voucher_number: self.voucher.voucher_number,
            voucher_guid: self.voucher.guid,
        }
    }
}

/// Confirmation of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub organization_name: String,
    pub organization_id: String,
    pub voucher_number: Option<i64>,
    pub voucher_guid: String,
}

impl Report {
    /// The confirmation, one fact per line.
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Organization: {}", self.organization_name),
            format!("Organization ID: {}", self.organization_id),
            match self.voucher_number {
                Some(number) => format!("Voucher number: {}", number),
                None => "Voucher number: <not returned>".to_string(),
            },
            format!("Booked voucher GUID: {}", self.voucher_guid),
        ]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Runs every step of the pipeline in order.
pub async fn run<A: AccountingApi>(
    api: &A,
    credentials: &Credentials,
    input: &VoucherInput,
) -> Result<Report> {
    let booked = Workflow::new(api, credentials)
        .authenticate()
        .await?
        .verify_organization()
        .await?
        .create_voucher(input)
        .await?
        .book()
        .await?;

    Ok(booked.into_report())
}
