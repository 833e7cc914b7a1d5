//! # Dinero Integration Module
//!
//! HTTP client for the parts of the Dinero API used by the voucher workflow.
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - password grant, API key as username and password
//! - `GET /organizations` - organizations visible to the token
//! - `POST /{org}/vouchers/manuel` - create a manual voucher
//! - `POST /{org}/vouchers/manuel/{guid}/book` - book a manual voucher
//!
//! Every call is made exactly once. Non-success responses are turned into the
//! error kind of the step that made them, carrying the HTTP status and an
//! excerpt of the response body. There are no retries and no explicit
//! timeouts; the transport defaults of `reqwest` apply.
//!
//! The [`AccountingApi`] trait is the seam between the workflow and the
//! transport. [`DineroClient`] is the only production implementation.

pub mod auth;
pub mod organizations;
pub mod vouchers;

use reqwest::{Client, RequestBuilder, Response};

use crate::{
    config::{self, Credentials},
    error::Result,
    types::{AccessToken, ManualVoucherRequest, Organization, VoucherRecord},
    utils,
};

/// Remote operations the voucher workflow depends on.
#[allow(async_fn_in_trait)]
pub trait AccountingApi {
    async fn fetch_access_token(&self, credentials: &Credentials) -> Result<AccessToken>;

    async fn list_organizations(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
    ) -> Result<Vec<Organization>>;

    async fn create_manual_voucher(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
        voucher: &ManualVoucherRequest,
    ) -> Result<VoucherRecord>;

    async fn book_manual_voucher(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
        voucher: &VoucherRecord,
    ) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct DineroClient {
    http: Client,
    token_url: String,
    api_url: String,
}

impl DineroClient {
    pub fn new(token_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            token_url: token_url.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client pointed at the endpoints from the environment.
    pub fn from_env() -> Self {
        Self::new(config::token_url(), config::api_url())
    }

    /// Adds the headers every API call (but not the token call) carries.
    fn authorized(
        &self,
        request: RequestBuilder,
        credentials: &Credentials,
        token: &AccessToken,
    ) -> RequestBuilder {
        request
            .bearer_auth(token.as_str())
            .header("Accept", "application/json")
            .header("x-api-key", &credentials.api_key)
    }
}

impl AccountingApi for DineroClient {
    async fn fetch_access_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        auth::fetch_access_token(self, credentials).await
    }

    async fn list_organizations(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
    ) -> Result<Vec<Organization>> {
        organizations::list_organizations(self, credentials, token).await
    }

    async fn create_manual_voucher(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
        voucher: &ManualVoucherRequest,
    ) -> Result<VoucherRecord> {
        vouchers::create_manual_voucher(self, credentials, token, voucher).await
    }

    async fn book_manual_voucher(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
        voucher: &VoucherRecord,
    ) -> Result<()> {
        vouchers::book_manual_voucher(self, credentials, token, voucher).await
    }
}

/// Describes a non-success response as `HTTP <status>: <body excerpt>`.
async fn describe_failure(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    format!("HTTP {}: {}", status, utils::excerpt(&body))
}
