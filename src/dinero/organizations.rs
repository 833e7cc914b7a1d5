use serde_json::Value;

use super::{DineroClient, describe_failure};
use crate::{
    config::Credentials,
    error::{Error, Result},
    types::{AccessToken, Organization, OrganizationEntry},
};

/// Lists the organizations the token has access to, in the order Dinero
/// returns them.
pub async fn list_organizations(
    client: &DineroClient,
    credentials: &Credentials,
    token: &AccessToken,
) -> Result<Vec<Organization>> {
    let url = format!("{}/organizations", client.api_url);

    let request = client
        .http
        .get(&url)
        .query(&[("fields", "id,name,isPro")]);
    let response = client
        .authorized(request, credentials, token)
        .send()
        .await
        .map_err(|e| Error::Verification(format!("Listing organizations failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(Error::Verification(describe_failure(response).await));
    }

    let body: Value = response.json().await.map_err(|e| {
        Error::Verification(format!("Unexpected organization listing: {}", e))
    })?;

    parse_organizations(body)
}

/// Parses the listing, keeping only entries with a usable id. Anything but
/// a JSON array is rejected.
pub fn parse_organizations(body: Value) -> Result<Vec<Organization>> {
    let Value::Array(entries) = body else {
        return Err(Error::Verification(
            "Unexpected response while listing organizations: expected a JSON array".to_string(),
        ));
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<OrganizationEntry>(entry).ok())
        .filter_map(OrganizationEntry::into_organization)
        .collect())
}
