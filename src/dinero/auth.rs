use base64::{Engine, engine::general_purpose::STANDARD};

use super::{DineroClient, describe_failure};
use crate::{
    config::Credentials,
    error::{Error, Result},
    types::{AccessToken, TokenResponse},
};

/// Exchanges the credentials for a bearer token.
///
/// Dinero uses the password grant with the API key as both username and
/// password; the client id and secret go into a Basic authorization header.
/// A rejected request or a body without `access_token` is an
/// [`Error::Authentication`]. Nothing is retried.
pub async fn fetch_access_token(
    client: &DineroClient,
    credentials: &Credentials,
) -> Result<AccessToken> {
    let response = client
        .http
        .post(&client.token_url)
        .header("Authorization", basic_authorization(credentials))
        .form(&[
            ("grant_type", "password"),
            ("scope", "read write"),
            ("username", credentials.api_key.as_str()),
            ("password", credentials.api_key.as_str()),
        ])
        .send()
        .await
        .map_err(|e| Error::Authentication(format!("Token request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(Error::Authentication(describe_failure(response).await));
    }

    let token: TokenResponse = response.json().await.map_err(|e| {
        Error::Authentication(format!("Unexpected token response: {}", e))
    })?;

    match token.access_token {
        Some(value) if !value.is_empty() => Ok(AccessToken::new(value)),
        _ => Err(Error::Authentication(
            "Token response did not include an access token".to_string(),
        )),
    }
}

pub fn basic_authorization(credentials: &Credentials) -> String {
    let pair = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", STANDARD.encode(pair))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_header_encodes_client_pair() {
        let credentials = Credentials {
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            api_key: "key".to_string(),
            organization_id: "1".to_string(),
        };

        // base64("client:secret")
        assert_eq!(
            basic_authorization(&credentials),
            "Basic Y2xpZW50OnNlY3JldA=="
        );
    }
}
