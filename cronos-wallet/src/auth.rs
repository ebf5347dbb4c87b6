// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::clients::AuthClient;
use crate::{CREDENTIAL_PARAM, Error};

/// Session issued by the provider once a login completed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    /// Opaque token proving the login, never inspected locally
    pub token: String,
}

/// Extracts the login credential from the callback page URL
///
/// # Errors
/// Returns [`Error::MissingCredential`] if the query has no non-empty
/// credential parameter.
pub fn credential_from_url(page_url: &Url) -> Result<String, Error> {
    page_url
        .query_pairs()
        .find(|(key, _)| key == CREDENTIAL_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .ok_or(Error::MissingCredential)
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    credential: &'a str,
}

#[derive(Clone)]
/// Authentication provider HTTP Client
///
/// Relays the credential found on the callback page to the login endpoint of
/// the provider, which verifies it and answers with a [`Session`].
pub struct AuthHttpClient {
    client: reqwest::Client,
    login_url: Url,
}

impl AuthHttpClient {
    /// Create a new authentication client for the given login endpoint
    ///
    /// # Errors
    /// This method errors if a TLS backend cannot be initialized, or the
    /// resolver cannot load the system configuration.
    pub fn new(login_url: Url) -> Result<Self, Error> {
        let client = reqwest::ClientBuilder::new()
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|_| Error::HttpClient)?;

        Ok(Self { client, login_url })
    }
}

#[async_trait]
impl AuthClient for AuthHttpClient {
    async fn login_with_credential(
        &self,
        page_url: &Url,
    ) -> Result<Session, Error> {
        let credential = credential_from_url(page_url)?;

        debug!(endpoint = %self.login_url, "completing login");

        let response = self
            .client
            .post(self.login_url.clone())
            .json(&LoginRequest {
                credential: &credential,
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let error = response.text().await.unwrap_or_default();
            return Err(Error::Auth(format!("{status}: {error}")));
        }

        Ok(response.json().await?)
    }
}
