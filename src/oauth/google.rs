// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{AccessToken, ClientSecret, TokenCache, Url};
use crate::common::Error;
use crate::log::StringLogger;
use reqwest::Method;
use std::time::Duration;

/// Asks the user to visit the consent URL and returns the code they were given.
pub type CodePrompt<'a> = &'a (dyn Fn(&Url) -> Result<String, Error> + Send + Sync);

/// Print the consent URL and read the authorization code from standard input.
pub fn stdin_code_prompt(url: &Url) -> Result<String, Error> {
    println!("Please visit this URL to authorize this application:\n{url}");
    println!("Enter the authorization code:");
    let mut code = String::new();
    std::io::stdin()
        .read_line(&mut code)
        .map_err(|e| Error::Io(format!("stdin: {e}")))?;
    Ok(code.trim().to_string())
}

/// Google OAuth2 flow for installed (desktop) applications.
pub struct GoogleInstalledFlow {
    client_secret: ClientSecret,
    http_client: reqwest::Client,
    logger: StringLogger,
    token_cache: Option<TokenCache>,
}

impl GoogleInstalledFlow {
    const TIMEOUT_SECS: u64 = 10;

    /// Create a flow for the given client secret.
    pub fn new(client_secret: ClientSecret, logger: StringLogger) -> Result<Self, Error> {
        Ok(Self {
            client_secret,
            http_client: Self::create_http_client()?,
            logger,
            token_cache: None,
        })
    }

    /// Remember tokens in `token_cache` between runs.
    pub fn token_cache(mut self, token_cache: Option<TokenCache>) -> Self {
        self.token_cache = token_cache;
        self
    }

    /// Consent page the user must visit to authorize `scopes`.
    pub fn authorization_url(&self, scopes: &[String]) -> Result<Url, Error> {
        let ClientSecret {
            auth_uri,
            client_id,
            ..
        } = &self.client_secret;
        let scope = scopes.join(" ");
        Url::parse_with_params(
            auth_uri,
            &[
                ("client_id", client_id.as_str()),
                ("redirect_uri", self.client_secret.redirect_uri()),
                ("response_type", "code"),
                ("scope", scope.as_str()),
                ("access_type", "offline"),
            ],
        )
        .map_err(|e| Error::Auth(format!("{auth_uri}: invalid auth uri ({e})")))
    }

    /// Exchange an authorization code for a token.
    pub async fn exchange_code(&self, code: &str) -> Result<AccessToken, Error> {
        let ClientSecret {
            client_id,
            client_secret,
            ..
        } = &self.client_secret;
        let token_payload: Vec<(&'static str, &str)> = vec![
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("code", code.trim()),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.client_secret.redirect_uri()),
        ];
        self.post_token(&token_payload).await
    }

    /// Obtain a fresh access token from a refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AccessToken, Error> {
        let ClientSecret {
            client_id,
            client_secret,
            ..
        } = &self.client_secret;
        let token_payload: Vec<(&'static str, &str)> = vec![
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ];
        let token = self.post_token(&token_payload).await?;
        Ok(token.or_refresh_token(Some(refresh_token.to_string())))
    }

    /// Return an access token for `scopes`, refreshing a cached one if possible
    /// or else asking the user for consent via `prompt`.
    pub async fn token(
        &self,
        scopes: &[String],
        prompt: CodePrompt<'_>,
    ) -> Result<AccessToken, Error> {
        if scopes.is_empty() {
            return Err(Error::Precondition("no scopes requested".to_string()));
        }
        let cached = self
            .token_cache
            .as_ref()
            .and_then(|cache| cache.load())
            .and_then(|token| token.refresh_token);
        let token = match cached {
            Some(refresh_token) => match self.refresh(&refresh_token).await {
                Ok(token) => token,
                Err(e) => {
                    self.logger
                        .warn(format!("cached refresh token rejected, asking again\n{e:?}"));
                    self.consent(scopes, prompt).await?
                }
            },
            None => self.consent(scopes, prompt).await?,
        };
        if let Some(cache) = &self.token_cache {
            self.logger.call(
                format!("store token in {}", cache.path().display()),
                cache.store(&token),
            )?;
        }
        Ok(token)
    }

    async fn consent(
        &self,
        scopes: &[String],
        prompt: CodePrompt<'_>,
    ) -> Result<AccessToken, Error> {
        let url = self.authorization_url(scopes)?;
        let code = prompt(&url)?;
        if code.trim().is_empty() {
            return Err(Error::Auth("no authorization code entered".to_string()));
        }
        self.exchange_code(&code).await
    }

    fn create_http_client() -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::String(format!("cannot create http client: {e}")))
    }

    async fn post_token(
        &self,
        token_payload: &[(&'static str, &str)],
    ) -> Result<AccessToken, Error> {
        let token_endpoint = &self.client_secret.token_uri;
        let token_response = self
            .http_client
            .request(Method::POST, token_endpoint)
            .form(token_payload)
            .send()
            .await
            .map_err(|e| Error::Auth(format!("google token post: {e}")))?;
        if !token_response.status().is_success() {
            return match token_response.text().await {
                Ok(body) => Err(Error::Auth(format!("google token post: {body}"))),
                Err(e) => Err(Error::Auth(format!("token: {e}"))),
            };
        }
        let token_text = token_response
            .text()
            .await
            .map_err(|e| Error::Auth(format!("google token response: {e}")))?;
        let token = AccessToken::from_json(&token_text)?;
        self.logger.trace(format!(
            "google token granted for scope {}",
            token.scope.as_deref().unwrap_or("(unspecified)")
        ));
        Ok(token)
    }
}
