// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::common::Error;
use crate::serde_utils::is_default;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Token endpoint response.  Also the on-disk format of the token cache.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AccessToken {
    /// Bearer token.
    pub access_token: String,
    /// Long-lived token used to obtain new access tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Lifetime of `access_token` in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub expires_in: u64,
    /// Space-separated scopes actually granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl AccessToken {
    /// Parse a token endpoint response.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Auth(format!("token parse: {e}\n{json}")))
    }

    /// Keep `previous` refresh token if the endpoint did not issue a new one.
    pub(crate) fn or_refresh_token(mut self, previous: Option<String>) -> Self {
        if self.refresh_token.is_none() {
            self.refresh_token = previous;
        }
        self
    }
}

/// A JSON file that remembers the last token so consent is only asked once.
#[derive(Clone, Debug)]
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    /// Cache stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the cache file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached token, or `None` if there is no usable cache file.
    pub fn load(&self) -> Option<AccessToken> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|json| AccessToken::from_json(&json).ok())
    }

    /// Write `token` to the cache file.
    pub fn store(&self, token: &AccessToken) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(token)
            .map_err(|e| Error::String(format!("token serialize: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Io(format!("{}: cannot write ({e})", self.path.display())))
    }
}
