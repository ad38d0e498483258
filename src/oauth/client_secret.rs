// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::common::Error;
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;

const DEFAULT_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

/// Google OAuth2 client secret, as downloaded from the cloud console.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct ClientSecret {
    /// OAuth2 client ID.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// Consent page.
    #[serde(default = "default_auth_uri")]
    pub auth_uri: String,
    /// Token endpoint.
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    /// Registered redirect URIs; the first one is used.
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

fn default_auth_uri() -> String {
    DEFAULT_AUTH_URI.to_string()
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ClientSecret {
    /// Parse the JSON of a client secret file.  Both the `installed` and the
    /// `web` application layouts are accepted.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        #[derive(Deserialize)]
        struct ClientSecretFile {
            installed: Option<ClientSecret>,
            web: Option<ClientSecret>,
        }
        let ClientSecretFile { installed, web } = serde_json::from_str(json)
            .map_err(|e| Error::Auth(format!("client secret parse: {e}")))?;
        installed
            .or(web)
            .ok_or_else(|| Error::Auth("client secret: expected 'installed' or 'web'".to_string()))
    }

    /// Read and parse a client secret file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let json = read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: cannot read ({e})", path.display())))?;
        Self::from_json(&json)
    }

    /// Redirect URI sent with the authorization request and the code exchange.
    pub fn redirect_uri(&self) -> &str {
        self.redirect_uris
            .first()
            .map(String::as_str)
            .unwrap_or(OOB_REDIRECT_URI)
    }
}
