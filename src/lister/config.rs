// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::common::{CubConfig, Error};
use crate::log::Severity;
use crate::videos::VideoResourceId;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default location of the Google client secret.
pub const DEFAULT_CREDENTIAL_PATH: &str = "client_secret.json";
/// Scope needed by `captions.list`.
pub const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/youtube.force-ssl";
/// Video listed when none is configured.
pub const DEFAULT_VIDEO_ID: &str = "M7FIvfx5J10";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// What to list and how to report it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListerConfig {
    /// Google client secret file.  Must exist before anything is contacted.
    pub credential_path: PathBuf,
    /// OAuth2 scopes requested when authenticating.
    pub scopes: Vec<String>,
    /// Video whose caption tracks are listed.
    pub video_id: VideoResourceId,
    /// Severity at which each caption track ID is logged.
    pub severity: Severity,
    /// Where to remember the OAuth2 token between runs, if anywhere.
    pub token_cache: Option<PathBuf>,
    /// HTTP request timeout.
    pub timeout_secs: u64,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            credential_path: PathBuf::from(DEFAULT_CREDENTIAL_PATH),
            scopes: vec![DEFAULT_SCOPE.to_string()],
            video_id: VideoResourceId::from(DEFAULT_VIDEO_ID),
            severity: Severity::Error,
            token_cache: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ListerConfig {
    /// Read the optional `[captions]` section, falling back to defaults.
    ///
    /// ```toml
    /// [captions]
    /// credential_path = "client_secret.json"
    /// scopes = ["https://www.googleapis.com/auth/youtube.force-ssl"]
    /// video_id = "M7FIvfx5J10"
    /// severity = "info"
    /// token_cache = "token.json"
    /// timeout_secs = 30
    /// ```
    pub fn new(cub_config: &CubConfig) -> Result<Self, Error> {
        #[derive(Default, Deserialize)]
        struct CaptionsConfig {
            credential_path: Option<PathBuf>,
            scopes: Option<Vec<String>>,
            video_id: Option<String>,
            severity: Option<Severity>,
            token_cache: Option<PathBuf>,
            timeout_secs: Option<u64>,
        }
        #[derive(Deserialize)]
        struct ConfigToml {
            #[serde(default)]
            captions: CaptionsConfig,
        }
        let ConfigToml {
            captions:
                CaptionsConfig {
                    credential_path,
                    scopes,
                    video_id,
                    severity,
                    token_cache,
                    timeout_secs,
                },
        } = cub_config.get()?;
        let defaults = Self::default();
        Ok(Self {
            credential_path: credential_path.unwrap_or(defaults.credential_path),
            scopes: scopes.unwrap_or(defaults.scopes),
            video_id: video_id.map(VideoResourceId).unwrap_or(defaults.video_id),
            severity: severity.unwrap_or(defaults.severity),
            token_cache: token_cache.or(defaults.token_cache),
            timeout_secs: timeout_secs.unwrap_or(defaults.timeout_secs),
        })
    }

    /// Build credential path.
    pub fn credential_path(mut self, value: PathBuf) -> Self {
        self.credential_path = value;
        self
    }

    /// Build scopes.
    pub fn scopes(mut self, value: Vec<String>) -> Self {
        self.scopes = value;
        self
    }

    /// Build video ID.
    pub fn video_id(mut self, value: VideoResourceId) -> Self {
        self.video_id = value;
        self
    }

    /// Build severity.
    pub fn severity(mut self, value: Severity) -> Self {
        self.severity = value;
        self
    }

    /// Build token cache.
    pub fn token_cache(mut self, value: Option<PathBuf>) -> Self {
        self.token_cache = value;
        self
    }

    /// HTTP request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
