// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{
    CaptionApiFactory, CaptionTrack, CaptionTrackId, CloudCaptions, VideoApi, VideoResourceId,
};
use crate::common::Error;
use crate::log::StringLogger;
use crate::oauth::{stdin_code_prompt, ClientSecret, GoogleInstalledFlow, TokenCache, Url};
use async_trait::async_trait;
use hyper::StatusCode;
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const YOUTUBE_RESOURCE_PREFIX: &str = "youtube";

type Prompt = Box<dyn Fn(&Url) -> Result<String, Error> + Send + Sync>;

/// Authenticated access to the YouTube Data API v3.
pub struct YoutubeDataApi {
    captions: YoutubeCaptions,
}

impl YoutubeDataApi {
    /// Wrap an access token that was already obtained.
    pub fn with_token(
        access_token: String,
        api_base: &str,
        timeout: Duration,
        logger: StringLogger,
    ) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .http1_only()
            .build()
            .map_err(|e| Error::String(format!("cannot create http client: {e}")))?;
        Ok(Self {
            captions: YoutubeCaptions {
                access_token,
                api_base: api_base.trim_end_matches('/').to_string(),
                client,
                logger,
            },
        })
    }
}

impl VideoApi for YoutubeDataApi {
    fn captions(&self) -> &dyn CloudCaptions {
        &self.captions
    }
}

/// The `captions` resource of the YouTube Data API.
pub struct YoutubeCaptions {
    access_token: String,
    api_base: String,
    client: Client,
    logger: StringLogger,
}

impl YoutubeCaptions {
    fn map_error(e: reqwest::Error) -> Error {
        Error::Http(StatusCode::FAILED_DEPENDENCY, format!("{}", e))
    }

    /// Strip the optional `youtube/` prefix from a resource ID.
    pub(crate) fn parse_resource_id(resource_id: &VideoResourceId) -> Result<String, Error> {
        let id = match resource_id.0.split_once('/') {
            Some((YOUTUBE_RESOURCE_PREFIX, id)) => id,
            Some(_) => {
                return Err(Error::Http(
                    StatusCode::NOT_ACCEPTABLE,
                    format!(
                        "{}: expected '{YOUTUBE_RESOURCE_PREFIX}' prefix in resource ID",
                        resource_id.0
                    ),
                ))
            }
            None => resource_id.0.as_str(),
        };
        let id = id.trim();
        if id.is_empty() {
            Err(Error::Http(
                StatusCode::NOT_ACCEPTABLE,
                format!("{}: invalid video resource ID", resource_id.0),
            ))
        } else {
            Ok(id.to_string())
        }
    }

    /// Parse a `captions.list` response body received with `status`.
    pub(crate) fn parse_result(
        status: StatusCode,
        text: &str,
    ) -> Result<Vec<CaptionTrack>, Error> {
        if status.is_success() {
            let YoutubeResponse { items } = serde_json::from_str(text).map_err(|e| {
                Error::Http(
                    StatusCode::FAILED_DEPENDENCY,
                    format!("cannot parse youtube response: {e}\n{text}"),
                )
            })?;
            return Ok(items
                .into_iter()
                .map(
                    |YoutubeItem {
                         id,
                         snippet:
                             YoutubeSnippet {
                                 video_id,
                                 language,
                                 name,
                                 track_kind,
                             },
                     }| CaptionTrack {
                        id: CaptionTrackId(id),
                        video_id: VideoResourceId(video_id),
                        language,
                        name,
                        track_kind,
                    },
                )
                .collect());
        }

        #[derive(Deserialize)]
        struct YoutubeReason {
            code: u16,
            message: String,
        }
        #[derive(Deserialize)]
        struct YoutubeError {
            error: YoutubeReason,
        }
        match serde_json::from_str(text) {
            Ok(YoutubeError {
                error: YoutubeReason { code, message },
            }) => Err(Error::Http(
                StatusCode::from_u16(code).unwrap_or(status),
                format!("youtube error: {message}"),
            )),
            Err(_) => Err(Error::Http(
                status,
                format!("cannot parse youtube error: {text}"),
            )),
        }
    }
}

#[async_trait]
impl CloudCaptions for YoutubeCaptions {
    async fn list_tracks(&self, id: &VideoResourceId) -> Result<Vec<CaptionTrack>, Error> {
        let video_id = Self::parse_resource_id(id)?;
        let url = format!("{}/captions", self.api_base);
        self.logger
            .trace(format!("GET {url}?part=snippet&videoId={video_id}"));
        let request = self
            .client
            .get(&url)
            .query(&[("part", "snippet"), ("videoId", video_id.as_str())])
            .bearer_auth(&self.access_token)
            .build()
            .map_err(Self::map_error)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(Self::map_error)?;
        let status = response.status();
        let result = response.text().await.map_err(Self::map_error)?;
        Self::parse_result(status, &result)
    }
}

/// Builds a [`YoutubeDataApi`] from a Google client secret file.
pub struct YoutubeConnector {
    api_base: String,
    logger: StringLogger,
    prompt: Prompt,
    timeout: Duration,
    token_cache: Option<PathBuf>,
}

impl YoutubeConnector {
    const TIMEOUT_SECS: u64 = 30;

    /// Connector which asks for consent on standard input.
    pub fn new(logger: StringLogger) -> Self {
        Self {
            api_base: YOUTUBE_API_BASE.to_string(),
            logger,
            prompt: Box::new(stdin_code_prompt),
            timeout: Duration::from_secs(Self::TIMEOUT_SECS),
            token_cache: None,
        }
    }

    /// Build API base URL, e.g. for a mock server.
    pub fn api_base(mut self, value: String) -> Self {
        self.api_base = value;
        self
    }

    /// Build consent prompt.
    pub fn prompt(
        mut self,
        value: impl Fn(&Url) -> Result<String, Error> + Send + Sync + 'static,
    ) -> Self {
        self.prompt = Box::new(value);
        self
    }

    /// Build request timeout.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    /// Build token cache location.
    pub fn token_cache(mut self, value: Option<PathBuf>) -> Self {
        self.token_cache = value;
        self
    }
}

#[async_trait]
impl CaptionApiFactory for YoutubeConnector {
    async fn connect(
        &self,
        credential_path: &Path,
        scopes: &[String],
    ) -> Result<Box<dyn VideoApi>, Error> {
        if scopes.is_empty() {
            return Err(Error::Precondition("no scopes configured".to_string()));
        }
        let client_secret = ClientSecret::from_file(credential_path)?;
        let flow = GoogleInstalledFlow::new(client_secret, self.logger.clone())?
            .token_cache(self.token_cache.clone().map(TokenCache::new));
        let token = flow.token(scopes, &*self.prompt).await?;
        let api = YoutubeDataApi::with_token(
            token.access_token,
            &self.api_base,
            self.timeout,
            self.logger.clone(),
        )?;
        Ok(Box::new(api))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YoutubeItem {
    id: String,
    #[serde(default)]
    snippet: YoutubeSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YoutubeResponse {
    #[serde(default)]
    items: Vec<YoutubeItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct YoutubeSnippet {
    video_id: String,
    language: String,
    name: String,
    track_kind: String,
}
