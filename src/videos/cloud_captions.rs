// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::common::Error;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Video resource ID, optionally prefixed with `youtube/`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct VideoResourceId(pub String);
crate::impl_wrapper_str!(VideoResourceId);

/// Caption track ID, as assigned by the video service.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct CaptionTrackId(pub String);
crate::impl_wrapper_str!(CaptionTrackId);

/// One caption track of a video.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CaptionTrack {
    /// Track ID.
    pub id: CaptionTrackId,
    /// Video the track belongs to.
    pub video_id: VideoResourceId,
    /// BCP-47 language code, e.g. `en`.
    pub language: String,
    /// Track name, often empty.
    pub name: String,
    /// `standard`, `asr` (automatic) or `forced`.
    pub track_kind: String,
}

/// Caption capability of a video service.
#[async_trait]
pub trait CloudCaptions: Send + Sync {
    /// List the caption tracks of a video.
    async fn list_tracks(&self, video_id: &VideoResourceId) -> Result<Vec<CaptionTrack>, Error>;

    /// List the caption track IDs of a video, in the order the service returns them.
    async fn list_track_ids(
        &self,
        video_id: &VideoResourceId,
    ) -> Result<Vec<CaptionTrackId>, Error> {
        Ok(self
            .list_tracks(video_id)
            .await?
            .into_iter()
            .map(|CaptionTrack { id, .. }| id)
            .collect())
    }
}

/// An authenticated video service.
pub trait VideoApi: Send + Sync {
    /// Caption operations.
    fn captions(&self) -> &dyn CloudCaptions;
}

/// Constructs an authenticated [`VideoApi`] from a credential file and scopes.
#[async_trait]
pub trait CaptionApiFactory: Send + Sync {
    /// Authenticate and return the API.
    async fn connect(
        &self,
        credential_path: &Path,
        scopes: &[String],
    ) -> Result<Box<dyn VideoApi>, Error>;
}
