// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Caption traits
mod cloud_captions;

/// Support for Youtube.
mod youtube;


pub use self::cloud_captions::{
    CaptionApiFactory, CaptionTrack, CaptionTrackId, CloudCaptions, VideoApi, VideoResourceId,
};
pub use self::youtube::{YoutubeCaptions, YoutubeConnector, YoutubeDataApi};
