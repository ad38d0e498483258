// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#![warn(missing_docs)]
//! Lists the caption tracks of a YouTube video through the YouTube Data API v3,
//! authenticating with a Google OAuth2 client secret.

/// Types common to multiple wrappers.
pub mod common;
pub use common::*;

#[cfg(feature = "lister")]
/// Checks credentials, lists caption track IDs and logs them.
pub mod lister;
#[cfg(feature = "lister")]
pub use lister::*;

#[cfg(feature = "log")]
/// Thread-safe logging.
pub mod log;
#[cfg(feature = "log")]
pub use log::*;

#[cfg(feature = "oauth")]
/// A wrapper which provides access to Google OAuth2 authentication.
pub mod oauth;
#[cfg(feature = "oauth")]
pub use oauth::*;

/// Macros used with `serde` serialization and serialization.
pub mod serde_utils;
pub use serde_utils::*;

#[cfg(feature = "videos")]
/// A wrapper which provides access to video services.
pub mod videos;
#[cfg(feature = "videos")]
pub use videos::*;
