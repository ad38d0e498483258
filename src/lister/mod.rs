// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// The caption listing driver.
mod caption_lister;
/// Lister configuration.
mod config;

pub use self::caption_lister::{CaptionLister, FAILURE_HINT};
pub use self::config::{
    ListerConfig, DEFAULT_CREDENTIAL_PATH, DEFAULT_SCOPE, DEFAULT_VIDEO_ID,
};
