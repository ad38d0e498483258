// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Google client secret file.
mod client_secret;
/// Installed-application authorization flow.
mod google;
/// Unit tests
mod tests;
/// Access tokens and their cache.
mod token;

/// A convenient alias for URL so consuming code doesn't need to add it to `Cargo.toml`
pub type Url = reqwest::Url;

pub use self::client_secret::ClientSecret;
pub use self::google::{stdin_code_prompt, CodePrompt, GoogleInstalledFlow};
pub use self::token::{AccessToken, TokenCache};
