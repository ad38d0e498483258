// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod config;
/// An enum that encapsulates a variety of error types.
mod error;
#[cfg(test)]
/// Local HTTP server for tests.
pub(crate) mod http_stub;

pub use self::config::{CubConfig, CubConfigBuilder};
pub use self::error::{Error, ErrorKind};
