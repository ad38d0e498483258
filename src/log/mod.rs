// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Ordered log severities.
mod severity;
/// Thread-safe logging.
mod string_logger;
mod tests;

pub use self::severity::Severity;
pub use self::string_logger::{LogRecord, StringLogger};
