// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::common::Error;
use crate::serde_utils::FromStrVisitor;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Log severity, ordered from least to most severe.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Severity {
    /// Fine-grained progress.
    Trace,
    /// Diagnostic detail.
    Debug,
    /// Normal output.
    Info,
    /// Something went wrong but the run continues.
    Warn,
    /// Something failed.
    #[default]
    Error,
}
crate::serde_str!(Severity);

impl Severity {
    /// Whether lines of this severity mark the log as containing warnings.
    pub fn is_warning(self) -> bool {
        self >= Severity::Warn
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Trace => Display::fmt("TRACE", f),
            Self::Debug => Display::fmt("DEBUG", f),
            Self::Info => Display::fmt("INFO", f),
            Self::Warn => Display::fmt("WARN", f),
            Self::Error => Display::fmt("ERROR", f),
        }
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(Error::String(format!("{s}: not a log severity"))),
        }
    }
}
