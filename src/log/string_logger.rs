// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::Severity;
use crate::common::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

/// One captured log line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogRecord {
    /// Severity the line was logged at.
    pub severity: Severity,
    /// The text, possibly spanning multiple lines.
    pub line: String,
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}: {}", self.severity, self.line)
    }
}

#[derive(Default)]
pub(crate) struct LoggerInner {
    pub(crate) records: Vec<LogRecord>,
    pub(crate) warn: bool,
}

/// Thread-safe string logger.
///
/// Constructed explicitly and handed to whatever needs to log, so a test can
/// inspect exactly what a run produced.
#[derive(Clone, Default)]
pub struct StringLogger {
    pub(crate) debug: bool,
    pub(crate) inner: Arc<Mutex<LoggerInner>>,
}

impl StringLogger {
    /// Call a function and trace the result.
    pub fn call<T>(&self, line: String, result: Result<T, Error>) -> Result<T, Error> {
        match &result {
            Ok(_) => self.trace(format!("{line} succeeded")),
            Err(e) => self.warn(format!("{line} failed\n{e:?}")),
        }
        result
    }

    /// Whether the log contains any warnings.
    pub fn contains_warnings(&self) -> bool {
        self.inner
            .lock()
            .ok()
            .map(|inner| inner.warn)
            .unwrap_or(false)
    }

    /// Add an error line describing `error`, followed by its full debug trace.
    pub fn exception(&self, line: String, error: &Error) {
        self.log(Severity::Error, format!("{line}: {error}\n{error:?}"));
    }

    /// Add an informational line.
    pub fn info(&self, line: String) {
        self.log(Severity::Info, line);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.records.len())
            .unwrap_or(0)
    }

    /// Whether nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a record at the given severity.  Unlike `trace` and `warn`, an
    /// empty line is still recorded.
    pub fn log(&self, severity: Severity, line: String) {
        if self.debug {
            println!("{severity}: {line}");
        }
        if let Ok(mut inner) = self.inner.lock() {
            if severity.is_warning() {
                inner.warn = true;
            }
            inner.records.push(LogRecord { severity, line });
        }
    }

    /// Create a new string logger.
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            inner: Arc::new(Mutex::new(Default::default())),
        }
    }

    /// Snapshot of every record logged so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.inner
            .lock()
            .map(|inner| inner.records.clone())
            .unwrap_or_default()
    }

    /// Snapshot of the records at exactly `severity`.
    pub fn records_at(&self, severity: Severity) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|record| record.severity == severity)
            .collect()
    }

    /// Add a trace line to this logger, unless it is empty.
    pub fn trace(&self, line: String) {
        if !line.is_empty() {
            self.log(Severity::Trace, line);
        }
    }

    /// Add a warning line to this logger, unless it is empty.
    pub fn warn(&self, line: String) {
        if !line.is_empty() {
            self.log(Severity::Warn, line);
        }
    }
}

impl Display for StringLogger {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        if let Ok(inner) = self.inner.lock() {
            let lines: Vec<_> = inner.records.iter().map(|r| r.to_string()).collect();
            Display::fmt(&lines.join("\n"), f)
        } else {
            Ok(())
        }
    }
}
