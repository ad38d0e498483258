// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use hyper::StatusCode;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
/// An enum that encapsulates a variety of error types.
///
/// # Example
///
/// Error::Http(StatusCode::NOT_FOUND, format!("{video_id}: not found"))
pub enum Error {
    /// Authentication error (client secret, token exchange or refresh).
    Auth(String),
    /// HTTP (or miscellaneous remote) error.
    Http(StatusCode, String),
    /// Local I/O error.
    Io(String),
    /// A local precondition is not met, e.g. the credential file is missing.
    Precondition(String),
    /// String error.
    String(String),
}

/// Classification of an [`Error`] so callers can tell failure causes apart.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Something local is missing, such as the credential file or the scopes.
    PreconditionMissing,
    /// The credentials were rejected or could not be used.
    AuthFailure,
    /// The requested resource does not exist.
    NotFound,
    /// The request failed in transit or the service misbehaved.
    Transport,
    /// Anything else.
    Other,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Auth(_) => ErrorKind::AuthFailure,
            Error::Http(status, _) => match *status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorKind::AuthFailure,
                StatusCode::NOT_FOUND => ErrorKind::NotFound,
                StatusCode::NOT_ACCEPTABLE => ErrorKind::Other,
                _ => ErrorKind::Transport,
            },
            Error::Io(_) => ErrorKind::Other,
            Error::Precondition(_) => ErrorKind::PreconditionMissing,
            Error::String(_) => ErrorKind::Other,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::Auth(mesg) => Display::fmt(&format!("auth: {mesg}"), f),
            Error::Http(status_code, mesg) => Display::fmt(&format!("{status_code}: {mesg}"), f),
            Error::Io(mesg) => Display::fmt(&format!("io: {mesg}"), f),
            Error::Precondition(mesg) => Display::fmt(mesg, f),
            Error::String(s) => Display::fmt(&s, f),
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::PreconditionMissing => Display::fmt("precondition missing", f),
            Self::AuthFailure => Display::fmt("auth failure", f),
            Self::NotFound => Display::fmt("not found", f),
            Self::Transport => Display::fmt("transport error", f),
            Self::Other => Display::fmt("other", f),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
