// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Vaxcast error types.

use std::error;
use std::fmt::{Display, Formatter};
use std::result;

/// Result type for operations that could result in a [`VaxcastError`].
pub type Result<T> = result::Result<T, VaxcastError>;

/// Vaxcast error.
#[derive(Debug)]
pub enum VaxcastError {
    /// Error returned by the HTTP transport.
    Http(String),
    /// Error returned when an upstream payload cannot be used.
    DataSource(String),
    /// Error returned by serde_json.
    SerdeJson(serde_json::Error),
    /// Error returned when the posting credentials are missing or unusable.
    Credentials(String),
    /// Error returned when the status update is rejected by Twitter.
    Publish(String),
    /// Internal error.
    Internal(String),
}

impl From<serde_json::Error> for VaxcastError {
    fn from(e: serde_json::Error) -> Self {
        VaxcastError::SerdeJson(e)
    }
}

impl From<reqwest::Error> for VaxcastError {
    fn from(e: reqwest::Error) -> Self {
        VaxcastError::Http(e.to_string())
    }
}

impl Display for VaxcastError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            VaxcastError::Http(desc) => write!(f, "HTTP error: {}", desc),
            VaxcastError::DataSource(desc) => write!(f, "Data source error: {}", desc),
            VaxcastError::SerdeJson(desc) => write!(f, "serde_json error: {}", desc),
            VaxcastError::Credentials(desc) => write!(f, "Credentials error: {}", desc),
            VaxcastError::Publish(desc) => write!(f, "Publish error: {}", desc),
            VaxcastError::Internal(desc) => write!(f, "Internal error: {}", desc),
        }
    }
}

impl error::Error for VaxcastError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: VaxcastError = err.into();
        assert!(matches!(err, VaxcastError::SerdeJson(_)));
        assert!(err.to_string().starts_with("serde_json error"));
    }
}
