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

//! Posting the composed status to the outside world.

pub mod oauth;
mod twitter;

pub use twitter::TwitterPublisher;

use crate::error::{Result, VaxcastError};
use async_trait::async_trait;
use std::env;

/// A sink a composed status can be published to.
#[async_trait]
pub trait Publisher {
    /// Publishes `status`, consuming one outbound call.
    async fn publish(&self, status: &str) -> Result<()>;
}

/// OAuth 1.0a credentials of the posting account.
///
/// Credentials are explicit construction inputs of the publisher; nothing in
/// this crate reads them from ambient global state after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCredentials {
    /// The application's consumer key.
    pub consumer_key: String,
    /// The application's consumer secret.
    pub consumer_secret: String,
    /// The account's access token. Doubles as the shared secret expected in
    /// the inbound request header.
    pub access_token: String,
    /// The account's access token secret.
    pub access_token_secret: String,
}

impl TwitterCredentials {
    /// Loads the credentials from the environment.
    pub fn from_env() -> Result<TwitterCredentials> {
        Ok(TwitterCredentials {
            consumer_key: var("CONSUMER_KEY")?,
            consumer_secret: var("CONSUMER_SECRET")?,
            access_token: var("ACCESS_TOKEN")?,
            access_token_secret: var("ACCESS_TOKEN_SECRET")?,
        })
    }
}

fn var(name: &str) -> Result<String> {
    env::var(name)
        .map_err(|_| VaxcastError::Credentials(format!("No environment variable set: {}", name)))
}
