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

//! The Twitter `statuses/update` client.

use super::{oauth, Publisher, TwitterCredentials};
use crate::configs::{VAXCAST_HTTP_TIMEOUT, VAXCAST_STATUS_UPDATE_URL};
use crate::error::{Result, VaxcastError};
use async_trait::async_trait;
use log::info;

/// Posts status updates to a Twitter account.
#[derive(Debug, Clone)]
pub struct TwitterPublisher {
    credentials: TwitterCredentials,
    client: reqwest::Client,
    endpoint: String,
}

impl TwitterPublisher {
    /// Creates a publisher for the configured `statuses/update` endpoint.
    pub fn try_new(credentials: TwitterCredentials) -> Result<TwitterPublisher> {
        let client = reqwest::Client::builder()
            .timeout(*VAXCAST_HTTP_TIMEOUT)
            .build()?;
        Ok(Self::with_client(
            credentials,
            client,
            VAXCAST_STATUS_UPDATE_URL.clone(),
        ))
    }

    /// Creates a publisher with an explicit client and endpoint.
    pub fn with_client(
        credentials: TwitterCredentials,
        client: reqwest::Client,
        endpoint: String,
    ) -> TwitterPublisher {
        TwitterPublisher {
            credentials,
            client,
            endpoint,
        }
    }
}

#[async_trait]
impl Publisher for TwitterPublisher {
    async fn publish(&self, status: &str) -> Result<()> {
        let authorization = oauth::authorization_header(
            "POST",
            &self.endpoint,
            &[("status", status)],
            &self.credentials,
            &oauth::nonce(),
            &oauth::timestamp(),
        );

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header("Authorization", authorization)
            .form(&[("status", status)])
            .send()
            .await?;

        if !response.status().is_success() {
            let code = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VaxcastError::Publish(format!("{}: {}", code, body)));
        }

        info!("Status update posted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> TwitterCredentials {
        TwitterCredentials {
            consumer_key: "ck".to_string(),
            consumer_secret: "cs".to_string(),
            access_token: "at".to_string(),
            access_token_secret: "ats".to_string(),
        }
    }

    #[test]
    fn with_client_keeps_the_given_endpoint() {
        let publisher = TwitterPublisher::with_client(
            credentials(),
            reqwest::Client::new(),
            "http://localhost:8080/statuses/update.json".to_string(),
        );
        assert_eq!("http://localhost:8080/statuses/update.json", publisher.endpoint);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_publish_failure() {
        // Nothing listens on the reserved TEST-NET-1 block.
        let publisher = TwitterPublisher::with_client(
            credentials(),
            reqwest::Client::builder()
                .timeout(std::time::Duration::from_millis(250))
                .build()
                .unwrap(),
            "http://192.0.2.1/statuses/update.json".to_string(),
        );
        assert!(publisher.publish("hello").await.is_err());
    }
}
