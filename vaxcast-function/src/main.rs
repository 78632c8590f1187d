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

//! The main entry point for the status update function.
//!
//! API Gateway proxies the inbound request here. The handler checks the
//! shared-secret header, reads both upstream statistics, composes the status
//! and posts it, then answers with a short text body.

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use http::HeaderMap;
use lambda_runtime::{service_fn, LambdaEvent};
use log::{info, warn};
use vaxcast::prelude::*;

async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<ApiGatewayProxyResponse> {
    let (request, _context) = event.into_parts();
    let credentials = TwitterCredentials::from_env()?;

    if !authorized(&request.headers, &credentials.access_token) {
        info!("Not authorized");
        return Ok(response(401, "Not authorized"));
    }

    let client = datasource::http_client()?;
    let (stats, daily) = match datasource::fetch_all(&client).await {
        Ok(data) => data,
        Err(e) => {
            warn!("Upstream fetch failed: {}", e);
            return Ok(response(400, &e.to_string()));
        }
    };

    let publisher = TwitterPublisher::try_new(credentials)?;
    match status::compose_and_publish(&stats, &daily, &publisher).await {
        Ok(_) => Ok(response(
            200,
            &format!("Tweeted successfully. See more at {}", &*VAXCAST_TIMELINE_URL),
        )),
        Err(e) => {
            warn!("Status update failed: {}", e);
            Ok(response(400, "An error occurred"))
        }
    }
}

/// Compares the shared secret in the request headers against `token`.
fn authorized(headers: &HeaderMap, token: &str) -> bool {
    headers
        .get(VAXCAST_AUTH_HEADER.as_str())
        .and_then(|value| value.to_str().ok())
        .map(|value| value == token)
        .unwrap_or(false)
}

fn response(status_code: i64, body: &str) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code,
        body: Some(Body::Text(body.to_string())),
        ..Default::default()
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), lambda_runtime::Error> {
    env_logger::init();
    lambda_runtime::run(service_fn(handler)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{HeaderName, HeaderValue};
    use lambda_runtime::Context;
    use std::env;

    fn headers_with_secret(secret: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-mnvaccinetracker-key"),
            HeaderValue::from_static(secret),
        );
        headers
    }

    #[test]
    fn matching_secret_is_authorized() {
        assert!(authorized(&headers_with_secret("sesame"), "sesame"));
    }

    #[test]
    fn wrong_or_absent_secret_is_rejected() {
        assert!(!authorized(&headers_with_secret("sesame"), "mustard"));
        assert!(!authorized(&HeaderMap::new(), "sesame"));
    }

    #[test]
    fn response_wraps_the_body_as_text() {
        let response = response(401, "Not authorized");
        assert_eq!(401, response.status_code);
        assert_eq!(Some(Body::Text("Not authorized".to_string())), response.body);
    }

    #[tokio::test]
    async fn unauthorized_request_gets_a_401() {
        env::set_var("CONSUMER_KEY", "ck");
        env::set_var("CONSUMER_SECRET", "cs");
        env::set_var("ACCESS_TOKEN", "at");
        env::set_var("ACCESS_TOKEN_SECRET", "ats");

        let event = LambdaEvent::new(ApiGatewayProxyRequest::default(), Context::default());
        let response = handler(event).await.unwrap();
        assert_eq!(401, response.status_code);
        assert_eq!(Some(Body::Text("Not authorized".to_string())), response.body);
    }
}
