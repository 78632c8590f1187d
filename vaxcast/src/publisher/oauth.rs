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

//! OAuth 1.0a request signing for the Twitter API.
//!
//! Implements the subset of RFC 5849 that `statuses/update` needs:
//! percent-encoding over the unreserved set, parameter normalization, the
//! signature base string, and an HMAC-SHA1 signature. Signing is
//! deterministic given the nonce and the timestamp.

use super::TwitterCredentials;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Everything except ALPHA / DIGIT / "-" / "." / "_" / "~" is escaped.
const RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `input` over the RFC 5849 unreserved set.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, RESERVED).to_string()
}

/// Generates a random alphanumeric nonce.
pub fn nonce() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// The current Unix time, as the `oauth_timestamp` value.
pub fn timestamp() -> String {
    Utc::now().timestamp().to_string()
}

/// Computes the OAuth 1.0a signature of a request.
///
/// `params` must hold every `oauth_*` protocol parameter plus all query and
/// body parameters of the request.
pub fn sign(
    method: &str,
    url: &str,
    params: &[(String, String)],
    credentials: &TwitterCredentials,
) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let base = format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&normalized)
    );

    let key = format!(
        "{}&{}",
        percent_encode(&credentials.consumer_secret),
        percent_encode(&credentials.access_token_secret)
    );

    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any size");
    mac.update(base.as_bytes());
    base64::encode(mac.finalize().into_bytes())
}

/// Builds the `Authorization` header of a request.
///
/// `body_params` take part in the signature but stay out of the header.
pub fn authorization_header(
    method: &str,
    url: &str,
    body_params: &[(&str, &str)],
    credentials: &TwitterCredentials,
    nonce: &str,
    timestamp: &str,
) -> String {
    let mut params: Vec<(String, String)> = vec![
        (
            "oauth_consumer_key".to_string(),
            credentials.consumer_key.clone(),
        ),
        ("oauth_nonce".to_string(), nonce.to_string()),
        (
            "oauth_signature_method".to_string(),
            "HMAC-SHA1".to_string(),
        ),
        ("oauth_timestamp".to_string(), timestamp.to_string()),
        ("oauth_token".to_string(), credentials.access_token.clone()),
        ("oauth_version".to_string(), "1.0".to_string()),
    ];
    params.extend(body_params.iter().map(|(k, v)| (k.to_string(), v.to_string())));

    let signature = sign(method, url, &params, credentials);

    let mut header_params: Vec<(String, String)> = params
        .into_iter()
        .filter(|(k, _)| k.starts_with("oauth_"))
        .collect();
    header_params.push(("oauth_signature".to_string(), signature));
    header_params.sort();

    let fields = header_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {}", fields)
}
