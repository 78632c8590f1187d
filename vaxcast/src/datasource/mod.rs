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

//! The upstream statistics sources. Both are treated as black-box JSON APIs;
//! each module owns the payload shape of one source.

pub mod emongolia;
pub mod ikon;

pub use emongolia::DailyReport;
pub use ikon::{Dose, VaccineStats};

use crate::configs::VAXCAST_HTTP_TIMEOUT;
use crate::error::Result;
use futures::future::try_join;
use log::info;

/// Builds the HTTP client shared by the upstream fetches.
pub fn http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(*VAXCAST_HTTP_TIMEOUT)
        .build()?;
    Ok(client)
}

/// Fetches both upstream statistics concurrently.
///
/// The two reads are independent; either failure aborts the pair.
pub async fn fetch_all(client: &reqwest::Client) -> Result<(VaccineStats, DailyReport)> {
    info!("Fetching data from ikon and e-mongolia");
    try_join(ikon::fetch(client), emongolia::fetch(client)).await
}
