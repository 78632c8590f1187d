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

//! Fetches the statistics and posts the status update.

use anyhow::{Context as _, Result};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::info;
use vaxcast::datasource;
use vaxcast::publisher::{TwitterCredentials, TwitterPublisher};
use vaxcast::status;

pub fn command_args() -> App<'static, 'static> {
    SubCommand::with_name("post")
        .about("Fetches the statistics and posts the status update")
        .setting(AppSettings::DisableVersion)
}

pub async fn command(_matches: &ArgMatches<'_>) -> Result<()> {
    let credentials =
        TwitterCredentials::from_env().context("Twitter credentials are not configured")?;
    let client = datasource::http_client()?;
    let (stats, daily) = datasource::fetch_all(&client).await?;

    let publisher = TwitterPublisher::try_new(credentials)?;
    let status = status::compose_and_publish(&stats, &daily, &publisher).await?;
    info!("Posted status update:\n{}", status);

    Ok(())
}
