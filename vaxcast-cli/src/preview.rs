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

//! Fetches the statistics and prints the status without posting it.

use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use vaxcast::datasource;
use vaxcast::status;

pub fn command_args() -> App<'static, 'static> {
    SubCommand::with_name("preview")
        .about("Fetches the statistics and prints the status without posting")
        .setting(AppSettings::DisableVersion)
}

pub async fn command(_matches: &ArgMatches<'_>) -> Result<()> {
    let client = datasource::http_client()?;
    let (stats, daily) = datasource::fetch_all(&client).await?;
    println!("{}", status::compose(&stats, &daily));
    Ok(())
}
