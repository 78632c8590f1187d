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

mod args;
mod bar;
mod post;
mod preview;

use anyhow::Result;
use clap::{crate_version, App, AppSettings};

#[tokio::main]
pub async fn main() -> Result<()> {
    // Command line arg parsing and configuration.
    let matches = App::new("Vaxcast")
        .version(crate_version!())
        .about("Command Line Companion for Vaxcast")
        .author("UMD Database Group")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .args(&args::get_args())
        .subcommand(bar::command_args())
        .subcommand(preview::command_args())
        .subcommand(post::command_args())
        .get_matches();

    args::get_logging(&matches)?.try_init()?;

    println!("{}", include_str!("./vaxcast"));

    match matches.subcommand() {
        ("bar", Some(matches)) => bar::command(matches),
        ("preview", Some(matches)) => preview::command(matches).await,
        ("post", Some(matches)) => post::command(matches).await,
        _ => {
            println!("{}", matches.usage());
            Ok(())
        }
    }
}
