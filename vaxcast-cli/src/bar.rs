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

//! Renders a progress bar in the terminal.

use anyhow::{anyhow, Context as _, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use vaxcast::bar::{pad, render};
use vaxcast::configs::{VAXCAST_BAR_MAX_SIZE, VAXCAST_BAR_STYLE};

pub fn command_args() -> App<'static, 'static> {
    SubCommand::with_name("bar")
        .about("Renders the textual progress bar for a percentage")
        .setting(AppSettings::DisableVersion)
        .arg(
            Arg::with_name("percentage")
                .short("p")
                .long("percentage")
                .help("Sets the percentage to render")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .help("Sets the display width in glyphs")
                .takes_value(true),
        )
}

pub fn command(matches: &ArgMatches) -> Result<()> {
    let percentage = matches
        .value_of("percentage")
        .unwrap()
        .parse::<f64>()
        .with_context(|| anyhow!("invalid percentage"))?;

    let width = match matches.value_of("width") {
        Some(width) => width
            .parse::<usize>()
            .with_context(|| anyhow!("invalid width"))?,
        None => *VAXCAST_BAR_MAX_SIZE,
    };

    let bar = pad(
        &render(percentage, width, width, &VAXCAST_BAR_STYLE),
        width,
        &VAXCAST_BAR_STYLE,
    );
    println!("{} {:.1}%", bar, percentage);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::App;

    #[test]
    fn percentage_is_required() {
        let result = App::new("test")
            .subcommand(command_args())
            .get_matches_from_safe(vec!["test", "bar"]);
        assert!(result.is_err());
    }

    #[test]
    fn renders_with_an_explicit_width() {
        let matches = App::new("test")
            .subcommand(command_args())
            .get_matches_from(vec!["test", "bar", "-p", "61.8", "-w", "10"]);
        let matches = match matches.subcommand() {
            ("bar", Some(matches)) => matches,
            _ => unreachable!(),
        };
        assert!(command(matches).is_ok());
    }
}
