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

//! This module provides the default configurations for Vaxcast. All settings
//! are fixed at deployment, not request parameters.

use ini::Ini;
use lazy_static::lazy_static;
use std::time::Duration;

lazy_static! {
    /// Global settings.
    pub static ref VAXCAST_CONF: Ini = Ini::load_from_str(include_str!("../config.toml")).unwrap();

    /// The ikon.mn vaccination statistics endpoint.
    pub static ref VAXCAST_IKON_API_URL: String = VAXCAST_CONF["api"]["ikon_vaccine_url"].to_string();
    /// The e-mongolia.mn daily COVID statistics endpoint.
    pub static ref VAXCAST_E_MONGOLIA_API_URL: String = VAXCAST_CONF["api"]["e_mongolia_daily_url"].to_string();
    /// Timeout applied to every outbound HTTP request.
    pub static ref VAXCAST_HTTP_TIMEOUT: Duration = humantime::parse_duration(&VAXCAST_CONF["api"]["timeout"]).unwrap();

    /// The ordered glyph palette, from the empty glyph to the full glyph.
    pub static ref VAXCAST_BAR_STYLE: Vec<char> = VAXCAST_CONF["bar"]["style"].chars().collect();
    /// The largest candidate bar width.
    pub static ref VAXCAST_BAR_MAX_SIZE: usize = VAXCAST_CONF["bar"]["max_size"].parse::<usize>().unwrap();
    /// The smallest candidate bar width.
    pub static ref VAXCAST_BAR_MIN_SIZE: usize = VAXCAST_CONF["bar"]["min_size"].parse::<usize>().unwrap();

    /// The request header carrying the caller's shared secret.
    pub static ref VAXCAST_AUTH_HEADER: String = VAXCAST_CONF["auth"]["header"].to_string();

    /// The Twitter `statuses/update` endpoint.
    pub static ref VAXCAST_STATUS_UPDATE_URL: String = VAXCAST_CONF["twitter"]["status_update_url"].to_string();
    /// The public timeline advertised in the success response.
    pub static ref VAXCAST_TIMELINE_URL: String = VAXCAST_CONF["twitter"]["timeline_url"].to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_shows() {
        let conf = Ini::load_from_str(include_str!("../config.toml")).unwrap();

        for (sec, prop) in &conf {
            println!("Section: {:?}", sec);
            for (key, value) in prop.iter() {
                println!("{:?}:{:?}", key, value);
            }
        }

        assert_eq!(20, (&conf["bar"]["max_size"]).parse::<usize>().unwrap());
        assert_eq!(20, (&conf["bar"]["min_size"]).parse::<usize>().unwrap());
        assert_eq!("x-mnvaccinetracker-key", &conf["auth"]["header"]);
    }

    #[test]
    fn palette_holds_seven_glyphs() {
        assert_eq!(7, VAXCAST_BAR_STYLE.len());
        assert_eq!(Some(&'⣀'), VAXCAST_BAR_STYLE.first());
        assert_eq!(Some(&'⣿'), VAXCAST_BAR_STYLE.last());
    }

    #[test]
    fn timeout_parses_as_duration() {
        assert_eq!(Duration::from_secs(30), *VAXCAST_HTTP_TIMEOUT);
    }
}
