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

//! Client for the ikon.mn vaccination statistics API.

use crate::configs::VAXCAST_IKON_API_URL;
use crate::error::{Result, VaxcastError};
use serde::Deserialize;

/// One dose series of the vaccination campaign, in the order it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dose {
    /// The first dose.
    First,
    /// The second dose; people counted here are fully vaccinated.
    Second,
    /// The third (booster) dose.
    Third,
}

impl Dose {
    /// All dose series, in reporting order.
    pub const ALL: [Dose; 3] = [Dose::First, Dose::Second, Dose::Third];

    /// The keycap numeral shown in front of the dose's bar.
    pub fn emoji(&self) -> &'static str {
        match self {
            Dose::First => "1️⃣",
            Dose::Second => "2️⃣",
            Dose::Third => "3️⃣",
        }
    }
}

/// Nationwide vaccination totals published by ikon.mn.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VaccineStats {
    /// The targeted number of fully vaccinated people.
    pub target: u64,
    /// People who have received their first dose.
    pub progress: u64,
    /// People who have received their second dose.
    pub completed: u64,
    /// People who have received their third dose.
    pub d3: u64,
}

impl VaccineStats {
    /// The number of people vaccinated with the given dose.
    pub fn dose_count(&self, dose: Dose) -> u64 {
        match dose {
            Dose::First => self.progress,
            Dose::Second => self.completed,
            Dose::Third => self.d3,
        }
    }

    /// The share of the target vaccinated with the given dose, in percent.
    ///
    /// Returns 0 while no target has been published.
    pub fn percentage(&self, dose: Dose) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        self.dose_count(dose) as f64 / self.target as f64 * 100.0
    }

    /// Whether the fully-vaccinated count has reached the target.
    pub fn target_reached(&self) -> bool {
        self.completed == self.target
    }
}

/// Extracts the vaccination totals from an API response payload.
pub fn parse(payload: &str) -> Result<VaccineStats> {
    Ok(serde_json::from_str(payload)?)
}

/// Fetches the current vaccination totals.
pub async fn fetch(client: &reqwest::Client) -> Result<VaccineStats> {
    let payload = client
        .get(VAXCAST_IKON_API_URL.as_str())
        .send()
        .await?
        .error_for_status()
        .map_err(|e| VaxcastError::DataSource(e.to_string()))?
        .text()
        .await?;
    parse(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::IKON_FIXTURE;

    #[test]
    fn parse_captured_payload() {
        let stats = parse(IKON_FIXTURE).unwrap();
        assert_eq!(2_200_000, stats.target);
        assert_eq!(2_041_793, stats.dose_count(Dose::First));
        assert_eq!(1_959_836, stats.dose_count(Dose::Second));
        assert_eq!(817_992, stats.dose_count(Dose::Third));
        assert!(!stats.target_reached());
    }

    #[test]
    fn percentage_is_a_share_of_the_target() {
        let stats = parse(IKON_FIXTURE).unwrap();
        assert!((stats.percentage(Dose::First) - 92.808_772_7).abs() < 1e-6);
        assert!((stats.percentage(Dose::Third) - 37.181_454_5).abs() < 1e-6);
    }

    #[test]
    fn zero_target_yields_zero_percentage() {
        let stats = VaccineStats {
            target: 0,
            progress: 12,
            completed: 3,
            d3: 0,
        };
        assert_eq!(0.0, stats.percentage(Dose::First));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let result = parse(r#"{ "progress": 1, "completed": 1 }"#);
        assert!(matches!(result, Err(crate::error::VaxcastError::SerdeJson(_))));
    }
}
