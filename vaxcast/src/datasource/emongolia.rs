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

//! Client for the e-mongolia.mn daily COVID statistics API.

use crate::configs::VAXCAST_E_MONGOLIA_API_URL;
use crate::error::{Result, VaxcastError};
use serde::Deserialize;

/// The `{ "data": ... }` envelope the API wraps its report in.
#[derive(Debug, Deserialize)]
struct DailyEnvelope {
    #[serde(default)]
    data: DailyReport,
}

/// The daily report published by e-mongolia.mn. Counters the API omits are
/// reported as zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyReport {
    /// Human-readable date of the report.
    pub created_date_text: String,
    /// First doses administered on the reported day.
    pub vaccinated_dose1: u64,
    /// Second doses administered on the reported day.
    pub vaccinated_dose2: u64,
    /// Confirmed cases on the reported day.
    pub confirmed: u64,
    /// COVID deaths on the reported day.
    pub dead_covid: u64,
}

impl DailyReport {
    /// Doses administered on the reported day, across both series.
    pub fn vaccinated_today(&self) -> u64 {
        self.vaccinated_dose1 + self.vaccinated_dose2
    }
}

/// Extracts the daily report from an API response payload.
pub fn parse(payload: &str) -> Result<DailyReport> {
    let envelope: DailyEnvelope = serde_json::from_str(payload)?;
    Ok(envelope.data)
}

/// Fetches the daily report.
pub async fn fetch(client: &reqwest::Client) -> Result<DailyReport> {
    let payload = client
        .get(VAXCAST_E_MONGOLIA_API_URL.as_str())
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
    use crate::test_util::E_MONGOLIA_FIXTURE;

    #[test]
    fn parse_captured_payload() {
        let daily = parse(E_MONGOLIA_FIXTURE).unwrap();
        assert_eq!("2021-12-05", daily.created_date_text);
        assert_eq!(529, daily.vaccinated_dose1);
        assert_eq!(1076, daily.vaccinated_dose2);
        assert_eq!(1605, daily.vaccinated_today());
        assert_eq!(229, daily.confirmed);
        assert_eq!(2, daily.dead_covid);
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let daily = parse(r#"{ "data": { "createdDateText": "2021-12-05" } }"#).unwrap();
        assert_eq!("2021-12-05", daily.created_date_text);
        assert_eq!(0, daily.vaccinated_today());
        assert_eq!(0, daily.confirmed);
        assert_eq!(0, daily.dead_covid);
    }

    #[test]
    fn missing_envelope_defaults_the_report() {
        let daily = parse("{}").unwrap();
        assert_eq!(DailyReport::default(), daily);
    }
}
