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

//! Common unit test utility methods.

use crate::datasource::{emongolia, ikon, DailyReport, VaccineStats};
use crate::error::Result;
use crate::publisher::Publisher;
use async_trait::async_trait;
use std::sync::Mutex;

/// A captured ikon.mn payload.
pub const IKON_FIXTURE: &str =
    r#"{ "target": 2200000, "progress": 2041793, "completed": 1959836, "d3": 817992 }"#;

/// A captured e-mongolia.mn payload.
pub const E_MONGOLIA_FIXTURE: &str = r#"{
    "data": {
        "createdDateText": "2021-12-05",
        "vaccinatedDose1": 529,
        "vaccinatedDose2": 1076,
        "confirmed": 229,
        "deadCovid": 2
    }
}"#;

/// Deserializes the captured ikon.mn payload.
pub fn sample_vaccine_stats() -> VaccineStats {
    ikon::parse(IKON_FIXTURE).unwrap()
}

/// Deserializes the captured e-mongolia.mn payload.
pub fn sample_daily_report() -> DailyReport {
    emongolia::parse(E_MONGOLIA_FIXTURE).unwrap()
}

/// A publisher that records statuses instead of posting them.
#[derive(Debug, Default)]
pub struct CapturePublisher {
    /// Statuses received, in publish order.
    pub statuses: Mutex<Vec<String>>,
}

#[async_trait]
impl Publisher for CapturePublisher {
    async fn publish(&self, status: &str) -> Result<()> {
        self.statuses.lock().unwrap().push(status.to_string());
        Ok(())
    }
}
