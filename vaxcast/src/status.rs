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

//! Composes the posted status text.

use crate::bar;
use crate::configs::{VAXCAST_BAR_MAX_SIZE, VAXCAST_BAR_MIN_SIZE, VAXCAST_BAR_STYLE};
use crate::datasource::{DailyReport, Dose, VaccineStats};
use crate::error::Result;
use crate::publisher::Publisher;

/// The status posted once the vaccination target is reached.
pub const TARGET_REACHED_STATUS: &str =
    "We, Mongolians, have reached the target of fully vaccinated people. 🎉🥳👏";

/// Composes the status text for the given statistics.
///
/// Once the target is reached the status is the celebration text alone;
/// until then it carries the daily numbers and one bar per dose series.
pub fn compose(stats: &VaccineStats, daily: &DailyReport) -> String {
    if stats.target_reached() {
        return TARGET_REACHED_STATUS.to_string();
    }

    let mut status = String::new();
    status.push_str(&format!("Date: {}\n", daily.created_date_text));
    status.push_str(&format!(
        "Today vaccinated {}, cases: {}, dead: {}",
        daily.vaccinated_today(),
        daily.confirmed,
        daily.dead_covid
    ));
    status.push_str("\nTotal vaccination rate:\n");

    for dose in Dose::ALL {
        let percentage = stats.percentage(dose);
        let rendered = bar::render(
            percentage,
            *VAXCAST_BAR_MIN_SIZE,
            *VAXCAST_BAR_MAX_SIZE,
            &VAXCAST_BAR_STYLE,
        );
        let bar = bar::pad(&rendered, *VAXCAST_BAR_MAX_SIZE, &VAXCAST_BAR_STYLE);
        status.push_str(&format!("{}  {} {:.1}%\n", dose.emoji(), bar, percentage));
    }

    status
}

/// Composes the status and hands it to `publisher`.
///
/// Returns the composed status on success.
pub async fn compose_and_publish(
    stats: &VaccineStats,
    daily: &DailyReport,
    publisher: &dyn Publisher,
) -> Result<String> {
    let status = compose(stats, daily);
    publisher.publish(&status).await?;
    Ok(status)
}
