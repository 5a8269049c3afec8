//! Effort, duration and cost derived from adjusted function points.

use crate::core::ProjectConfig;
use serde::{Deserialize, Serialize};

/// Working days in a week.
pub const DAYS_PER_WEEK: f64 = 5.0;

/// Working days in a month.
pub const DAYS_PER_MONTH: f64 = 21.0;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub effort_hours: f64,
    pub duration_days: f64,
    pub duration_weeks: f64,
    pub duration_months: f64,
    pub total_cost: f64,
    pub cost_per_function_point: f64,
    pub cost_per_person: f64,
    pub hours_per_person: f64,
}

/// Derive the schedule for `pfa` adjusted function points.
///
/// Divisions by `team_size` and `average_daily_working_hours` are not
/// guarded: a zero there yields `inf`/`NaN`, and callers are expected to
/// validate the configuration first.
pub fn derive(pfa: f64, config: &ProjectConfig) -> Schedule {
    let team_size = f64::from(config.team_size);
    let effort_hours = pfa * config.productivity_factor;

    let duration_days = effort_hours / (team_size * config.average_daily_working_hours);
    let total_cost = effort_hours * config.hourly_rate_brl;
    let cost_per_function_point = if pfa == 0.0 { 0.0 } else { total_cost / pfa };

    Schedule {
        effort_hours,
        duration_days,
        duration_weeks: duration_days / DAYS_PER_WEEK,
        duration_months: duration_days / DAYS_PER_MONTH,
        total_cost,
        cost_per_function_point,
        cost_per_person: total_cost / team_size,
        hours_per_person: effort_hours / team_size,
    }
}
