//! Productivity metrics and the comparison against the industry benchmark.

use super::schedule::DAYS_PER_MONTH;
use crate::core::ProjectConfig;
use serde::{Deserialize, Serialize};

/// Industry reference for hours spent per adjusted function point.
pub const BENCHMARK_HOURS_PER_FP: f64 = 12.0;

/// Performance index below which productivity is rated HIGH.
pub const HIGH_PRODUCTIVITY_INDEX: f64 = 80.0;

/// Performance index above which productivity is rated LOW.
pub const LOW_PRODUCTIVITY_INDEX: f64 = 120.0;

/// Productivity relative to the benchmark. Fewer hours per point rates HIGH.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductivityRating {
    High,
    Average,
    Low,
}

impl ProductivityRating {
    pub fn from_index(performance_index: f64) -> Self {
        if performance_index < HIGH_PRODUCTIVITY_INDEX {
            Self::High
        } else if performance_index > LOW_PRODUCTIVITY_INDEX {
            Self::Low
        } else {
            Self::Average
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Average => "AVERAGE",
            Self::Low => "LOW",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryComparison {
    #[serde(rename = "benchmarkHoursPerFP")]
    pub benchmark_hours_per_fp: f64,
    pub performance_index: f64,
    pub rating: ProductivityRating,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityMetrics {
    pub hours_per_function_point: f64,
    pub function_points_per_day: f64,
    pub function_points_per_person_month: f64,
    pub team_efficiency: f64,
    pub industry_comparison: IndustryComparison,
}

/// Efficiency multiplier that shrinks as the team grows.
pub fn team_efficiency(team_size: u32) -> f64 {
    match team_size {
        0..=3 => 1.0,
        4..=6 => 0.95,
        7..=10 => 0.85,
        _ => 0.75,
    }
}

pub fn metrics(effort_hours: f64, pfa: f64, config: &ProjectConfig) -> ProductivityMetrics {
    let hours_per_function_point = if pfa == 0.0 { 0.0 } else { effort_hours / pfa };

    let performance_index = if BENCHMARK_HOURS_PER_FP == 0.0 {
        100.0
    } else {
        hours_per_function_point / BENCHMARK_HOURS_PER_FP * 100.0
    };

    let function_points_per_day = if config.average_daily_working_hours <= 0.0 {
        0.0
    } else {
        config.average_daily_working_hours / config.productivity_factor
    };

    ProductivityMetrics {
        hours_per_function_point,
        function_points_per_day,
        function_points_per_person_month: function_points_per_day * DAYS_PER_MONTH,
        team_efficiency: team_efficiency(config.team_size),
        industry_comparison: IndustryComparison {
            benchmark_hours_per_fp: BENCHMARK_HOURS_PER_FP,
            performance_index,
            rating: ProductivityRating::from_index(performance_index),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(productivity_factor: f64, team_size: u32) -> ProjectConfig {
        ProjectConfig {
            average_daily_working_hours: 8.0,
            team_size,
            hourly_rate_brl: 50.0,
            productivity_factor,
            general_system_characteristics: None,
        }
    }

    #[test]
    fn test_rating_is_inverted_relative_to_hours() {
        use ProductivityRating::*;
        assert_eq!(ProductivityRating::from_index(79.9), High);
        assert_eq!(ProductivityRating::from_index(80.0), Average);
        assert_eq!(ProductivityRating::from_index(120.0), Average);
        assert_eq!(ProductivityRating::from_index(120.1), Low);
    }

    #[test]
    fn test_rating_wire_spelling_matches_as_str() {
        for rating in [
            ProductivityRating::High,
            ProductivityRating::Average,
            ProductivityRating::Low,
        ] {
            let value = serde_json::to_value(rating).unwrap();
            assert_eq!(value, rating.as_str());
        }
        assert_eq!(
            serde_json::to_value(ProductivityRating::Average).unwrap(),
            "AVERAGE"
        );
    }

    #[test]
    fn test_benchmark_productivity_is_average() {
        let m = metrics(1200.0, 100.0, &config(12.0, 2));
        assert_eq!(m.hours_per_function_point, 12.0);
        assert_eq!(m.industry_comparison.performance_index, 100.0);
        assert_eq!(m.industry_comparison.rating, ProductivityRating::Average);
        assert_eq!(m.industry_comparison.benchmark_hours_per_fp, 12.0);
    }

    #[test]
    fn test_points_per_day_and_month() {
        let m = metrics(100.0, 10.0, &config(10.0, 1));
        assert_eq!(m.function_points_per_day, 0.8);
        assert_eq!(m.function_points_per_person_month, 0.8 * 21.0);
        // 10 h/FP is 83% of the benchmark.
        assert_eq!(m.industry_comparison.rating, ProductivityRating::Average);
    }

    #[test]
    fn test_zero_pfa_rates_high() {
        let m = metrics(0.0, 0.0, &config(10.0, 1));
        assert_eq!(m.hours_per_function_point, 0.0);
        assert_eq!(m.industry_comparison.performance_index, 0.0);
        assert_eq!(m.industry_comparison.rating, ProductivityRating::High);
    }

    #[test]
    fn test_non_positive_hours_guard_points_per_day() {
        let mut cfg = config(10.0, 1);
        cfg.average_daily_working_hours = 0.0;
        assert_eq!(metrics(10.0, 1.0, &cfg).function_points_per_day, 0.0);
    }

    #[test]
    fn test_team_efficiency_steps() {
        assert_eq!(team_efficiency(1), 1.0);
        assert_eq!(team_efficiency(3), 1.0);
        assert_eq!(team_efficiency(4), 0.95);
        assert_eq!(team_efficiency(6), 0.95);
        assert_eq!(team_efficiency(7), 0.85);
        assert_eq!(team_efficiency(10), 0.85);
        assert_eq!(team_efficiency(11), 0.75);
    }
}
