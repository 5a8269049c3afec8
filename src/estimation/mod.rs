//! Function point estimation engine.
//!
//! [`calculate`] is a pure, deterministic transform from classified
//! components and a project configuration to a full [`FpaCalculations`]
//! snapshot. It performs no I/O, never fails, and substitutes zero for the
//! few divisions it guards (PFA, daily hours, total points, PFNA). Division by
//! `team_size` is left unguarded, so configurations should be checked with
//! [`crate::config::validate_project_config`] first.
//!
//! # Example
//!
//! ```rust
//! use fpa_estimator::core::{ComponentDetail, ProjectConfig};
//! use fpa_estimator::estimation::calculate;
//!
//! let components = vec![ComponentDetail::new("c1", "ALI", 10.0, "LOW")];
//! let config = ProjectConfig {
//!     average_daily_working_hours: 8.0,
//!     team_size: 1,
//!     hourly_rate_brl: 100.0,
//!     productivity_factor: 10.0,
//!     general_system_characteristics: None,
//! };
//!
//! let result = calculate(&components, &config, None);
//! assert_eq!(result.pfa, 10.0);
//! assert_eq!(result.effort_hours, 100.0);
//! assert_eq!(result.duration_days, 12.5);
//! ```

pub mod breakdown;
pub mod function_points;
pub mod memo;
pub mod productivity;
pub mod schedule;

pub use breakdown::{
    BreakdownEntry, BreakdownTotal, ComplexityBreakdown, ComponentBreakdown, CostBreakdown,
    PhaseBreakdown, PhaseEntry,
};
pub use memo::{MemoStats, MemoizedCalculator};
pub use productivity::{IndustryComparison, ProductivityMetrics, ProductivityRating};
pub use schedule::Schedule;

use crate::core::{ComponentDetail, ProjectConfig};
use crate::i18n::Translate;
use crate::risk::{self, RiskAnalysis, RiskInputs};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FpaCalculations {
    /// Unadjusted function points
    pub pfna: f64,
    /// Total degree of influence
    pub ni: f64,
    /// Value adjustment factor
    pub fa: f64,
    /// Adjusted function points
    pub pfa: f64,
    pub effort_hours: f64,
    pub duration_days: f64,
    pub duration_weeks: f64,
    pub duration_months: f64,
    pub total_cost: f64,
    pub cost_per_function_point: f64,
    pub cost_per_person: f64,
    pub hours_per_person: f64,
    pub component_breakdown: ComponentBreakdown,
    pub complexity_breakdown: ComplexityBreakdown,
    pub phase_breakdown: PhaseBreakdown,
    pub cost_breakdown: CostBreakdown,
    pub productivity_metrics: ProductivityMetrics,
    pub risk_analysis: RiskAnalysis,
}

pub fn calculate(
    components: &[ComponentDetail],
    config: &ProjectConfig,
    translate: Option<&dyn Translate>,
) -> FpaCalculations {
    let gsc = config.general_system_characteristics.as_ref();

    let pfna = function_points::unadjusted(components);
    let ni = function_points::influence_total(gsc);
    let fa = function_points::value_adjustment_factor(gsc);
    let pfa = function_points::adjusted(pfna, fa);

    let schedule = schedule::derive(pfa, config);

    let component_breakdown = breakdown::components(components);
    let complexity_breakdown = breakdown::complexity(components, pfna);
    let phase_breakdown = breakdown::phases(schedule.effort_hours);
    let cost_breakdown = breakdown::costs(
        schedule.effort_hours,
        config.hourly_rate_brl,
        schedule.total_cost,
    );

    let productivity_metrics = productivity::metrics(schedule.effort_hours, pfa, config);

    let risk_analysis = risk::assess(
        &RiskInputs {
            team_size: config.team_size,
            duration_days: schedule.duration_days,
            high_complexity_percentage: complexity_breakdown.high.percentage,
            productivity_factor: config.productivity_factor,
        },
        translate,
    );

    tracing::debug!(
        components = components.len(),
        pfna,
        pfa,
        effort_hours = schedule.effort_hours,
        overall_risk = %risk_analysis.overall_risk,
        "function point calculation complete"
    );

    FpaCalculations {
        pfna,
        ni,
        fa,
        pfa,
        effort_hours: schedule.effort_hours,
        duration_days: schedule.duration_days,
        duration_weeks: schedule.duration_weeks,
        duration_months: schedule.duration_months,
        total_cost: schedule.total_cost,
        cost_per_function_point: schedule.cost_per_function_point,
        cost_per_person: schedule.cost_per_person,
        hours_per_person: schedule.hours_per_person,
        component_breakdown,
        complexity_breakdown,
        phase_breakdown,
        cost_breakdown,
        productivity_metrics,
        risk_analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeneralSystemCharacteristics;
    use crate::risk::RiskLevel;

    fn base_config() -> ProjectConfig {
        ProjectConfig {
            average_daily_working_hours: 8.0,
            team_size: 1,
            hourly_rate_brl: 100.0,
            productivity_factor: 10.0,
            general_system_characteristics: None,
        }
    }

    #[test]
    fn test_empty_estimate_degrades_to_zero() {
        let result = calculate(&[], &base_config(), None);
        assert_eq!(result.pfna, 0.0);
        assert_eq!(result.fa, 1.0);
        assert_eq!(result.pfa, 0.0);
        assert_eq!(result.effort_hours, 0.0);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.cost_per_function_point, 0.0);
        assert_eq!(result.component_breakdown.total.count, 0);
        let levels = result.complexity_breakdown.entries();
        assert!(levels.iter().all(|(_, e)| e.percentage == 0.0));
    }

    #[test]
    fn test_gsc_adjusts_points() {
        let mut config = base_config();
        let gsc = GeneralSystemCharacteristics::uniform(5).unwrap();
        config.general_system_characteristics = Some(gsc);
        let components = vec![ComponentDetail::new("1", "EI", 20.0, "MEDIUM")];
        let result = calculate(&components, &config, None);
        assert_eq!(result.ni, 70.0);
        assert!((result.fa - 1.35).abs() < 1e-12);
        assert_eq!(result.pfa, 20.0 * result.fa);
        assert_eq!(result.effort_hours, result.pfa * 10.0);
    }

    #[test]
    fn test_cost_breakdown_total_is_overall_cost() {
        let components = vec![ComponentDetail::new("1", "ALI", 10.0, "LOW")];
        let result = calculate(&components, &base_config(), None);
        assert_eq!(result.cost_breakdown.total, result.total_cost);
    }

    #[test]
    fn test_high_complexity_share_feeds_risk() {
        let components = vec![
            ComponentDetail::new("1", "ALI", 30.0, "HIGH"),
            ComponentDetail::new("2", "EI", 20.0, "LOW"),
        ];
        let result = calculate(&components, &base_config(), None);
        assert_eq!(result.complexity_breakdown.high.percentage, 60.0);
        assert_eq!(
            result.risk_analysis.factors.complexity.risk,
            RiskLevel::High
        );
    }
}
