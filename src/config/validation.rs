//! Precondition checks for [`ProjectConfig`] with error accumulation.
//!
//! The engine divides by `team_size` and `average_daily_working_hours`
//! without guarding them, so configurations are checked here, at the
//! boundary, before a calculation is run. Every violation is reported, not
//! only the first one.

use crate::core::{Error, ProjectConfig, Result};
use stillwater::{NonEmptyVec, Validation};

/// Validation result carrying every violation message.
pub type ConfigValidation<T> = Validation<T, NonEmptyVec<String>>;

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn violations(config: &ProjectConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.team_size == 0 {
        errors.push("teamSize must be at least 1".to_string());
    }
    if !is_positive(config.average_daily_working_hours) {
        errors.push(format!(
            "averageDailyWorkingHours must be a positive number, got {}",
            config.average_daily_working_hours
        ));
    }
    if !(config.hourly_rate_brl.is_finite() && config.hourly_rate_brl >= 0.0) {
        errors.push(format!(
            "hourlyRateBRL must not be negative, got {}",
            config.hourly_rate_brl
        ));
    }
    if !is_positive(config.productivity_factor) {
        errors.push(format!(
            "productivityFactor must be a positive number, got {}",
            config.productivity_factor
        ));
    }

    errors
}

/// Accumulate all precondition violations of `config`.
pub fn check_project_config(config: &ProjectConfig) -> ConfigValidation<()> {
    match NonEmptyVec::from_vec(violations(config)) {
        None => Validation::Success(()),
        Some(errors) => Validation::Failure(errors),
    }
}

/// [`check_project_config`] as a `Result`.
pub fn validate_project_config(config: &ProjectConfig) -> Result<()> {
    match check_project_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(Error::validation(errors.into_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_project_config(&ProjectConfig::default()).is_ok());
    }

    #[test]
    fn test_all_violations_are_reported() {
        let config = ProjectConfig {
            average_daily_working_hours: 0.0,
            team_size: 0,
            hourly_rate_brl: -1.0,
            productivity_factor: f64::NAN,
            general_system_characteristics: None,
        };

        match validate_project_config(&config) {
            Err(Error::Validation { count, errors }) => {
                assert_eq!(count, 4);
                assert!(errors[0].contains("teamSize"));
                assert!(errors[1].contains("averageDailyWorkingHours"));
                assert!(errors[2].contains("hourlyRateBRL"));
                assert!(errors[3].contains("productivityFactor"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_rate_is_allowed() {
        let config = ProjectConfig {
            hourly_rate_brl: 0.0,
            ..ProjectConfig::default()
        };
        assert!(validate_project_config(&config).is_ok());
    }
}
