use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::{GeneralSystemCharacteristics, ProjectConfig};
use crate::risk::RiskLevel;

/// Root configuration structure for `.fpa.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FpaConfig {
    /// Default estimation parameters
    #[serde(default)]
    pub project: Option<ProjectDefaults>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Risk gate used by `validate`
    #[serde(default)]
    pub validation: Option<ValidationConfig>,

    /// Localized message catalog
    #[serde(default)]
    pub messages: Option<MessagesConfig>,
}

/// Project parameters used when an estimate carries no configuration of its own.
/// Unset fields fall back to [`ProjectConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProjectDefaults {
    pub average_daily_working_hours: Option<f64>,
    pub team_size: Option<u32>,
    pub hourly_rate_brl: Option<f64>,
    pub productivity_factor: Option<f64>,
    pub general_system_characteristics: Option<GeneralSystemCharacteristics>,
}

impl ProjectDefaults {
    pub fn to_project_config(&self) -> ProjectConfig {
        let builtin = ProjectConfig::default();
        ProjectConfig {
            average_daily_working_hours: self
                .average_daily_working_hours
                .unwrap_or(builtin.average_daily_working_hours),
            team_size: self.team_size.unwrap_or(builtin.team_size),
            hourly_rate_brl: self.hourly_rate_brl.unwrap_or(builtin.hourly_rate_brl),
            productivity_factor: self
                .productivity_factor
                .unwrap_or(builtin.productivity_factor),
            general_system_characteristics: self.general_system_characteristics,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// `terminal`, `json` or `markdown`
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ValidationConfig {
    /// Highest overall risk that still passes (`low`, `medium`, `high`)
    pub max_risk: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MessagesConfig {
    /// Path to a JSON or TOML locale file
    pub catalog: Option<PathBuf>,
}

impl FpaConfig {
    pub fn project_config(&self) -> ProjectConfig {
        self.project
            .as_ref()
            .map(ProjectDefaults::to_project_config)
            .unwrap_or_default()
    }

    /// Configured risk ceiling; unparseable values fall back to MEDIUM.
    pub fn max_risk(&self) -> RiskLevel {
        let configured = self
            .validation
            .as_ref()
            .and_then(|v| v.max_risk.as_deref());

        match configured {
            None => RiskLevel::Medium,
            Some(raw) => RiskLevel::parse(raw).unwrap_or_else(|| {
                log::warn!("Unknown validation.max_risk '{}', using MEDIUM", raw);
                RiskLevel::Medium
            }),
        }
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }

    pub fn message_catalog(&self) -> Option<&PathBuf> {
        self.messages.as_ref().and_then(|m| m.catalog.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_empty_config_uses_builtin_defaults() {
        let config: FpaConfig = toml::from_str("").unwrap();
        assert_eq!(config.project_config(), ProjectConfig::default());
        assert_eq!(config.max_risk(), RiskLevel::Medium);
        assert_eq!(config.default_format(), None);
    }

    #[test]
    fn test_partial_project_section() {
        let config: FpaConfig = toml::from_str(indoc! {r#"
            [project]
            team_size = 5
            hourly_rate_brl = 120.0

            [validation]
            max_risk = "high"

            [output]
            default_format = "json"
        "#})
        .unwrap();

        let project = config.project_config();
        assert_eq!(project.team_size, 5);
        assert_eq!(project.hourly_rate_brl, 120.0);
        assert_eq!(project.average_daily_working_hours, 8.0);
        assert_eq!(project.productivity_factor, 10.0);
        assert_eq!(config.max_risk(), RiskLevel::High);
        assert_eq!(config.default_format(), Some("json"));
    }

    #[test]
    fn test_gsc_in_project_section_is_checked() {
        let result = toml::from_str::<FpaConfig>(indoc! {r#"
            [project]
            general_system_characteristics = [1, 2, 3]
        "#});
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_max_risk_falls_back_to_medium() {
        let config: FpaConfig = toml::from_str(indoc! {r#"
            [validation]
            max_risk = "catastrophic"
        "#})
        .unwrap();
        assert_eq!(config.max_risk(), RiskLevel::Medium);
    }
}
