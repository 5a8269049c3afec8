//! Configuration builders for CLI commands
//!
//! Turns CLI arguments, the estimate's stored parameters and `.fpa.toml`
//! into the typed configuration the commands run with.

use crate::cli::args::OutputFormat;
use crate::config::FpaConfig;
use crate::core::ProjectConfig;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io;

/// Project parameters given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectOverrides {
    pub team_size: Option<u32>,
    pub average_daily_working_hours: Option<f64>,
    pub hourly_rate_brl: Option<f64>,
    pub productivity_factor: Option<f64>,
}

impl ProjectOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Resolves the [`ProjectConfig`] of a calculation.
///
/// Precedence, highest first: command-line overrides, the estimate's own
/// configuration, the `[project]` table of `.fpa.toml`, built-in defaults.
/// An estimate configuration replaces the file defaults as a whole.
#[derive(Debug, Clone, Default)]
pub struct ProjectConfigBuilder {
    defaults: ProjectConfig,
    estimate: Option<ProjectConfig>,
    overrides: ProjectOverrides,
}

impl ProjectConfigBuilder {
    pub fn new(defaults: ProjectConfig) -> Self {
        Self {
            defaults,
            estimate: None,
            overrides: ProjectOverrides::default(),
        }
    }

    pub fn from_file_config(config: &FpaConfig) -> Self {
        Self::new(config.project_config())
    }

    pub fn estimate_config(mut self, config: Option<ProjectConfig>) -> Self {
        self.estimate = config;
        self
    }

    pub fn overrides(mut self, overrides: ProjectOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn build(self) -> ProjectConfig {
        let base = self.estimate.unwrap_or(self.defaults);
        let o = self.overrides;
        ProjectConfig {
            average_daily_working_hours: o
                .average_daily_working_hours
                .unwrap_or(base.average_daily_working_hours),
            team_size: o.team_size.unwrap_or(base.team_size),
            hourly_rate_brl: o.hourly_rate_brl.unwrap_or(base.hourly_rate_brl),
            productivity_factor: o.productivity_factor.unwrap_or(base.productivity_factor),
            general_system_characteristics: base.general_system_characteristics,
        }
    }
}

/// `--format` wins, then `[output] default_format`, then terminal.
pub fn resolve_output_format(cli: Option<OutputFormat>, config: &FpaConfig) -> io::OutputFormat {
    if let Some(format) = cli {
        return format.into();
    }

    match config.default_format() {
        Some(raw) => io::OutputFormat::parse(raw).unwrap_or_else(|| {
            log::warn!("Unknown output.default_format '{}', using terminal", raw);
            io::OutputFormat::Terminal
        }),
        None => io::OutputFormat::Terminal,
    }
}

/// `--plain` forces colors off; otherwise `[output] use_color`, then the
/// NO_COLOR / CLICOLOR environment.
pub fn create_formatting_config(plain: bool, config: &FpaConfig) -> FormattingConfig {
    if plain {
        return FormattingConfig::plain();
    }

    let from_env = FormattingConfig::from_env();
    match (config.use_color(), from_env.color) {
        (Some(false), _) => FormattingConfig::plain(),
        (Some(true), ColorMode::Auto) => FormattingConfig::new(ColorMode::Always),
        _ => from_env,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, ProjectDefaults};
    use crate::core::GeneralSystemCharacteristics;
    use pretty_assertions::assert_eq;

    fn stored() -> ProjectConfig {
        let gsc = GeneralSystemCharacteristics::uniform(2).unwrap();
        ProjectConfig {
            average_daily_working_hours: 6.0,
            team_size: 3,
            hourly_rate_brl: 90.0,
            productivity_factor: 12.0,
            general_system_characteristics: Some(gsc),
        }
    }

    #[test]
    fn test_overrides_emptiness() {
        assert!(ProjectOverrides::default().is_empty());

        let overrides = ProjectOverrides {
            hourly_rate_brl: Some(120.0),
            ..Default::default()
        };
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_builtin_defaults_when_nothing_given() {
        assert_eq!(
            ProjectConfigBuilder::default().build(),
            ProjectConfig::default()
        );
    }

    #[test]
    fn test_estimate_config_replaces_file_defaults() {
        let file = FpaConfig {
            project: Some(ProjectDefaults {
                team_size: Some(9),
                hourly_rate_brl: Some(200.0),
                ..Default::default()
            }),
            ..Default::default()
        };

        let from_file = ProjectConfigBuilder::from_file_config(&file).build();
        assert_eq!(from_file.team_size, 9);
        assert_eq!(from_file.hourly_rate_brl, 200.0);

        let resolved = ProjectConfigBuilder::from_file_config(&file)
            .estimate_config(Some(stored()))
            .build();
        assert_eq!(resolved, stored());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let resolved = ProjectConfigBuilder::default()
            .estimate_config(Some(stored()))
            .overrides(ProjectOverrides {
                team_size: Some(5),
                productivity_factor: Some(8.0),
                ..Default::default()
            })
            .build();

        assert_eq!(resolved.team_size, 5);
        assert_eq!(resolved.productivity_factor, 8.0);
        assert_eq!(resolved.hourly_rate_brl, 90.0);
        assert_eq!(
            resolved.general_system_characteristics,
            stored().general_system_characteristics
        );
    }

    #[test]
    fn test_output_format_resolution() {
        let mut config = FpaConfig::default();
        assert_eq!(
            resolve_output_format(None, &config),
            io::OutputFormat::Terminal
        );

        config.output = Some(OutputConfig {
            default_format: Some("markdown".to_string()),
            use_color: None,
        });
        assert_eq!(
            resolve_output_format(None, &config),
            io::OutputFormat::Markdown
        );
        assert_eq!(
            resolve_output_format(Some(OutputFormat::Json), &config),
            io::OutputFormat::Json
        );

        config.output = Some(OutputConfig {
            default_format: Some("pdf".to_string()),
            use_color: None,
        });
        assert_eq!(
            resolve_output_format(None, &config),
            io::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_plain_and_use_color_false_disable_colors() {
        assert_eq!(
            create_formatting_config(true, &FpaConfig::default()),
            FormattingConfig::plain()
        );

        let config = FpaConfig {
            output: Some(OutputConfig {
                default_format: None,
                use_color: Some(false),
            }),
            ..Default::default()
        };
        assert_eq!(
            create_formatting_config(false, &config),
            FormattingConfig::plain()
        );
    }
}
