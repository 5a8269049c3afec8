//! Integration tests for `.fpa.toml` discovery and estimate loading.

use fpa_estimator::cli::{ProjectConfigBuilder, ProjectOverrides};
use fpa_estimator::commands::run_estimate;
use fpa_estimator::config::{discover_config, load_config_from, CONFIG_FILE_NAME};
use fpa_estimator::core::{Error, ProjectConfig};
use fpa_estimator::io::{ComponentSource, ConfigSource, EstimateContext, EstimateFile};
use fpa_estimator::risk::RiskLevel;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const PROJECT_CONFIG: &str = indoc! {r#"
    [project]
    team_size = 8
    hourly_rate_brl = 150.0
    productivity_factor = 12.0

    [validation]
    max_risk = "high"
"#};

#[test]
fn discovers_config_in_ancestor_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), PROJECT_CONFIG).unwrap();
    let nested = temp.path().join("estimates").join("2026");
    fs::create_dir_all(&nested).unwrap();

    let config = discover_config(nested);

    assert_eq!(
        config.project_config(),
        ProjectConfig {
            average_daily_working_hours: 8.0,
            team_size: 8,
            hourly_rate_brl: 150.0,
            productivity_factor: 12.0,
            general_system_characteristics: None,
        }
    );
    assert_eq!(config.max_risk(), RiskLevel::High);
}

#[test]
fn malformed_discovered_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "[project\nteam_size = ").unwrap();

    let config = discover_config(temp.path().to_path_buf());

    assert_eq!(config.project_config(), ProjectConfig::default());
    assert_eq!(config.max_risk(), RiskLevel::Medium);
}

#[test]
fn explicit_config_errors_are_reported() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");
    assert!(matches!(
        load_config_from(&missing),
        Err(Error::FileSystem { .. })
    ));

    let malformed = temp.path().join("bad.toml");
    fs::write(&malformed, "[validation]\nmax_risk = [").unwrap();
    assert!(matches!(
        load_config_from(&malformed),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn malformed_gsc_is_rejected_at_the_boundary() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("estimate.json");
    fs::write(
        &path,
        indoc! {r#"
            {
              "id": "est-1",
              "components": [],
              "config": {
                "averageDailyWorkingHours": 8,
                "teamSize": 2,
                "hourlyRateBRL": 50,
                "productivityFactor": 10,
                "generalSystemCharacteristics": [1, 2, 3, 4, 5, 6, 0, 0, 0, 0, 0, 0, 0, 0]
              }
            }
        "#},
    )
    .unwrap();

    let err = EstimateFile::open(&path).unwrap_err();
    assert!(err.to_string().contains("outside 0..=5"), "{err}");
}

#[test]
fn estimate_toml_flows_through_the_service() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("estimate.toml");
    fs::write(
        &path,
        indoc! {r#"
            id = "est-9"
            name = "Inventory"
            organization = "Acme"

            [[components]]
            id = "c1"
            type = "ali"
            functionPoints = 15
            complexity = "high"

            [[components]]
            id = "c2"
            type = "EQ"
            functionPoints = 5
            complexity = "LOW"
        "#},
    )
    .unwrap();

    let file = EstimateFile::open(&path).unwrap();
    assert_eq!(file.components("est-9").unwrap().len(), 2);
    assert_eq!(file.project_config("est-9").unwrap(), None);

    let builder = ProjectConfigBuilder::new(ProjectConfig {
        hourly_rate_brl: 100.0,
        ..ProjectConfig::default()
    })
    .overrides(ProjectOverrides {
        team_size: Some(2),
        ..Default::default()
    });
    let context = EstimateContext::new("est-9").with_organization("Acme");

    let outcome = run_estimate(&context, &file, &file, None, builder).unwrap();
    let calc = &outcome.calculations;

    assert_eq!(outcome.config.team_size, 2);
    assert_eq!(calc.pfna, 20.0);
    assert_eq!(calc.effort_hours, 200.0);
    assert_eq!(calc.duration_days, 12.5);
    assert_eq!(calc.total_cost, 20_000.0);
    assert_eq!(calc.complexity_breakdown.high.percentage, 75.0);
    assert_eq!(calc.risk_analysis.factors.complexity.risk, RiskLevel::High);
}
