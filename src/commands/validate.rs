use super::calculate::{as_translate, load_catalog, load_tool_config, open_estimate, run_estimate};
use crate::cli::ProjectConfigBuilder;
use crate::formatting::{self, ColoredFormatter, FormattingConfig};
use crate::risk::RiskLevel;
use anyhow::Result;
use std::path::PathBuf;

pub struct ValidateConfig {
    pub estimate: PathBuf,
    pub config: Option<PathBuf>,
    pub max_risk: Option<RiskLevel>,
    pub messages: Option<PathBuf>,
    pub verbosity: u8,
}

pub struct ValidationDetails {
    pub estimate_id: String,
    pub overall_risk: RiskLevel,
    pub max_risk: RiskLevel,
    pub pfa: f64,
    pub effort_hours: f64,
    pub duration_days: f64,
    pub total_cost: f64,
    /// (factor name, risk, reason) in assessment order
    pub factors: Vec<(&'static str, RiskLevel, String)>,
    pub recommendations: Vec<String>,
}

impl ValidationDetails {
    pub fn passed(&self) -> bool {
        self.overall_risk <= self.max_risk
    }
}

pub fn validate_estimate(config: ValidateConfig) -> Result<()> {
    let tool_config = load_tool_config(config.config.as_deref())?;
    let catalog = load_catalog(config.messages.as_deref(), &tool_config)?;
    let (file, context) = open_estimate(&config.estimate)?;

    let builder = ProjectConfigBuilder::from_file_config(&tool_config);
    let outcome = run_estimate(&context, &file, &file, as_translate(&catalog), builder)?;

    let max_risk = config.max_risk.unwrap_or_else(|| tool_config.max_risk());
    let calc = &outcome.calculations;
    let details = ValidationDetails {
        estimate_id: outcome.context.estimate_id.clone(),
        overall_risk: calc.risk_analysis.overall_risk,
        max_risk,
        pfa: calc.pfa,
        effort_hours: calc.effort_hours,
        duration_days: calc.duration_days,
        total_cost: calc.total_cost,
        factors: calc
            .risk_analysis
            .factors
            .in_order()
            .into_iter()
            .map(|(name, factor)| (name, factor.risk, factor.reason.clone()))
            .collect(),
        recommendations: calc.risk_analysis.recommendations.iter().cloned().collect(),
    };

    let formatting = FormattingConfig::from_env();
    formatting::apply_color_override(formatting);
    let formatter = ColoredFormatter::new(formatting);

    if details.passed() {
        print_validation_success(&details, config.verbosity, formatter);
        Ok(())
    } else {
        print_validation_failure(&details, formatter);
        anyhow::bail!("Validation failed")
    }
}

fn print_validation_success(details: &ValidationDetails, verbosity: u8, f: ColoredFormatter) {
    println!(
        "{} Validation PASSED - overall risk {} within {}",
        f.success("[OK]"),
        f.risk(details.overall_risk),
        details.max_risk
    );
    if verbosity > 0 {
        print_summary(details);
        print_factors(details, f);
    }
}

fn print_validation_failure(details: &ValidationDetails, f: ColoredFormatter) {
    println!(
        "{} Validation FAILED - overall risk {} exceeds {}",
        f.error("[ERROR]"),
        f.risk(details.overall_risk),
        details.max_risk
    );
    print_summary(details);
    print_factors(details, f);

    if !details.recommendations.is_empty() {
        println!();
        println!("{}", f.bold("Recommendations:"));
        for recommendation in &details.recommendations {
            println!("  - {}", recommendation);
        }
    }
}

fn print_summary(details: &ValidationDetails) {
    println!();
    println!("  Estimate:  {}", details.estimate_id);
    println!("  PFA:       {:.2}", details.pfa);
    println!("  Effort:    {:.1} hours", details.effort_hours);
    println!("  Duration:  {:.1} days", details.duration_days);
    println!("  Cost:      R$ {:.2}", details.total_cost);
}

fn print_factors(details: &ValidationDetails, f: ColoredFormatter) {
    println!();
    for (name, risk, reason) in &details.factors {
        println!("  {:<16} {:<8} {}", name, f.risk(*risk), reason);
    }
}
