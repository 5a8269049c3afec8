use crate::cli::{self, ProjectConfigBuilder, ProjectOverrides};
use crate::config::{self, validate_project_config, FpaConfig};
use crate::core::ProjectConfig;
use crate::estimation::{self, FpaCalculations};
use crate::formatting::{self, ColorMode, FormattingConfig};
use crate::i18n::{MessageCatalog, Translate};
use crate::io::{
    self, ComponentSource, ConfigSource, EstimateContext, EstimateFile, EstimateReport,
    OutputFormat,
};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub struct CalculateConfig {
    pub estimate: PathBuf,
    pub config: Option<PathBuf>,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub messages: Option<PathBuf>,
    pub overrides: ProjectOverrides,
    pub plain: bool,
}

/// Resolved parameters and results of one estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateOutcome {
    pub context: EstimateContext,
    pub config: ProjectConfig,
    pub calculations: FpaCalculations,
}

/// Pull an estimate's components and stored configuration, resolve the
/// final configuration, reject it if it violates the engine's
/// preconditions, then calculate.
pub fn run_estimate(
    context: &EstimateContext,
    components: &dyn ComponentSource,
    configs: &dyn ConfigSource,
    translate: Option<&dyn Translate>,
    builder: ProjectConfigBuilder,
) -> Result<EstimateOutcome> {
    let estimate_id = context.estimate_id.as_str();

    let items = components
        .components(estimate_id)
        .with_context(|| format!("Failed to load components of estimate '{estimate_id}'"))?;
    let stored = configs
        .project_config(estimate_id)
        .with_context(|| format!("Failed to load configuration of estimate '{estimate_id}'"))?;

    if stored.is_none() {
        tracing::debug!(estimate = estimate_id, "no stored configuration");
    }

    let config = builder.estimate_config(stored).build();
    validate_project_config(&config)
        .with_context(|| format!("Invalid project configuration for estimate '{estimate_id}'"))?;

    let calculations = estimation::calculate(&items, &config, translate);

    tracing::info!(
        estimate = estimate_id,
        organization = context.organization.as_deref().unwrap_or("-"),
        pfa = calculations.pfa,
        overall_risk = %calculations.risk_analysis.overall_risk,
        "estimate calculated"
    );

    Ok(EstimateOutcome {
        context: context.clone(),
        config,
        calculations,
    })
}

pub fn handle_calculate(config: CalculateConfig) -> Result<()> {
    let tool_config = load_tool_config(config.config.as_deref())?;
    let catalog = load_catalog(config.messages.as_deref(), &tool_config)?;
    let (file, context) = open_estimate(&config.estimate)?;
    tracing::debug!(
        estimate = context.estimate_id.as_str(),
        path = %file.path().display(),
        "estimate opened"
    );

    if !config.overrides.is_empty() {
        tracing::debug!(overrides = ?config.overrides, "applying command-line overrides");
    }

    let builder = ProjectConfigBuilder::from_file_config(&tool_config).overrides(config.overrides);
    let outcome = run_estimate(&context, &file, &file, as_translate(&catalog), builder)?;

    let report = EstimateReport {
        estimate_id: outcome.context.estimate_id,
        name: file.document().name.clone(),
        organization: outcome.context.organization,
        generated_at: Utc::now(),
        config: outcome.config,
        calculations: outcome.calculations,
    };

    let format = cli::resolve_output_format(config.format, &tool_config);
    let mut formatting = cli::create_formatting_config(config.plain, &tool_config);
    if config.output.is_some() && formatting.color == ColorMode::Auto {
        formatting = FormattingConfig::plain();
    }
    formatting::apply_color_override(formatting);

    write_report(&report, format, formatting, config.output.as_deref())
}

fn write_report(
    report: &EstimateReport,
    format: OutputFormat,
    formatting: FormattingConfig,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            io::create_writer(format, Box::new(BufWriter::new(file)), formatting)
                .write_report(report)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            io::create_writer(format, Box::new(stdout.lock()), formatting).write_report(report)?;
        }
    }
    Ok(())
}

/// An explicit `--config` must load; otherwise discover `.fpa.toml`.
pub(crate) fn load_tool_config(explicit: Option<&Path>) -> Result<FpaConfig> {
    match explicit {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// `--messages` wins over `[messages] catalog`.
pub(crate) fn load_catalog(
    cli_path: Option<&Path>,
    tool_config: &FpaConfig,
) -> Result<Option<MessageCatalog>> {
    let path = cli_path
        .map(Path::to_path_buf)
        .or_else(|| tool_config.message_catalog().cloned());

    path.map(|path| {
        MessageCatalog::load(&path)
            .with_context(|| format!("Failed to load message catalog {}", path.display()))
    })
    .transpose()
}

pub(crate) fn open_estimate(path: &Path) -> Result<(EstimateFile, EstimateContext)> {
    let file = EstimateFile::open(path)
        .with_context(|| format!("Failed to open estimate {}", path.display()))?;

    let document = file.document();
    let mut context = EstimateContext::new(document.id.clone());
    if let Some(organization) = &document.organization {
        context = context.with_organization(organization.clone());
    }

    Ok((file, context))
}

pub(crate) fn as_translate(catalog: &Option<MessageCatalog>) -> Option<&dyn Translate> {
    catalog.as_ref().map(|c| c as &dyn Translate)
}
