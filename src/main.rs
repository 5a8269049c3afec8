use anyhow::Result;
use clap::Parser;
use fpa_estimator::cli::{Cli, Commands, ProjectOverrides};
use fpa_estimator::commands::{self, CalculateConfig, ValidateConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    match cli.command {
        Commands::Calculate {
            estimate,
            config,
            format,
            output,
            messages,
            team_size,
            hours_per_day,
            hourly_rate,
            productivity_factor,
            plain,
            verbosity: _,
        } => commands::handle_calculate(CalculateConfig {
            estimate,
            config,
            format,
            output,
            messages,
            overrides: ProjectOverrides {
                team_size,
                average_daily_working_hours: hours_per_day,
                hourly_rate_brl: hourly_rate,
                productivity_factor,
            },
            plain,
        }),
        Commands::Validate {
            estimate,
            config,
            max_risk,
            messages,
            verbosity,
        } => commands::validate_estimate(ValidateConfig {
            estimate,
            config,
            max_risk: max_risk.map(Into::into),
            messages,
            verbosity,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

// Logs go to stderr so reports on stdout stay machine-readable.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fpa_estimator={default_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
