use crate::io;
use crate::risk::RiskLevel;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fpa-estimator")]
#[command(about = "Function Point Analysis effort, cost and risk estimator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate size, effort, schedule, cost and risk for an estimate
    Calculate {
        /// Estimate document (JSON, or TOML with a .toml extension)
        estimate: PathBuf,

        /// Configuration file (defaults to the nearest .fpa.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Locale file with translated risk messages
        #[arg(long, env = "FPA_MESSAGES")]
        messages: Option<PathBuf>,

        /// Override the team size
        #[arg(long = "team-size")]
        team_size: Option<u32>,

        /// Override the average daily working hours
        #[arg(long = "hours-per-day")]
        hours_per_day: Option<f64>,

        /// Override the hourly rate (BRL)
        #[arg(long = "hourly-rate")]
        hourly_rate: Option<f64>,

        /// Override the productivity factor (hours per function point)
        #[arg(long = "productivity-factor")]
        productivity_factor: Option<f64>,

        /// Disable colors in terminal output
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Fail when the overall risk of an estimate exceeds a ceiling
    Validate {
        /// Estimate document (JSON, or TOML with a .toml extension)
        estimate: PathBuf,

        /// Configuration file (defaults to the nearest .fpa.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Highest overall risk that still passes
        #[arg(long = "max-risk", value_enum)]
        max_risk: Option<RiskLevelArg>,

        /// Locale file with translated risk messages
        #[arg(long, env = "FPA_MESSAGES")]
        messages: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Calculate { verbosity, .. } | Commands::Validate { verbosity, .. } => {
                *verbosity
            }
            Commands::Init { .. } => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => io::OutputFormat::Json,
            OutputFormat::Markdown => io::OutputFormat::Markdown,
            OutputFormat::Terminal => io::OutputFormat::Terminal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RiskLevelArg {
    Low,
    Medium,
    High,
}

impl From<RiskLevelArg> for RiskLevel {
    fn from(level: RiskLevelArg) -> Self {
        match level {
            RiskLevelArg::Low => RiskLevel::Low,
            RiskLevelArg::Medium => RiskLevel::Medium,
            RiskLevelArg::High => RiskLevel::High,
        }
    }
}
