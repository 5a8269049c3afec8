//! CLI module for fpa-estimator
//!
//! - Argument parsing (`args`)
//! - Configuration building (`config_builder`)

pub mod args;
pub mod config_builder;

pub use args::{Cli, Commands, OutputFormat, RiskLevelArg};
pub use config_builder::{
    create_formatting_config, resolve_output_format, ProjectConfigBuilder, ProjectOverrides,
};
