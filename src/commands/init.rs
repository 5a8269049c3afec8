use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# fpa-estimator configuration

[project]
# Hours worked per person per day
average_daily_working_hours = 8.0
# Number of people on the team
team_size = 1
# Hourly rate in BRL
hourly_rate_brl = 0.0
# Hours of effort per adjusted function point
productivity_factor = 10.0
# The 14 General System Characteristics, each rated 0 to 5.
# Without them the adjustment factor is 0.65.
# general_system_characteristics = [3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3]

[output]
# terminal, json or markdown
default_format = "terminal"

[validation]
# Highest overall risk accepted by `fpa-estimator validate` (low, medium, high)
max_risk = "medium"

[messages]
# Locale file (JSON or TOML) with translated risk reasons and recommendations
# catalog = "locales/pt-BR.json"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if io::file_exists(config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)
}
