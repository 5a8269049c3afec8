mod core;
mod loader;
pub mod validation;

pub use self::core::{FpaConfig, MessagesConfig, OutputConfig, ProjectDefaults, ValidationConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
pub use validation::{check_project_config, validate_project_config, ConfigValidation};
