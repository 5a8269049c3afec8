use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::FpaConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".fpa.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read the raw contents of a config file
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<FpaConfig> {
    toml::from_str::<FpaConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))
}

/// Load an explicitly requested config file. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<FpaConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    let config = parse_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config file; problems are logged, not returned.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<FpaConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.fpa.toml`.
pub fn discover_config(start: PathBuf) -> FpaConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            FpaConfig::default()
        })
}

/// Discover configuration starting from the current directory.
pub fn load_config() -> FpaConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            FpaConfig::default()
        }
    }
}
