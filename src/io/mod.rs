pub mod estimate;
pub mod output;
pub mod traits;
pub mod writers;

pub use estimate::{EstimateDocument, EstimateFile, MemoryEstimates};
pub use output::{create_writer, EstimateReport, OutputFormat, OutputWriter};
pub use traits::{ComponentSource, ConfigSource, EstimateContext};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
