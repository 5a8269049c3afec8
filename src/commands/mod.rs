//! CLI command implementations.
//!
//! - **calculate**: Calculate and report an estimate
//! - **validate**: Gate an estimate on its overall risk
//! - **init**: Write a default `.fpa.toml`

pub mod calculate;
pub mod init;
pub mod validate;

pub use calculate::{handle_calculate, run_estimate, CalculateConfig, EstimateOutcome};
pub use init::init_config;
pub use validate::{validate_estimate, ValidateConfig, ValidationDetails};
