//! Function Point Analysis estimation.
//!
//! Turns classified IFPUG components and a project configuration into size,
//! effort, schedule, cost, breakdowns, productivity metrics and a risk
//! assessment. The engine lives in [`estimation`] and [`risk`]; the rest of
//! the crate loads estimates and configuration, and renders reports.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod estimation;
pub mod formatting;
pub mod i18n;
pub mod io;
pub mod risk;

// Re-export commonly used types
pub use crate::core::{
    Complexity, ComponentDetail, ComponentType, Error, GeneralSystemCharacteristics, ProjectConfig,
    Result,
};
pub use crate::estimation::{calculate, FpaCalculations, MemoizedCalculator};
pub use crate::i18n::{MessageCatalog, Translate};
pub use crate::risk::{RiskAnalysis, RiskLevel};
