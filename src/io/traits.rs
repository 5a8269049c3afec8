//! Collaborator interfaces for the calculation service.
//!
//! Components and project configuration live in an external store (an HTTP
//! API in production). These traits are the only view the service has of
//! that store, which keeps the calculation itself free of I/O and lets tests
//! substitute in-memory data.

use crate::core::{ComponentDetail, ProjectConfig, Result};

/// Supplies the classified components of an estimate.
pub trait ComponentSource {
    fn components(&self, estimate_id: &str) -> Result<Vec<ComponentDetail>>;
}

/// Supplies the stored project configuration of an estimate, if any.
pub trait ConfigSource {
    fn project_config(&self, estimate_id: &str) -> Result<Option<ProjectConfig>>;
}

/// Which estimate a calculation is for.
///
/// Passed explicitly to the service instead of being read from any
/// process-wide "active organization" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateContext {
    pub organization: Option<String>,
    pub estimate_id: String,
}

impl EstimateContext {
    pub fn new(estimate_id: impl Into<String>) -> Self {
        Self {
            organization: None,
            estimate_id: estimate_id.into(),
        }
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }
}
