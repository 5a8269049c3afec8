use super::traits::{ComponentSource, ConfigSource};
use crate::core::{ComponentDetail, Error, ProjectConfig, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An estimate as exported from the component store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateDocument {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub components: Vec<ComponentDetail>,
    #[serde(default)]
    pub config: Option<ProjectConfig>,
}

impl EstimateDocument {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    fn ensure_id(&self, estimate_id: &str) -> Result<()> {
        if self.id == estimate_id {
            Ok(())
        } else {
            Err(Error::NotFound(format!("estimate '{}'", estimate_id)))
        }
    }
}

/// File-backed component and configuration source holding one estimate.
#[derive(Debug, Clone)]
pub struct EstimateFile {
    path: PathBuf,
    document: EstimateDocument,
}

impl EstimateFile {
    /// Read an estimate document; `.toml` files are parsed as TOML,
    /// everything else as JSON.
    pub fn open(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read estimate", path, e))?;

        let document = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => EstimateDocument::from_toml_str(&contents),
            _ => EstimateDocument::from_json_str(&contents),
        }
        .context(format!("Invalid estimate document {}", path.display()))?;

        log::debug!(
            "Loaded estimate '{}' with {} components from {}",
            document.id,
            document.components.len(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &EstimateDocument {
        &self.document
    }
}

impl ComponentSource for EstimateFile {
    fn components(&self, estimate_id: &str) -> Result<Vec<ComponentDetail>> {
        self.document.ensure_id(estimate_id)?;
        Ok(self.document.components.clone())
    }
}

impl ConfigSource for EstimateFile {
    fn project_config(&self, estimate_id: &str) -> Result<Option<ProjectConfig>> {
        self.document.ensure_id(estimate_id)?;
        Ok(self.document.config.clone())
    }
}

/// In-memory store of several estimates keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryEstimates {
    estimates: HashMap<String, EstimateDocument>,
}

impl MemoryEstimates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, document: EstimateDocument) {
        self.estimates.insert(document.id.clone(), document);
    }

    fn get(&self, estimate_id: &str) -> Result<&EstimateDocument> {
        self.estimates
            .get(estimate_id)
            .ok_or_else(|| Error::NotFound(format!("estimate '{}'", estimate_id)))
    }
}

impl ComponentSource for MemoryEstimates {
    fn components(&self, estimate_id: &str) -> Result<Vec<ComponentDetail>> {
        Ok(self.get(estimate_id)?.components.clone())
    }
}

impl ConfigSource for MemoryEstimates {
    fn project_config(&self, estimate_id: &str) -> Result<Option<ProjectConfig>> {
        Ok(self.get(estimate_id)?.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    const SAMPLE: &str = indoc! {r#"
        {
          "id": "est-42",
          "name": "Billing portal",
          "organization": "Acme",
          "components": [
            {"id": "c1", "type": "ALI", "functionPoints": 10, "complexity": "LOW"},
            {"id": "c2", "type": "EI", "functionPoints": 4, "complexity": "HIGH"}
          ],
          "config": {
            "averageDailyWorkingHours": 6,
            "teamSize": 3,
            "hourlyRateBRL": 90,
            "productivityFactor": 8
          }
        }
    "#};

    #[test]
    fn test_estimate_file_serves_its_own_id() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("estimate.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let file = EstimateFile::open(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert_eq!(file.document().display_name(), "Billing portal");
        assert_eq!(file.components("est-42").unwrap().len(), 2);

        let config = file.project_config("est-42").unwrap().unwrap();
        assert_eq!(config.team_size, 3);
        assert!(matches!(file.components("other"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_toml_estimate() {
        let doc = EstimateDocument::from_toml_str(indoc! {r#"
            id = "est-7"

            [[components]]
            id = "c1"
            type = "EQ"
            functionPoints = 3
            complexity = "MEDIUM"
        "#})
        .unwrap();
        assert_eq!(doc.components.len(), 1);
        assert_eq!(doc.config, None);
        assert_eq!(doc.display_name(), "est-7");
    }

    #[test]
    fn test_memory_estimates() {
        let mut store = MemoryEstimates::new();
        store.insert(EstimateDocument::from_json_str(SAMPLE).unwrap());
        assert_eq!(store.components("est-42").unwrap()[0].id, "c1");
        assert!(store.project_config("missing").is_err());
    }
}
