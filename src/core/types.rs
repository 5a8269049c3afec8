use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of IFPUG General System Characteristics.
pub const GSC_COUNT: usize = 14;

/// Highest influence rating a single characteristic may take.
pub const GSC_MAX_RATING: u8 = 5;

/// IFPUG component classification.
///
/// Parsed case-insensitively. Values outside the five known types are kept
/// verbatim in `Unrecognized` so that a component store returning unexpected
/// data does not abort a whole calculation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentType {
    /// Internal Logical File
    Ali,
    /// External Interface File
    Aie,
    /// External Input
    Ei,
    /// External Output
    Eo,
    /// External Inquiry
    Eq,
    Unrecognized(String),
}

impl ComponentType {
    pub const ALL: [ComponentType; 5] = [
        ComponentType::Ali,
        ComponentType::Aie,
        ComponentType::Ei,
        ComponentType::Eo,
        ComponentType::Eq,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ali => "ALI",
            Self::Aie => "AIE",
            Self::Ei => "EI",
            Self::Eo => "EO",
            Self::Eq => "EQ",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Lower-case grouping key used by the component breakdown.
    /// Unrecognized types have no key and are left out of the breakdown.
    pub fn breakdown_key(&self) -> Option<&'static str> {
        match self {
            Self::Ali => Some("ali"),
            Self::Aie => Some("aie"),
            Self::Ei => Some("ei"),
            Self::Eo => Some("eo"),
            Self::Eq => Some("eq"),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Ali => "Internal Logical File",
            Self::Aie => "External Interface File",
            Self::Ei => "External Input",
            Self::Eo => "External Output",
            Self::Eq => "External Inquiry",
            Self::Unrecognized(_) => "Unrecognized",
        }
    }
}

impl From<String> for ComponentType {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ALI" => Self::Ali,
            "AIE" => Self::Aie,
            "EI" => Self::Ei,
            "EO" => Self::Eo,
            "EQ" => Self::Eq,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<&str> for ComponentType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<ComponentType> for String {
    fn from(value: ComponentType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complexity level assigned to a component by the classification workflow.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Complexity {
    Low,
    Medium,
    High,
    Unrecognized(String),
}

impl Complexity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Lower-case grouping key; `None` drops the component from the breakdown.
    pub fn breakdown_key(&self) -> Option<&'static str> {
        match self {
            Self::Low => Some("low"),
            Self::Medium => Some("medium"),
            Self::High => Some("high"),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<String> for Complexity {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<&str> for Complexity {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Complexity> for String {
    fn from(value: Complexity) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified, already-scored function point component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetail {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub function_points: f64,
    pub complexity: Complexity,
}

impl ComponentDetail {
    pub fn new(
        id: impl Into<String>,
        component_type: impl Into<ComponentType>,
        function_points: f64,
        complexity: impl Into<Complexity>,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            component_type: component_type.into(),
            function_points,
            complexity: complexity.into(),
        }
    }
}

/// The 14 IFPUG General System Characteristics, each rated 0..=5.
///
/// Only constructible through `TryFrom<Vec<u8>>`, so a malformed rating set is
/// rejected while the configuration is being read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct GeneralSystemCharacteristics([u8; GSC_COUNT]);

impl GeneralSystemCharacteristics {
    /// Same rating for every characteristic.
    pub fn uniform(rating: u8) -> Result<Self, String> {
        Self::try_from(vec![rating; GSC_COUNT])
    }

    pub fn ratings(&self) -> &[u8; GSC_COUNT] {
        &self.0
    }

    /// Total degree of influence (NI), 0..=70.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&r| u32::from(r)).sum()
    }
}

impl TryFrom<Vec<u8>> for GeneralSystemCharacteristics {
    type Error = String;

    fn try_from(ratings: Vec<u8>) -> Result<Self, Self::Error> {
        let len = ratings.len();
        let array: [u8; GSC_COUNT] = ratings.try_into().map_err(|_| {
            format!(
                "generalSystemCharacteristics must have exactly {} entries, got {}",
                GSC_COUNT, len
            )
        })?;

        if let Some((index, rating)) = array
            .iter()
            .enumerate()
            .find(|(_, r)| **r > GSC_MAX_RATING)
        {
            return Err(format!(
                "generalSystemCharacteristics[{}] = {} is outside 0..={}",
                index, rating, GSC_MAX_RATING
            ));
        }

        Ok(Self(array))
    }
}

impl From<GeneralSystemCharacteristics> for Vec<u8> {
    fn from(value: GeneralSystemCharacteristics) -> Self {
        value.0.to_vec()
    }
}

/// Estimation parameters for one estimate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub average_daily_working_hours: f64,
    pub team_size: u32,
    #[serde(rename = "hourlyRateBRL")]
    pub hourly_rate_brl: f64,
    pub productivity_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_system_characteristics: Option<GeneralSystemCharacteristics>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            average_daily_working_hours: 8.0,
            team_size: 1,
            hourly_rate_brl: 0.0,
            productivity_factor: 10.0,
            general_system_characteristics: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_type_parses_case_insensitively() {
        assert_eq!(ComponentType::from("ali"), ComponentType::Ali);
        assert_eq!(ComponentType::from("Eq"), ComponentType::Eq);
        assert_eq!(
            ComponentType::from("ILF"),
            ComponentType::Unrecognized("ILF".to_string())
        );
        assert_eq!(ComponentType::from("ILF").breakdown_key(), None);
    }

    #[test]
    fn test_component_detail_wire_shape() {
        let json = r#"{"id":"c1","type":"EI","functionPoints":4,"complexity":"high"}"#;
        let component: ComponentDetail = serde_json::from_str(json).unwrap();
        assert_eq!(component.component_type, ComponentType::Ei);
        assert_eq!(component.complexity, Complexity::High);
        assert_eq!(component.function_points, 4.0);

        let back = serde_json::to_value(&component).unwrap();
        assert_eq!(back["type"], "EI");
        assert_eq!(back["complexity"], "HIGH");
        assert!(back.get("name").is_none());
    }

    #[test]
    fn test_unrecognized_complexity_survives_round_trip() {
        let json = r#"{"id":"c1","type":"EO","functionPoints":5,"complexity":"EXTREME"}"#;
        let component: ComponentDetail = serde_json::from_str(json).unwrap();
        assert_eq!(
            component.complexity,
            Complexity::Unrecognized("EXTREME".to_string())
        );
        let back = serde_json::to_value(&component).unwrap();
        assert_eq!(back["complexity"], "EXTREME");
    }

    #[test]
    fn test_gsc_rejects_wrong_length() {
        let err = GeneralSystemCharacteristics::try_from(vec![3; 13]).unwrap_err();
        assert!(err.contains("exactly 14 entries, got 13"));
    }

    #[test]
    fn test_gsc_rejects_rating_above_five() {
        let mut ratings = vec![2; GSC_COUNT];
        ratings[7] = 6;
        let err = GeneralSystemCharacteristics::try_from(ratings).unwrap_err();
        assert!(err.contains("[7] = 6"));
    }

    #[test]
    fn test_gsc_total() {
        let highest = GeneralSystemCharacteristics::uniform(5).unwrap();
        let lowest = GeneralSystemCharacteristics::uniform(0).unwrap();
        assert_eq!(highest.total(), 70);
        assert_eq!(lowest.total(), 0);
    }

    #[test]
    fn test_project_config_rejects_malformed_gsc_on_deserialize() {
        let json = r#"{
            "averageDailyWorkingHours": 8,
            "teamSize": 2,
            "hourlyRateBRL": 100,
            "productivityFactor": 10,
            "generalSystemCharacteristics": [1, 2, 3]
        }"#;
        let err = serde_json::from_str::<ProjectConfig>(json).unwrap_err();
        assert!(err.to_string().contains("exactly 14 entries"));
    }
}
