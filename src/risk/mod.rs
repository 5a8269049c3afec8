//! Project risk assessment over four independent factors.

pub mod factors;
pub mod recommendations;

pub use factors::{complexity_risk, duration_risk, productivity_risk, team_size_risk};
pub use recommendations::recommendations;

use crate::i18n::Translate;
use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rated factor and the reason behind its rating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub risk: RiskLevel,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub team_size: RiskFactor,
    pub project_duration: RiskFactor,
    pub complexity: RiskFactor,
    pub productivity: RiskFactor,
}

impl RiskFactors {
    /// Factors in reporting order: team size, duration, complexity, productivity.
    pub fn in_order(&self) -> [(&'static str, &RiskFactor); 4] {
        [
            ("teamSize", &self.team_size),
            ("projectDuration", &self.project_duration),
            ("complexity", &self.complexity),
            ("productivity", &self.productivity),
        ]
    }

    fn count(&self, level: RiskLevel) -> usize {
        self.in_order()
            .iter()
            .filter(|(_, factor)| factor.risk == level)
            .count()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub overall_risk: RiskLevel,
    pub factors: RiskFactors,
    pub recommendations: Vector<String>,
}

/// Inputs the risk ladders are evaluated on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiskInputs {
    pub team_size: u32,
    pub duration_days: f64,
    pub high_complexity_percentage: f64,
    pub productivity_factor: f64,
}

/// Two HIGH factors, or one HIGH with two MEDIUM, make the project HIGH risk.
/// One HIGH or two MEDIUM make it MEDIUM.
pub fn overall_risk(factors: &RiskFactors) -> RiskLevel {
    let high = factors.count(RiskLevel::High);
    let medium = factors.count(RiskLevel::Medium);

    if high >= 2 || (high >= 1 && medium >= 2) {
        RiskLevel::High
    } else if high >= 1 || medium >= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn assess(inputs: &RiskInputs, translate: Option<&dyn Translate>) -> RiskAnalysis {
    let factors = RiskFactors {
        team_size: team_size_risk(inputs.team_size, translate),
        project_duration: duration_risk(inputs.duration_days, translate),
        complexity: complexity_risk(inputs.high_complexity_percentage, translate),
        productivity: productivity_risk(inputs.productivity_factor, translate),
    };

    RiskAnalysis {
        overall_risk: overall_risk(&factors),
        recommendations: recommendations(&factors, translate),
        factors,
    }
}
