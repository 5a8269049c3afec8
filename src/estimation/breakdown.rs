//! Component, complexity, phase and cost breakdowns.

use crate::core::{Complexity, ComponentDetail, ComponentType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub count: usize,
    pub points: f64,
    pub percentage: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakdownTotal {
    pub count: usize,
    pub points: f64,
}

/// Count and points per IFPUG component type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentBreakdown {
    pub ali: BreakdownEntry,
    pub aie: BreakdownEntry,
    pub ei: BreakdownEntry,
    pub eo: BreakdownEntry,
    pub eq: BreakdownEntry,
    pub total: BreakdownTotal,
}

impl ComponentBreakdown {
    fn get_mut(&mut self, component_type: &ComponentType) -> Option<&mut BreakdownEntry> {
        match component_type {
            ComponentType::Ali => Some(&mut self.ali),
            ComponentType::Aie => Some(&mut self.aie),
            ComponentType::Ei => Some(&mut self.ei),
            ComponentType::Eo => Some(&mut self.eo),
            ComponentType::Eq => Some(&mut self.eq),
            ComponentType::Unrecognized(_) => None,
        }
    }

    /// The five typed entries in ALI, AIE, EI, EO, EQ order.
    pub fn entries(&self) -> [(ComponentType, &BreakdownEntry); 5] {
        [
            (ComponentType::Ali, &self.ali),
            (ComponentType::Aie, &self.aie),
            (ComponentType::Ei, &self.ei),
            (ComponentType::Eo, &self.eo),
            (ComponentType::Eq, &self.eq),
        ]
    }
}

/// Count and points per complexity level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexityBreakdown {
    pub low: BreakdownEntry,
    pub medium: BreakdownEntry,
    pub high: BreakdownEntry,
}

impl ComplexityBreakdown {
    fn get_mut(&mut self, complexity: &Complexity) -> Option<&mut BreakdownEntry> {
        match complexity {
            Complexity::Low => Some(&mut self.low),
            Complexity::Medium => Some(&mut self.medium),
            Complexity::High => Some(&mut self.high),
            Complexity::Unrecognized(_) => None,
        }
    }

    pub fn entries(&self) -> [(Complexity, &BreakdownEntry); 3] {
        [
            (Complexity::Low, &self.low),
            (Complexity::Medium, &self.medium),
            (Complexity::High, &self.high),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseEntry {
    pub hours: f64,
    pub percentage: f64,
}

/// Fixed split of effort hours across delivery phases.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseBreakdown {
    pub analysis: PhaseEntry,
    pub design: PhaseEntry,
    pub development: PhaseEntry,
    pub testing: PhaseEntry,
    pub deployment: PhaseEntry,
}

impl PhaseBreakdown {
    pub fn entries(&self) -> [(&'static str, &PhaseEntry); 5] {
        [
            ("analysis", &self.analysis),
            ("design", &self.design),
            ("development", &self.development),
            ("testing", &self.testing),
            ("deployment", &self.deployment),
        ]
    }
}

/// Categorized cost. `total` is the overall project cost, not the sum of
/// the four categories (which only cover 85% of it).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub development: f64,
    pub management: f64,
    pub infrastructure: f64,
    pub contingency: f64,
    pub total: f64,
}

pub const PHASE_ANALYSIS_PCT: f64 = 15.0;
pub const PHASE_DESIGN_PCT: f64 = 20.0;
pub const PHASE_DEVELOPMENT_PCT: f64 = 45.0;
pub const PHASE_TESTING_PCT: f64 = 15.0;
pub const PHASE_DEPLOYMENT_PCT: f64 = 5.0;

pub const COST_DEVELOPMENT_SHARE: f64 = 0.50;
pub const COST_MANAGEMENT_SHARE: f64 = 0.15;
pub const COST_INFRASTRUCTURE_SHARE: f64 = 0.10;
pub const COST_CONTINGENCY_SHARE: f64 = 0.10;

fn percentage_of(points: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        points / whole * 100.0
    }
}

/// Group components by type. Components of an unrecognized type are left
/// out of every group and of the total.
pub fn components(components: &[ComponentDetail]) -> ComponentBreakdown {
    let mut breakdown = ComponentBreakdown::default();

    for component in components {
        let Some(entry) = breakdown.get_mut(&component.component_type) else {
            continue;
        };
        entry.count += 1;
        entry.points += component.function_points;

        breakdown.total.count += 1;
        breakdown.total.points += component.function_points;
    }

    let total_points = breakdown.total.points;
    for entry in [
        &mut breakdown.ali,
        &mut breakdown.aie,
        &mut breakdown.ei,
        &mut breakdown.eo,
        &mut breakdown.eq,
    ] {
        entry.percentage = percentage_of(entry.points, total_points);
    }

    breakdown
}

/// Group components by complexity; percentages are relative to `pfna`.
/// Components with an unrecognized complexity are not counted.
pub fn complexity(components: &[ComponentDetail], pfna: f64) -> ComplexityBreakdown {
    let mut breakdown = ComplexityBreakdown::default();

    for component in components {
        if let Some(entry) = breakdown.get_mut(&component.complexity) {
            entry.count += 1;
            entry.points += component.function_points;
        }
    }

    for entry in [
        &mut breakdown.low,
        &mut breakdown.medium,
        &mut breakdown.high,
    ] {
        entry.percentage = percentage_of(entry.points, pfna);
    }

    breakdown
}

pub fn phases(effort_hours: f64) -> PhaseBreakdown {
    let phase = |percentage: f64| PhaseEntry {
        hours: effort_hours * percentage / 100.0,
        percentage,
    };

    PhaseBreakdown {
        analysis: phase(PHASE_ANALYSIS_PCT),
        design: phase(PHASE_DESIGN_PCT),
        development: phase(PHASE_DEVELOPMENT_PCT),
        testing: phase(PHASE_TESTING_PCT),
        deployment: phase(PHASE_DEPLOYMENT_PCT),
    }
}

pub fn costs(effort_hours: f64, hourly_rate: f64, total_cost: f64) -> CostBreakdown {
    CostBreakdown {
        development: effort_hours * COST_DEVELOPMENT_SHARE * hourly_rate,
        management: effort_hours * COST_MANAGEMENT_SHARE * hourly_rate,
        infrastructure: effort_hours * COST_INFRASTRUCTURE_SHARE * hourly_rate,
        contingency: effort_hours * COST_CONTINGENCY_SHARE * hourly_rate,
        total: total_cost,
    }
}
