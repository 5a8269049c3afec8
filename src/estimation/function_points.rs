//! IFPUG function point sizing: PFNA, NI, FA and PFA.

use crate::core::{ComponentDetail, GeneralSystemCharacteristics};

/// Base of the value adjustment factor.
pub const VAF_BASE: f64 = 0.65;

/// Contribution of each degree of influence to the adjustment factor.
pub const VAF_STEP: f64 = 0.01;

/// Unadjusted function points: plain sum over every component, including
/// components whose type or complexity is unrecognized.
pub fn unadjusted(components: &[ComponentDetail]) -> f64 {
    components.iter().map(|c| c.function_points).sum()
}

/// Total degree of influence; zero when no characteristics were rated.
pub fn influence_total(gsc: Option<&GeneralSystemCharacteristics>) -> f64 {
    gsc.map(|g| f64::from(g.total())).unwrap_or(0.0)
}

/// `0.65 + 0.01 * NI` when characteristics were rated, otherwise `1`.
pub fn value_adjustment_factor(gsc: Option<&GeneralSystemCharacteristics>) -> f64 {
    match gsc {
        Some(g) => VAF_BASE + VAF_STEP * f64::from(g.total()),
        None => 1.0,
    }
}

pub fn adjusted(pfna: f64, fa: f64) -> f64 {
    pfna * fa
}
