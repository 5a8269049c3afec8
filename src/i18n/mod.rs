//! Localization capability for user-facing engine messages.
//!
//! The engine never depends on a particular i18n framework. It receives an
//! optional [`Translate`] implementation and, when none is given, falls back
//! to the English literal supplied at each call site.
//!
//! ```rust
//! use fpa_estimator::i18n::{message, Translate};
//!
//! let upper = |key: &str| key.to_uppercase();
//! assert_eq!(message(Some(&upper), "a.b", "fallback"), "A.B");
//! assert_eq!(message(None, "a.b", "fallback"), "fallback");
//! ```

pub mod catalog;

pub use catalog::MessageCatalog;

/// Maps a dotted message key to a display string.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Translated message for `key`, or `fallback` when no translator is present.
pub fn message(translate: Option<&dyn Translate>, key: &str, fallback: &str) -> String {
    match translate {
        Some(t) => t.translate(key),
        None => fallback.to_string(),
    }
}

/// Message keys consumed by the risk analysis.
pub mod keys {
    pub const TEAM_SIZE_VERY_LARGE: &str = "analysis.riskReasons.teamSize.veryLarge";
    pub const TEAM_SIZE_LARGE: &str = "analysis.riskReasons.teamSize.large";
    pub const TEAM_SIZE_ADEQUATE: &str = "analysis.riskReasons.teamSize.adequate";

    pub const DURATION_VERY_LONG: &str = "analysis.riskReasons.duration.veryLong";
    pub const DURATION_LONG: &str = "analysis.riskReasons.duration.long";
    pub const DURATION_VERY_SHORT: &str = "analysis.riskReasons.duration.veryShort";
    pub const DURATION_ADEQUATE: &str = "analysis.riskReasons.duration.adequate";

    pub const COMPLEXITY_HIGH: &str = "analysis.riskReasons.complexity.high";
    pub const COMPLEXITY_MODERATE: &str = "analysis.riskReasons.complexity.moderate";
    pub const COMPLEXITY_LOW: &str = "analysis.riskReasons.complexity.low";

    pub const PRODUCTIVITY_VERY_LOW: &str = "analysis.riskReasons.productivity.veryLow";
    pub const PRODUCTIVITY_LOW: &str = "analysis.riskReasons.productivity.low";
    pub const PRODUCTIVITY_VERY_HIGH: &str = "analysis.riskReasons.productivity.veryHigh";
    pub const PRODUCTIVITY_ADEQUATE: &str = "analysis.riskReasons.productivity.adequate";

    pub const RECOMMEND_TEAM_SIZE: &str = "analysis.recommendations.teamSize";
    pub const RECOMMEND_DURATION: &str = "analysis.recommendations.duration";
    pub const RECOMMEND_COMPLEXITY: &str = "analysis.recommendations.complexity";
    pub const RECOMMEND_PRODUCTIVITY: &str = "analysis.recommendations.productivity";
}
