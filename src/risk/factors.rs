//! Threshold ladders for the individual risk factors.
//!
//! Each ladder is an ordered list of rungs evaluated top to bottom; the first
//! rung whose predicate holds decides both the rating and the reason. When no
//! rung applies the ladder's catch-all verdict is used.

use super::{RiskFactor, RiskLevel};
use crate::i18n::{keys, message, Translate};

struct Rung {
    applies: fn(f64) -> bool,
    risk: RiskLevel,
    key: &'static str,
    fallback: &'static str,
}

struct Verdict {
    risk: RiskLevel,
    key: &'static str,
    fallback: &'static str,
}

struct Ladder {
    rungs: &'static [Rung],
    otherwise: Verdict,
}

const TEAM_SIZE_LADDER: Ladder = Ladder {
    rungs: &[
        Rung {
            applies: |size| size > 10.0,
            risk: RiskLevel::High,
            key: keys::TEAM_SIZE_VERY_LARGE,
            fallback: "Very large team (more than 10 people) increases communication and coordination overhead",
        },
        Rung {
            applies: |size| size > 6.0,
            risk: RiskLevel::Medium,
            key: keys::TEAM_SIZE_LARGE,
            fallback: "Large team (7 to 10 people) requires additional coordination",
        },
    ],
    otherwise: Verdict {
        risk: RiskLevel::Low,
        key: keys::TEAM_SIZE_ADEQUATE,
        fallback: "Team size is adequate for the project",
    },
};

// Long durations are checked before the short one.
const DURATION_LADDER: Ladder = Ladder {
    rungs: &[
        Rung {
            applies: |days| days > 365.0,
            risk: RiskLevel::High,
            key: keys::DURATION_VERY_LONG,
            fallback: "Project longer than one year carries high schedule uncertainty",
        },
        Rung {
            applies: |days| days > 180.0,
            risk: RiskLevel::Medium,
            key: keys::DURATION_LONG,
            fallback: "Project longer than six months needs close schedule monitoring",
        },
        Rung {
            applies: |days| days < 10.0,
            risk: RiskLevel::High,
            key: keys::DURATION_VERY_SHORT,
            fallback: "Very short schedule (under 10 working days) leaves no room for contingencies",
        },
    ],
    otherwise: Verdict {
        risk: RiskLevel::Low,
        key: keys::DURATION_ADEQUATE,
        fallback: "Project duration is within a manageable range",
    },
};

const COMPLEXITY_LADDER: Ladder = Ladder {
    rungs: &[
        Rung {
            applies: |pct| pct > 40.0,
            risk: RiskLevel::High,
            key: keys::COMPLEXITY_HIGH,
            fallback: "More than 40% of function points come from high-complexity components",
        },
        Rung {
            applies: |pct| pct > 20.0,
            risk: RiskLevel::Medium,
            key: keys::COMPLEXITY_MODERATE,
            fallback: "More than 20% of function points come from high-complexity components",
        },
    ],
    otherwise: Verdict {
        risk: RiskLevel::Low,
        key: keys::COMPLEXITY_LOW,
        fallback: "Most function points come from low or medium complexity components",
    },
};

const PRODUCTIVITY_LADDER: Ladder = Ladder {
    rungs: &[
        Rung {
            applies: |factor| factor > 20.0,
            risk: RiskLevel::High,
            key: keys::PRODUCTIVITY_VERY_LOW,
            fallback: "More than 20 hours per function point indicates very low productivity",
        },
        Rung {
            applies: |factor| factor > 15.0,
            risk: RiskLevel::Medium,
            key: keys::PRODUCTIVITY_LOW,
            fallback: "More than 15 hours per function point is below average productivity",
        },
        Rung {
            applies: |factor| factor < 5.0,
            risk: RiskLevel::High,
            key: keys::PRODUCTIVITY_VERY_HIGH,
            fallback: "Fewer than 5 hours per function point is likely over-optimistic",
        },
    ],
    otherwise: Verdict {
        risk: RiskLevel::Low,
        key: keys::PRODUCTIVITY_ADEQUATE,
        fallback: "Productivity factor is within the expected range",
    },
};

fn climb(ladder: &Ladder, value: f64, translate: Option<&dyn Translate>) -> RiskFactor {
    let (risk, key, fallback) = match ladder.rungs.iter().find(|rung| (rung.applies)(value)) {
        Some(rung) => (rung.risk, rung.key, rung.fallback),
        None => (
            ladder.otherwise.risk,
            ladder.otherwise.key,
            ladder.otherwise.fallback,
        ),
    };

    RiskFactor {
        risk,
        reason: message(translate, key, fallback),
    }
}

pub fn team_size_risk(team_size: u32, translate: Option<&dyn Translate>) -> RiskFactor {
    climb(&TEAM_SIZE_LADDER, f64::from(team_size), translate)
}

pub fn duration_risk(duration_days: f64, translate: Option<&dyn Translate>) -> RiskFactor {
    climb(&DURATION_LADDER, duration_days, translate)
}

/// Rated on the share of points coming from HIGH complexity components.
pub fn complexity_risk(high_percentage: f64, translate: Option<&dyn Translate>) -> RiskFactor {
    climb(&COMPLEXITY_LADDER, high_percentage, translate)
}

/// Rated on the configured hours per function point.
pub fn productivity_risk(
    productivity_factor: f64,
    translate: Option<&dyn Translate>,
) -> RiskFactor {
    climb(&PRODUCTIVITY_LADDER, productivity_factor, translate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use RiskLevel::{High, Low, Medium};

    #[test]
    fn test_team_size_thresholds() {
        assert_eq!(team_size_risk(12, None).risk, High);
        assert_eq!(team_size_risk(11, None).risk, High);
        assert_eq!(team_size_risk(10, None).risk, Medium);
        assert_eq!(team_size_risk(7, None).risk, Medium);
        assert_eq!(team_size_risk(6, None).risk, Low);
        assert_eq!(team_size_risk(1, None).risk, Low);
    }

    #[test]
    fn test_duration_has_two_high_branches() {
        assert_eq!(duration_risk(400.0, None).risk, High);
        assert_eq!(duration_risk(365.0, None).risk, Medium);
        assert_eq!(duration_risk(181.0, None).risk, Medium);
        assert_eq!(duration_risk(180.0, None).risk, Low);
        assert_eq!(duration_risk(10.0, None).risk, Low);
        assert_eq!(duration_risk(9.99, None).risk, High);
        assert_eq!(duration_risk(5.0, None).risk, High);
    }

    #[test]
    fn test_short_and_long_durations_give_different_reasons() {
        let short = duration_risk(5.0, None);
        let long = duration_risk(500.0, None);
        assert_eq!(short.risk, long.risk);
        assert_ne!(short.reason, long.reason);
    }

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(complexity_risk(40.1, None).risk, High);
        assert_eq!(complexity_risk(40.0, None).risk, Medium);
        assert_eq!(complexity_risk(20.0, None).risk, Low);
        assert_eq!(complexity_risk(0.0, None).risk, Low);
    }

    #[test]
    fn test_productivity_thresholds() {
        assert_eq!(productivity_risk(25.0, None).risk, High);
        assert_eq!(productivity_risk(20.0, None).risk, Medium);
        assert_eq!(productivity_risk(15.0, None).risk, Low);
        assert_eq!(productivity_risk(5.0, None).risk, Low);
        assert_eq!(productivity_risk(4.0, None).risk, High);
    }

    #[test]
    fn test_nan_duration_falls_through_to_low() {
        assert_eq!(duration_risk(f64::NAN, None).risk, Low);
    }

    #[test]
    fn test_ladder_without_matching_rung_uses_catch_all() {
        let ladder = Ladder {
            rungs: &[],
            otherwise: Verdict {
                risk: Medium,
                key: "analysis.riskReasons.test.otherwise",
                fallback: "Nothing matched",
            },
        };
        let factor = climb(&ladder, 42.0, None);
        assert_eq!(factor.risk, Medium);
        assert_eq!(factor.reason, "Nothing matched");
    }

    #[test]
    fn test_reason_is_translated() {
        let t = |key: &str| format!("<{key}>");
        let factor = team_size_risk(12, Some(&t));
        assert_eq!(factor.reason, "<analysis.riskReasons.teamSize.veryLarge>");
    }
}
