use super::{RiskFactors, RiskLevel};
use crate::i18n::{keys, message, Translate};
use im::Vector;

struct Advice {
    key: &'static str,
    fallback: &'static str,
}

const TEAM_SIZE_ADVICE: Advice = Advice {
    key: keys::RECOMMEND_TEAM_SIZE,
    fallback: "Consider splitting the team into smaller sub-teams with clear interfaces and responsibilities",
};
const DURATION_ADVICE: Advice = Advice {
    key: keys::RECOMMEND_DURATION,
    fallback: "Review the schedule: plan incremental deliveries or revisit the timeline and scope",
};
const COMPLEXITY_ADVICE: Advice = Advice {
    key: keys::RECOMMEND_COMPLEXITY,
    fallback: "Prioritize detailed analysis and early prototyping of high-complexity components",
};
const PRODUCTIVITY_ADVICE: Advice = Advice {
    key: keys::RECOMMEND_PRODUCTIVITY,
    fallback: "Compare the productivity factor with historical data from similar projects",
};

/// One advisory per HIGH factor, in team size, duration, complexity,
/// productivity order.
pub fn recommendations(factors: &RiskFactors, translate: Option<&dyn Translate>) -> Vector<String> {
    let advice = [
        (&factors.team_size, TEAM_SIZE_ADVICE),
        (&factors.project_duration, DURATION_ADVICE),
        (&factors.complexity, COMPLEXITY_ADVICE),
        (&factors.productivity, PRODUCTIVITY_ADVICE),
    ];

    advice
        .into_iter()
        .filter(|(factor, _)| factor.risk == RiskLevel::High)
        .map(|(_, advice)| message(translate, advice.key, advice.fallback))
        .collect()
}
