use super::types::Level;

/// Renders the one-sentence explanation shown next to a zone.
pub fn build_explanation(
    dominant_demand: &str,
    assignment_level: Level,
    incentive_likelihood: Level,
) -> String {
    format!(
        "Demand is {dominant_demand}, resulting in {assignment_level} task availability. \
         Incentives are {}.",
        incentive_likelihood.as_str().to_lowercase()
    )
}
