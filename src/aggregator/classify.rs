use super::types::Level;

/// Maps a zone's dominant demand level to its assignment level.
///
/// Only the exact values `"High"` and `"Medium"` carry over; every other
/// value, recognized or not, is [`Level::Low`].
pub fn classify_assignment(demand_level: &str) -> Level {
    match demand_level {
        "High" => Level::High,
        "Medium" => Level::Medium,
        _ => Level::Low,
    }
}

/// Converts an incentive rate (0.0–1.0) into an incentive likelihood.
///
/// | Range             | Level  |
/// |-------------------|--------|
/// | > 0.4             | High   |
/// | > 0.2 and <= 0.4  | Medium |
/// | <= 0.2            | Low    |
///
/// Boundary values fall into the lower band.
pub fn classify_incentive(rate: f64) -> Level {
    match rate {
        r if r > 0.4 => Level::High,
        r if r > 0.2 => Level::Medium,
        _ => Level::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incentive_boundaries() {
        assert_eq!(classify_incentive(1.0), Level::High);
        assert_eq!(classify_incentive(0.41), Level::High);
        assert_eq!(classify_incentive(0.4), Level::Medium);
        assert_eq!(classify_incentive(0.21), Level::Medium);
        assert_eq!(classify_incentive(0.2), Level::Low);
        assert_eq!(classify_incentive(0.0), Level::Low);
    }

    #[test]
    fn test_assignment_mapping() {
        assert_eq!(classify_assignment("High"), Level::High);
        assert_eq!(classify_assignment("Medium"), Level::Medium);
        assert_eq!(classify_assignment("Low"), Level::Low);
        assert_eq!(classify_assignment("Unknown"), Level::Low);
    }

    #[test]
    fn test_assignment_is_case_sensitive() {
        assert_eq!(classify_assignment("high"), Level::Low);
        assert_eq!(classify_assignment(""), Level::Low);
    }
}
