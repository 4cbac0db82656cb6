//! Diopter estimates: age-based addition and working-distance demand.

/// Addition (ADD) estimate from age, in diopters.
///
/// Step table modeling accommodation loss with age; bands are inclusive on
/// their lower bound and must not be interpolated. Age 0 means "unknown".
pub fn add_from_age(age: u32) -> f64 {
    match age {
        0..=39 => 0.0,
        40..=44 => 0.75,
        45..=49 => 1.25,
        50..=54 => 1.75,
        55..=59 => 2.25,
        _ => 2.5,
    }
}

/// Focal demand of a working distance in centimeters: `100 / cm`, rounded
/// to 2 decimal places. Zero distance means "not provided" and yields 0.
pub fn demand(cm: u32) -> f64 {
    if cm == 0 {
        return 0.0;
    }
    (100.0 / cm as f64 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_bands_are_inclusive_on_lower_bound() {
        assert_eq!(add_from_age(39), 0.0);
        assert_eq!(add_from_age(40), 0.75);
        assert_eq!(add_from_age(44), 0.75);
        assert_eq!(add_from_age(45), 1.25);
        assert_eq!(add_from_age(50), 1.75);
        assert_eq!(add_from_age(55), 2.25);
        assert_eq!(add_from_age(59), 2.25);
        assert_eq!(add_from_age(60), 2.5);
        assert_eq!(add_from_age(85), 2.5);
    }

    #[test]
    fn unknown_age_has_no_addition() {
        assert_eq!(add_from_age(0), 0.0);
    }

    #[test]
    fn demand_is_hundred_over_cm_rounded() {
        assert_eq!(demand(40), 2.5);
        assert_eq!(demand(33), 3.03);
        assert_eq!(demand(100), 1.0);
    }

    #[test]
    fn zero_distance_means_no_demand() {
        assert_eq!(demand(0), 0.0);
    }
}
