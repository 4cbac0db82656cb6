//! Category decision and the top-level classification entry point.

use crate::estimate::{add_from_age, demand};
use crate::tasks::aggregate_weights;
use crate::types::{ClassificationInput, ClassificationResult, LensCategory, WeightVector};

/// Select a lens category from an aggregated weight vector.
///
/// The rule ranges overlap, so the arms encode priority: first match wins
/// and the order must not be rearranged. An all-zero vector falls through
/// to the ProgressiveDaily default.
pub fn decide(w: WeightVector) -> LensCategory {
    let WeightVector { far, mid, near } = w;
    match () {
        _ if far >= near + mid + 1 => LensCategory::DistanceSingleVision,
        _ if near >= far + mid && near >= 3 => LensCategory::NearSingleVision,
        _ if far >= 2 && (near >= 2 || mid >= 2) => LensCategory::ProgressiveDaily,
        _ if mid + near >= 3 && near >= mid + 1 => LensCategory::DeskProgressive,
        _ if mid + near >= 3 => LensCategory::OfficeProgressive,
        _ => LensCategory::ProgressiveDaily,
    }
}

/// Run the full classification: aggregate task weights, decide the category,
/// and derive the diopter figures.
///
/// Total over all inputs: unknown task names are ignored and zero numeric
/// fields mean "not provided", so this never fails.
pub fn classify(input: &ClassificationInput) -> ClassificationResult {
    let weights = aggregate_weights(&input.task_names);
    ClassificationResult {
        category: decide(weights),
        weights,
        age_addition_d: add_from_age(input.age),
        near_demand_d: demand(input.near_distance_cm),
        pc_demand_d: demand(input.pc_distance_cm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(far: u32, mid: u32, near: u32) -> WeightVector {
        WeightVector::new(far, mid, near)
    }

    #[test]
    fn far_dominant_is_distance_single_vision() {
        assert_eq!(decide(w(3, 0, 0)), LensCategory::DistanceSingleVision);
        // far must exceed near + mid, not merely match it.
        assert_eq!(decide(w(2, 1, 1)), LensCategory::ProgressiveDaily);
    }

    #[test]
    fn near_dominant_is_near_single_vision() {
        assert_eq!(decide(w(0, 0, 3)), LensCategory::NearSingleVision);
        // near >= 3 is required even when near dominates.
        assert_eq!(decide(w(0, 0, 2)), LensCategory::ProgressiveDaily);
    }

    #[test]
    fn mixed_far_and_close_is_daily_progressive() {
        assert_eq!(decide(w(2, 0, 2)), LensCategory::ProgressiveDaily);
        assert_eq!(decide(w(2, 2, 0)), LensCategory::ProgressiveDaily);
    }

    #[test]
    fn indoor_mix_splits_on_near_margin() {
        assert_eq!(decide(w(0, 2, 1)), LensCategory::OfficeProgressive);
        assert_eq!(decide(w(0, 1, 2)), LensCategory::DeskProgressive);
        assert_eq!(decide(w(0, 2, 2)), LensCategory::OfficeProgressive);
    }

    #[test]
    fn zero_vector_falls_through_to_daily() {
        assert_eq!(decide(w(0, 0, 0)), LensCategory::ProgressiveDaily);
    }

    #[test]
    fn rule_order_is_load_bearing() {
        // Satisfies both the daily-progressive and indoor rules; the earlier
        // daily rule must win.
        assert_eq!(decide(w(2, 3, 0)), LensCategory::ProgressiveDaily);
    }

    #[test]
    fn classify_combines_engine_pieces() {
        let input = ClassificationInput {
            task_names: vec!["運転".into(), "PC".into(), "スマホ".into()],
            age: 48,
            near_distance_cm: 40,
            pc_distance_cm: 60,
        };
        let result = classify(&input);
        assert_eq!(result.weights, w(3, 3, 4));
        assert_eq!(result.category, LensCategory::ProgressiveDaily);
        assert_eq!(result.age_addition_d, 1.25);
        assert_eq!(result.near_demand_d, 2.5);
        assert_eq!(result.pc_demand_d, 1.67);
    }

    #[test]
    fn classify_is_idempotent() {
        let input = ClassificationInput {
            task_names: vec!["家事".into(), "不明なもの".into()],
            age: 61,
            near_distance_cm: 0,
            pc_distance_cm: 33,
        };
        assert_eq!(classify(&input), classify(&input));
    }
}
