//! Static task→weight table and weight aggregation.
//!
//! The table is a closed, hand-tuned rule set: no runtime registration, no
//! mutation. Unknown task names are silently ignored so a request mixing
//! valid and invalid names still classifies from the recognized subset.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::types::{TaskWeight, WeightVector};

static TASK_WEIGHTS: Lazy<HashMap<&'static str, TaskWeight>> = Lazy::new(|| {
    HashMap::from([
        ("運転", TaskWeight::new(3, 0, 0)),
        ("PC", TaskWeight::new(0, 3, 1)),
        ("読書", TaskWeight::new(0, 0, 3)),
        ("スマホ", TaskWeight::new(0, 0, 3)),
        ("家事", TaskWeight::new(0, 2, 2)),
        ("手芸", TaskWeight::new(0, 1, 3)),
        ("散歩/外出", TaskWeight::new(2, 1, 0)),
        ("スポーツ", TaskWeight::new(3, 0, 0)),
    ])
});

/// Look up a task's weight triple. Unknown names yield the zero triple.
pub fn task_weight(name: &str) -> TaskWeight {
    TASK_WEIGHTS.get(name).copied().unwrap_or(TaskWeight::ZERO)
}

/// True if the name is in the known task set.
pub fn is_known_task(name: &str) -> bool {
    TASK_WEIGHTS.contains_key(name)
}

/// All known task names, in panel display order.
pub const TASK_NAMES: [&str; 8] = [
    "運転", "PC", "読書", "スマホ", "家事", "手芸", "散歩/外出", "スポーツ",
];

/// Sum the weight triples of the given task names. Duplicates count twice,
/// order is irrelevant, and the empty sequence sums to zero.
pub fn aggregate_weights<I, S>(names: I) -> WeightVector
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = WeightVector::default();
    for name in names {
        total.add(task_weight(name.as_ref()));
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_task_returns_its_triple() {
        assert_eq!(task_weight("運転"), TaskWeight::new(3, 0, 0));
        assert_eq!(task_weight("PC"), TaskWeight::new(0, 3, 1));
    }

    #[test]
    fn unknown_task_is_zero() {
        assert_eq!(task_weight("ゲーム"), TaskWeight::ZERO);
        assert!(!is_known_task("ゲーム"));
    }

    #[test]
    fn aggregates_elementwise() {
        let w = aggregate_weights(["運転", "PC", "スマホ"]);
        assert_eq!(w, WeightVector::new(3, 3, 4));
    }

    #[test]
    fn unknown_names_contribute_nothing() {
        let w = aggregate_weights(["運転", "???", "ゲーム"]);
        assert_eq!(w, WeightVector::new(3, 0, 0));
    }

    #[test]
    fn duplicates_count_twice() {
        let w = aggregate_weights(["読書", "読書"]);
        assert_eq!(w, WeightVector::new(0, 0, 6));
    }

    #[test]
    fn empty_selection_is_zero() {
        let w = aggregate_weights(std::iter::empty::<&str>());
        assert_eq!(w, WeightVector::default());
    }

    #[test]
    fn panel_order_names_are_all_known() {
        for name in TASK_NAMES {
            assert!(is_known_task(name), "{name} missing from table");
        }
    }
}
