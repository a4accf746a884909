use std::collections::HashSet;

use arec::evaluation::{average_precision_at_k, precision_at_k, recall_at_k};
use proptest::prelude::*;

fn ranked_and_relevant() -> impl Strategy<Value = (Vec<String>, HashSet<String>)> {
    (
        prop::collection::vec("[a-f]", 0..12),
        prop::collection::hash_set("[a-h]", 0..5),
    )
        .prop_map(|(ranked, relevant)| {
            let mut seen = HashSet::new();
            let ranked = ranked.into_iter().filter(|name| seen.insert(name.clone())).collect();
            (ranked, relevant)
        })
}

fn borrow<'a>(ranked: &'a [String], relevant: &'a HashSet<String>) -> (Vec<&'a str>, HashSet<&'a str>) {
    (
        ranked.iter().map(String::as_str).collect(),
        relevant.iter().map(String::as_str).collect(),
    )
}

proptest! {
    #[test]
    fn metrics_stay_in_unit_interval((ranked, relevant) in ranked_and_relevant(), k in 0usize..15) {
        let (ranked, relevant) = borrow(&ranked, &relevant);
        for value in [
            recall_at_k(&ranked, &relevant, k),
            average_precision_at_k(&ranked, &relevant, k),
            precision_at_k(&ranked, &relevant, k),
        ] {
            prop_assert!((0.0..=1.0).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn recall_never_drops_with_depth((ranked, relevant) in ranked_and_relevant(), k in 0usize..12) {
        let (ranked, relevant) = borrow(&ranked, &relevant);
        prop_assert!(recall_at_k(&ranked, &relevant, k + 1) >= recall_at_k(&ranked, &relevant, k));
    }

    #[test]
    fn perfect_ranking_scores_one(relevant in prop::collection::hash_set("[a-z]{3}", 1..6)) {
        let ranked: Vec<&str> = relevant.iter().map(String::as_str).collect();
        let relevant: HashSet<&str> = ranked.iter().copied().collect();
        let k = ranked.len();
        prop_assert!((recall_at_k(&ranked, &relevant, k) - 1.0).abs() < 1e-9);
        prop_assert!((average_precision_at_k(&ranked, &relevant, k) - 1.0).abs() < 1e-9);
        prop_assert!((precision_at_k(&ranked, &relevant, k) - 1.0).abs() < 1e-9);
    }
}
