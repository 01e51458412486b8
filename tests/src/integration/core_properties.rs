//! # Core Properties
//!
//! The documented contracts of the index crates, checked through their
//! public APIs with literal cases and `proptest` models.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bx_01_scoring::{moving_average, score_fraud, score_lead};
    use bx_02_duplicate_index::{DuplicateIndex, LookupError};
    use bx_03_price_index::PriceIndex;
    use bx_04_intake_queue::{IntakeQueue, QueueError};
    use bx_05_referral_graph::ReferralGraph;
    use proptest::prelude::*;
    use shared_types::{Claim, Lead, LeadSource, RiskLevel};

    #[test]
    fn test_reference_scores() {
        let lead = Lead::new("John", "john@enterprise.com")
            .with_budget(100_000.0)
            .with_source(LeadSource::Referral);
        assert_eq!(score_lead(&lead), 45);

        let codes = vec!["a".to_string(), "b".into(), "c".into(), "d".into()];
        let fraud = score_fraud(&Claim::new("P", "Dr", 15_000.0, codes));
        assert_eq!(fraud.score, 65);
        assert_eq!(fraud.tier, RiskLevel::High);

        let values: Vec<f64> = (1..=8).map(f64::from).collect();
        assert_eq!(moving_average(&values, 7)[7], 5.0);
    }

    #[test]
    fn test_top_referrers_reference_case() {
        let mut graph = ReferralGraph::new();
        for v in ["A", "B", "C", "D"] {
            graph.add_vertex(v);
        }
        for (from, to) in [("A", "B"), ("A", "C"), ("A", "D"), ("B", "D"), ("C", "A"), ("C", "B"), ("C", "D")] {
            graph.add_edge(from, to);
        }
        let top: Vec<&str> = graph.get_top_referrers(2).into_iter().map(|r| r.vertex).collect();
        assert_eq!(top, vec!["A", "C"]);
    }

    #[test]
    fn test_empty_structures_report_errors() {
        let mut queue: IntakeQueue<(), u32> = IntakeQueue::new();
        assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));

        let index: DuplicateIndex<String, u64> = DuplicateIndex::new();
        assert_eq!(index.get("missing"), Err(LookupError::NotFound));

        let tree: PriceIndex<f64, ()> = PriceIndex::new();
        assert!(tree.range_search(&10.0, &1.0).is_empty());

        let graph: ReferralGraph<&str> = ReferralGraph::new();
        assert_eq!(graph.bfs(&"lonely"), vec!["lonely"]);
        assert_eq!(graph.dfs(&"lonely"), vec!["lonely"]);
    }

    #[test]
    fn test_duplicate_prices_at_both_bounds() {
        let mut tree = PriceIndex::new();
        for (price, name) in [
            (400.0, "Monitor"),
            (50.0, "Mouse"),
            (150.0, "Keyboard"),
            (400.0, "Monitor B"),
            (50.0, "Mouse B"),
            (1500.0, "Laptop"),
            (400.0, "Monitor C"),
        ] {
            tree.insert(price, name);
        }

        let hits: Vec<&str> = tree.range_search(&50.0, &400.0).into_iter().map(|(_, n)| *n).collect();
        assert_eq!(
            hits,
            vec!["Mouse", "Mouse B", "Keyboard", "Monitor", "Monitor B", "Monitor C"]
        );

        let exact: Vec<&str> = tree.range_search(&400.0, &400.0).into_iter().map(|(_, n)| *n).collect();
        assert_eq!(exact, vec!["Monitor", "Monitor B", "Monitor C"]);
    }

    proptest! {
        #[test]
        fn prop_queue_drains_non_decreasing(priorities in prop::collection::vec(0u32..500, 0..150)) {
            let mut queue = IntakeQueue::new();
            queue.extend(priorities.iter().map(|p| (*p, *p)));
            let drained: Vec<u32> = std::iter::from_fn(|| queue.dequeue().ok().map(|s| s.priority)).collect();
            let mut sorted = priorities.clone();
            sorted.sort();
            prop_assert_eq!(drained, sorted);
        }

        #[test]
        fn prop_snapshot_is_repeatable(priorities in prop::collection::vec(0u8..10, 0..60)) {
            let mut queue = IntakeQueue::new();
            for (i, p) in priorities.iter().enumerate() {
                queue.enqueue(i, *p);
            }
            let first: Vec<(usize, u8)> = queue.snapshot().iter().map(|s| (s.item, s.priority)).collect();
            let second: Vec<(usize, u8)> = queue.snapshot().iter().map(|s| (s.item, s.priority)).collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_has_follows_set(keys in prop::collection::vec("[a-z]{1,6}@[a-z]{1,4}\\.com", 1..40)) {
            let mut index = DuplicateIndex::new();
            for (i, key) in keys.iter().enumerate() {
                let seen_before = keys[..i].contains(key);
                prop_assert_eq!(index.has(key.as_str()), seen_before);
                index.set(key.clone(), i);
                prop_assert!(index.has(key.as_str()));
                prop_assert_eq!(index.get(key.as_str()), Ok(&i));
            }
        }

        #[test]
        fn prop_price_range_is_exact_subset(
            prices in prop::collection::vec(0u32..2_000, 0..100),
            lo in 0u32..2_000,
            hi in 0u32..2_000,
        ) {
            let mut tree = PriceIndex::new();
            for (i, p) in prices.iter().enumerate() {
                tree.insert(f64::from(*p), i);
            }
            let (min, max) = (f64::from(lo), f64::from(hi));
            let got: Vec<f64> = tree.range_search(&min, &max).into_iter().map(|(k, _)| *k).collect();

            let mut expected: Vec<f64> = prices
                .iter()
                .map(|p| f64::from(*p))
                .filter(|p| min <= max && *p >= min && *p <= max)
                .collect();
            expected.sort_by(|a, b| a.total_cmp(b));
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn prop_traversals_visit_reachable_once(
            edges in prop::collection::vec((0u16..30, 0u16..30), 0..90),
            start in 0u16..30,
        ) {
            let mut graph = ReferralGraph::new();
            for (from, to) in &edges {
                graph.add_edge(*from, *to);
            }

            let mut reachable = HashSet::from([start]);
            let mut frontier = vec![start];
            while let Some(v) = frontier.pop() {
                for (from, to) in &edges {
                    if *from == v && reachable.insert(*to) {
                        frontier.push(*to);
                    }
                }
            }

            for order in [graph.bfs(&start), graph.dfs(&start)] {
                prop_assert_eq!(order[0], start);
                let unique: HashSet<u16> = order.iter().copied().collect();
                prop_assert_eq!(unique.len(), order.len());
                prop_assert_eq!(&unique, &reachable);
            }
        }
    }
}
