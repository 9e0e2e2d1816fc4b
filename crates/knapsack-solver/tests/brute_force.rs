use knapsack_solver::{DynamicSolver, Knapsack, KnapsackSolver, SolverStatus};
use proptest::prelude::*;

fn items_strategy(max_items: usize) -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..10, 0i64..20), 0..=max_items)
}

fn build(capacity: i64, items: &[(i64, i64)]) -> Knapsack {
    let mut kp = Knapsack::new(capacity).unwrap();
    for (k, &(w, v)) in items.iter().enumerate() {
        kp.add_item(format!("item{k}"), w, v).unwrap();
    }
    kp
}

fn brute_force(capacity: i64, items: &[(i64, i64)]) -> i64 {
    let n = items.len();
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let mut weight = 0;
        let mut value = 0;
        for (i, &(w, v)) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                weight += w;
                value += v;
            }
        }
        if weight <= capacity && value > best {
            best = value;
        }
    }
    best
}

proptest! {
    #[test]
    fn dp_matches_brute_force(capacity in 0i64..40, items in items_strategy(14)) {
        let kp = build(capacity, &items);
        let mut solver = DynamicSolver::with_problem(&kp);
        prop_assert!(solver.optimize());
        prop_assert_eq!(solver.status(), SolverStatus::Optimal);
        let solution = solver.solution().unwrap();
        prop_assert_eq!(solution.value, brute_force(capacity, &items));
    }

    #[test]
    fn selection_is_valid(capacity in 0i64..40, items in items_strategy(16)) {
        let kp = build(capacity, &items);
        let mut solver = DynamicSolver::with_problem(&kp);
        prop_assert!(solver.optimize());
        let solution = solver.solution().unwrap();

        prop_assert!(solution.total_weight(&kp) <= capacity);
        prop_assert_eq!(solution.total_value(&kp), solution.value);
        // Strictly ascending means unique
        prop_assert!(solution.items.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(solution.items.iter().all(|&i| i < items.len()));
    }

    #[test]
    fn repeated_runs_are_identical(capacity in 0i64..30, items in items_strategy(12)) {
        let kp = build(capacity, &items);
        let mut first = DynamicSolver::with_problem(&kp);
        let mut second = DynamicSolver::with_problem(&kp);
        prop_assert!(first.optimize());
        prop_assert!(second.optimize());
        prop_assert_eq!(first.solution(), second.solution());
    }

    #[test]
    fn groups_stay_consistent(
        groups in prop::collection::vec(prop::collection::vec((0i64..10, -5i64..10), 0..5), 0..8)
    ) {
        let mut kp = Knapsack::new(10).unwrap();
        for (g, group) in groups.iter().enumerate() {
            let weights: Vec<i64> = group.iter().map(|&(w, _)| w).collect();
            let values: Vec<i64> = group.iter().map(|&(_, v)| v).collect();
            kp.add_item_group(format!("group{g}"), &weights, &values).unwrap();
            prop_assert!(kp.check_consistency());
        }

        let mut expected_location = 0;
        for (g, group) in groups.iter().enumerate() {
            let name = format!("group{g}");
            let recorded = kp.group(&name).unwrap();
            prop_assert_eq!(recorded.location, expected_location);
            prop_assert_eq!(kp.group_count(&name), group.len());
            for (k, &(w, v)) in group.iter().enumerate() {
                prop_assert_eq!(kp.get_weight(&name, k).unwrap(), w);
                prop_assert_eq!(kp.get_value(&name, k).unwrap(), v);
            }
            expected_location += group.len();
        }
        prop_assert_eq!(kp.item_count(), expected_location);
    }

    #[test]
    fn standard_decoding_reads_block_layout(capacity in 0i64..50, items in items_strategy(10)) {
        let mut kp_std = vec![items.len() as i64, capacity];
        kp_std.extend(items.iter().map(|&(w, _)| w));
        kp_std.extend(items.iter().map(|&(_, v)| v));

        let kp = Knapsack::from_standard(&kp_std).unwrap();
        let weights: Vec<i64> = items.iter().map(|&(w, _)| w).collect();
        let values: Vec<i64> = items.iter().map(|&(_, v)| v).collect();
        prop_assert_eq!(kp.capacity(), capacity);
        prop_assert_eq!(kp.weights(), weights.as_slice());
        prop_assert_eq!(kp.values(), values.as_slice());

        let mut solver = DynamicSolver::new();
        prop_assert!(solver.link_standard(&kp_std).is_ok());
        prop_assert!(solver.optimize());
        prop_assert_eq!(solver.solution().unwrap().value, brute_force(capacity, &items));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn dp_matches_brute_force_twenty_items(
        capacity in 0i64..60,
        items in prop::collection::vec((0i64..10, 0i64..20), 18..=20)
    ) {
        let kp = build(capacity, &items);
        let mut solver = DynamicSolver::with_problem(&kp);
        prop_assert!(solver.optimize());
        prop_assert_eq!(solver.solution().unwrap().value, brute_force(capacity, &items));
    }
}
