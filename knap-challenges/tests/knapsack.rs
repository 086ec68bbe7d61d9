use knap_challenges::knapsack::{baselines, dataset, Challenge, Item, Solution, Track};

fn small_challenge() -> Challenge {
    Challenge::new(
        vec![
            Item::new("a", 1.0, 6),
            Item::new("b", 2.0, 10),
            Item::new("c", 2.0, 10),
        ],
        4.0,
    )
    .unwrap()
}

#[test]
fn test_reference_dataset() {
    let challenge = dataset::reference_challenge();
    assert!(challenge.validate().is_ok());
    assert_eq!(challenge.num_items(), 10);
    assert_eq!(challenge.capacity, dataset::REFERENCE_CAPACITY);
    assert_eq!(challenge.items[8], Item::new("sapphire_ring", 0.5, 900));
}

#[test]
fn test_validate_rejects_bad_instances() {
    assert!(Challenge::new(vec![Item::new("a", 1.0, 1)], -1.0).is_err());
    assert!(Challenge::new(vec![Item::new("a", 1.0, 1)], f64::INFINITY).is_err());
    assert!(Challenge::new(vec![Item::new("a", -0.5, 1)], 1.0).is_err());
    assert!(Challenge::new(vec![Item::new("a", f64::NAN, 1)], 1.0).is_err());
    assert!(Challenge::new(vec![Item::new("a", 1.0, 1), Item::new("a", 2.0, 2)], 5.0).is_err());
    assert!(Challenge::new(vec![Item::new("a", 0.0, 1)], 0.0).is_ok());
}

#[test]
fn test_solution_from_items() {
    let challenge = small_challenge();
    let solution = Solution::from_items(&challenge, &[2, 0]).unwrap();
    assert_eq!(solution.included, vec![true, false, true]);
    assert_eq!(solution.value, 16);
    assert_eq!(solution.items(), vec![0, 2]);
    assert_eq!(solution.selected_names(&challenge), vec!["a", "c"]);

    assert!(Solution::from_items(&challenge, &[0, 0]).is_err());
    assert!(Solution::from_items(&challenge, &[3]).is_err());
}

#[test]
fn test_evaluate_total_value() {
    let challenge = small_challenge();
    let solution = Solution::from_items(&challenge, &[1, 2]).unwrap();
    assert_eq!(challenge.evaluate_total_value(&solution).unwrap(), 20);
    assert_eq!(challenge.evaluate_total_weight(&solution).unwrap(), 4.0);

    let overweight = Solution::from_items(&challenge, &[0, 1, 2]).unwrap();
    assert!(challenge.evaluate_total_value(&overweight).is_err());

    let mut misreported = solution.clone();
    misreported.value = 21;
    assert!(challenge.evaluate_total_value(&misreported).is_err());

    assert!(challenge.evaluate_total_value(&Solution::new(2)).is_err());
}

#[test]
fn test_greedy_baseline() {
    let challenge = small_challenge();
    let greedy = baselines::greedy::solve_challenge(&challenge).unwrap();
    assert_eq!(greedy.items(), vec![0, 1]);
    assert_eq!(greedy.value, 16);

    let reference = dataset::reference_challenge();
    let greedy = reference.compute_greedy_baseline().unwrap();
    assert_eq!(greedy.value, 6800);
    assert_eq!(
        greedy.selected_names(&reference),
        vec![
            "ancient_coin",
            "diamond",
            "silver_necklace",
            "crown",
            "sapphire_ring",
            "treasure_map"
        ]
    );
}

#[test]
fn test_greedy_takes_weightless_items_first() {
    let challenge = Challenge::new(
        vec![Item::new("heavy", 3.0, 100), Item::new("free", 0.0, 1)],
        3.0,
    )
    .unwrap();
    let greedy = challenge.compute_greedy_baseline().unwrap();
    assert_eq!(greedy.items(), vec![0, 1]);
    assert_eq!(greedy.value, 101);
}

#[test]
fn test_evaluate_solution_against_greedy() {
    let challenge = small_challenge();
    let better = Solution::from_items(&challenge, &[1, 2]).unwrap();
    assert_eq!(challenge.evaluate_solution(&better).unwrap(), 4);
    let worse = Solution::from_items(&challenge, &[1]).unwrap();
    assert_eq!(challenge.evaluate_solution(&worse).unwrap(), -6);

    let challenge = Challenge::new(
        vec![Item::new("rich", 1.0, u64::MAX), Item::new("poor", 0.5, 1)],
        1.0,
    )
    .unwrap();
    let poor = Solution::from_items(&challenge, &[1]).unwrap();
    assert_eq!(challenge.evaluate_solution(&poor).unwrap(), 1 - u64::MAX as i128);
}

#[test]
fn test_solution_report() {
    let challenge = small_challenge();
    let report = Solution::from_items(&challenge, &[0, 2]).unwrap().report(&challenge);
    assert_eq!(report.optimal_value, 16);
    assert_eq!(report.selected_identifiers, vec!["a".to_string(), "c".to_string()]);
    assert_eq!(report.total_weight, 3.0);
    assert_eq!(report.remaining_capacity, 1.0);
}

#[test]
fn test_generate_instance() {
    let track = Track {
        n_items: 12,
        budget: 50,
    };
    let challenge = Challenge::generate_instance(&[7; 32], &track).unwrap();
    assert_eq!(challenge.num_items(), 12);
    assert_eq!(challenge, Challenge::generate_instance(&[7; 32], &track).unwrap());
    assert_ne!(challenge, Challenge::generate_instance(&[8; 32], &track).unwrap());

    for item in &challenge.items {
        assert!(item.weight >= 0.1 && item.weight <= 8.0);
        assert!((item.weight * 10.0 - (item.weight * 10.0).round()).abs() < 1e-9);
        assert!(item.value >= 1 && item.value <= 1000);
    }
    let total: f64 = challenge.items.iter().map(|item| item.weight).sum();
    assert!(challenge.capacity <= total / 2.0 + 1e-9);

    let track = Track {
        n_items: 3,
        budget: 101,
    };
    assert!(Challenge::generate_instance(&[0; 32], &track).is_err());
}

#[test]
fn test_challenge_json() {
    let challenge = small_challenge();
    let json = serde_json::to_string(&challenge).unwrap();
    assert!(json.contains("\"capacity\":4.0"));
    let parsed: Challenge = serde_json::from_str(
        r#"{"items":[{"name":"x","weight":1.5,"value":3}],"capacity":2}"#,
    )
    .unwrap();
    assert_eq!(parsed.items[0], Item::new("x", 1.5, 3));
    assert_eq!(parsed.capacity, 2.0);
}
