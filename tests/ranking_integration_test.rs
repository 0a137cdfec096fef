use stack_rank::core::catalog::sample_startups;
use stack_rank::core::Metric;
use stack_rank::{
    evaluate, CriteriaConfig, RankError, StartupRegistry, StartupSubmission, TableData,
    WeightConfig,
};

const EPSILON: f64 = 1e-9;

fn byte_bank_submission() -> StartupSubmission {
    StartupSubmission {
        name: Some("ByteBank".to_string()),
        description: Some("Fintech startup focused on payments".to_string()),
        industry: Some("Fintech".to_string()),
        stage: Some("Seed".to_string()),
        arr: Some(1_200_000),
        employees: Some(15),
        location: Some("USA".to_string()),
    }
}

fn ranked_names(registry: &StartupRegistry, criteria: &CriteriaConfig) -> Vec<String> {
    registry
        .rank(criteria, &WeightConfig::default())
        .into_iter()
        .map(|r| r.record.name)
        .collect()
}

#[test]
fn test_samples_rank_under_default_criteria() {
    let registry = StartupRegistry::with_records(sample_startups());
    let ranked = registry.rank(&CriteriaConfig::default(), &WeightConfig::default());

    let expected = [
        ("ByteBank", 4.2),
        ("LumenLoop", 4.2),
        ("GreenSphere", 4.0),
        ("AetherAnalytics", 3.2),
        ("MediMatrix", 3.0),
        ("SynthiLogic", 2.2),
        ("PulsePredict", 0.5),
    ];

    assert_eq!(ranked.len(), expected.len());
    for (evaluated, (name, score)) in ranked.iter().zip(expected) {
        assert_eq!(evaluated.record.name, name);
        assert!(
            (evaluated.criteria_met - score).abs() < EPSILON,
            "{} scored {}",
            name,
            evaluated.criteria_met
        );
    }
}

#[test]
fn test_pulse_predict_fails_arr_under_default_range() {
    let registry = StartupRegistry::with_records(sample_startups());
    let ranked = registry.rank(&CriteriaConfig::default(), &WeightConfig::default());

    let pulse = ranked
        .iter()
        .find(|r| r.record.name == "PulsePredict")
        .unwrap();
    assert_eq!(pulse.record.arr, Metric::Value(9_000));
    assert!(!pulse.matches.arr);
}

#[test]
fn test_byte_bank_scores_with_and_without_location() {
    let mut registry = StartupRegistry::new();
    assert!(registry.add(byte_bank_submission()));
    let record = &registry.records()[0];

    let all = evaluate(record, &CriteriaConfig::default(), &WeightConfig::default());
    assert!((all.criteria_met - 4.2).abs() < EPSILON);

    let without_usa = CriteriaConfig::default().with_locations(["Canada"]);
    let partial = evaluate(record, &without_usa, &WeightConfig::default());
    assert!((partial.criteria_met - 4.0).abs() < EPSILON);
}

#[test]
fn test_score_never_exceeds_weight_total() {
    let registry = StartupRegistry::with_records(sample_startups());
    let weight_sets = [
        WeightConfig::default(),
        WeightConfig {
            industry: 10.0,
            stage: 0.0,
            arr: 3.3,
            employees: 0.1,
            location: 7.0,
        },
    ];
    let criteria_sets = [
        CriteriaConfig::default(),
        CriteriaConfig::default()
            .with_industries(Vec::<String>::new())
            .with_arr(0, 20_000_000),
    ];

    for weights in &weight_sets {
        for criteria in &criteria_sets {
            for evaluated in registry.rank(criteria, weights) {
                let expected: f64 = stack_rank::core::Criterion::ALL
                    .iter()
                    .filter(|c| evaluated.matches.get(**c))
                    .map(|c| weights.get(*c))
                    .sum();

                assert!(evaluated.criteria_met >= 0.0);
                assert!(evaluated.criteria_met <= weights.total() + EPSILON);
                assert!((evaluated.criteria_met - expected).abs() < EPSILON);
            }
        }
    }
}

#[test]
fn test_remove_then_rank_never_returns_name() {
    let mut registry = StartupRegistry::with_records(sample_startups());
    registry.add(byte_bank_submission());

    for name in ["ByteBank", "PulsePredict", "LumenLoop"] {
        registry.remove(name);
        assert!(!ranked_names(&registry, &CriteriaConfig::default()).contains(&name.to_string()));
    }
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_import_missing_location_reports_malformed_import() {
    let mut registry = StartupRegistry::with_records(sample_startups());
    let table = TableData::from_csv_bytes(
        b"Startup Name,Description,Industry,Stage,ARR,Number of Employees\nA,a,AI,Seed,1,1\n",
    )
    .unwrap();

    match registry.bulk_import(&table) {
        Err(RankError::MalformedImport { required, missing }) => {
            assert_eq!(required.len(), 7);
            assert_eq!(missing, vec!["Location".to_string()]);
        }
        other => panic!("expected MalformedImport, got {:?}", other),
    }
    assert_eq!(registry.len(), 7);
}

#[test]
fn test_imported_ties_rank_after_existing_records() {
    let mut registry = StartupRegistry::with_records(sample_startups());
    let table = TableData::new(
        vec![
            "Location".to_string(),
            "Startup Name".to_string(),
            "Description".to_string(),
            "Industry".to_string(),
            "Stage".to_string(),
            "ARR".to_string(),
            "Number of Employees".to_string(),
        ],
        vec![vec![
            "USA".to_string(),
            "Late".to_string(),
            "Arrived last".to_string(),
            "AI".to_string(),
            "Series B".to_string(),
            "500000".to_string(),
            "20".to_string(),
        ]],
    );

    assert_eq!(registry.bulk_import(&table).unwrap(), 1);
    let names = ranked_names(&registry, &CriteriaConfig::default());
    assert_eq!(&names[..3], &["ByteBank", "LumenLoop", "Late"]);
}

#[test]
fn test_rank_twice_is_identical() {
    let registry = StartupRegistry::with_records(sample_startups());
    let criteria = CriteriaConfig::default().with_stages(["Series C"]);
    let weights = WeightConfig::default();

    assert_eq!(registry.rank(&criteria, &weights), registry.rank(&criteria, &weights));
}
