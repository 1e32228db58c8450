use phrs::risk::{
    score_dataset, EnvironmentalRiskCalculator, PhrsScorer, ENV_RISK, ENV_RISK_RAW,
    OVERALL_AVG_RISK, PHRS_FEMALE_NONSMOKER, PHRS_FEMALE_SMOKER, PHRS_MALE_NONSMOKER,
    PHRS_MALE_SMOKER, REG_MOD,
};
use phrs::{Cell, Dataset, Error, ScoringConfig};

const COLUMNS: [&str; 9] = [
    "State",
    "District",
    "AQI",
    "Temperature",
    "Wind_Speed",
    "Rainfall",
    "Male_Smoking_%",
    "Female_Smoking_%",
    "Beds_per_1000",
];

/// Region A: zero stressor, median capacity. Region B: heavy stress,
/// top capacity, smoking population.
fn two_region_dataset() -> Dataset {
    Dataset::from_rows(
        COLUMNS,
        vec![
            vec![
                Cell::from("Alpha"),
                Cell::from("North"),
                Cell::from(50.0),
                Cell::from(20.0),
                Cell::from(5.0),
                Cell::from(5.0),
                Cell::from(0.0),
                Cell::from(0.0),
                Cell::from(10.0),
            ],
            vec![
                Cell::from("Alpha"),
                Cell::from("South"),
                Cell::from(150.0),
                Cell::from(40.0),
                Cell::from(1.0),
                Cell::from(0.0),
                Cell::from(40.0),
                Cell::from(20.0),
                Cell::from(30.0),
            ],
        ],
    )
}

fn column(dataset: &Dataset, name: &str) -> Vec<f64> {
    let index = dataset
        .column_index(name)
        .unwrap_or_else(|| panic!("missing column {name}"));
    dataset.numeric_column(index).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn two_region_scenario_end_to_end() {
    let scored = score_dataset(&two_region_dataset(), &ScoringConfig::default()).unwrap();

    // Region A sits exactly at both stress thresholds, so its raw stress
    // is zero and it anchors the normalized scale.
    let raw = column(&scored, ENV_RISK_RAW);
    assert_eq!(raw[0], 0.0);
    assert!(raw[1] > 0.0);

    let env = column(&scored, ENV_RISK);
    assert_eq!(env[0], 0.0);
    assert_close(env[1], 1.0);

    let reg_mod = column(&scored, REG_MOD);
    assert_eq!(reg_mod, vec![0.5, 1.0]);

    // All of region A's raw scores are zero, so after the pooled rescale
    // its four finals are exactly the scale minimum.
    for name in [
        PHRS_MALE_NONSMOKER,
        PHRS_FEMALE_NONSMOKER,
        PHRS_MALE_SMOKER,
        PHRS_FEMALE_SMOKER,
    ] {
        assert_close(column(&scored, name)[0], 1.0);
    }
    assert_close(column(&scored, OVERALL_AVG_RISK)[0], 1.0);

    // Region B's male-smoker raw score is the pooled maximum; the other
    // group scores scale proportionally against it.
    let config = ScoringConfig::default();
    let male_penalty = (40.0 * config.s_weight / 100.0f64).ln_1p();
    let female_penalty = (20.0 * config.s_weight / 100.0f64).ln_1p();
    let male_smoker_raw = 1.0 + male_penalty - 1.0;
    let female_smoker_raw = (1.0 + female_penalty - 1.0) * config.female_factor;

    assert_close(column(&scored, PHRS_MALE_NONSMOKER)[1], 1.0);
    assert_close(column(&scored, PHRS_FEMALE_NONSMOKER)[1], 1.0);
    assert_close(column(&scored, PHRS_MALE_SMOKER)[1], 100.0);
    let expected_female_smoker = 1.0 + 99.0 * female_smoker_raw / male_smoker_raw;
    assert_close(column(&scored, PHRS_FEMALE_SMOKER)[1], expected_female_smoker);

    let expected_overall = (1.0 + 1.0 + 100.0 + expected_female_smoker) / 4.0;
    assert_close(column(&scored, OVERALL_AVG_RISK)[1], expected_overall);
}

#[test]
fn scorer_without_environmental_stage_fails() {
    let err = PhrsScorer::default()
        .augment(&two_region_dataset())
        .unwrap_err();
    assert!(matches!(err, Error::PrecursorMissing(_)));
}

#[test]
fn rescoring_replaces_computed_columns() {
    let config = ScoringConfig::default();
    let once = score_dataset(&two_region_dataset(), &config).unwrap();
    let twice = score_dataset(&once, &config).unwrap();
    assert_eq!(once.columns(), twice.columns());
    assert_eq!(column(&once, OVERALL_AVG_RISK), column(&twice, OVERALL_AVG_RISK));
}

#[test]
fn environmental_stage_alone_adds_only_env_columns() {
    let with_env = EnvironmentalRiskCalculator::default()
        .augment(&two_region_dataset())
        .unwrap();
    assert!(with_env.column_index(ENV_RISK).is_some());
    assert!(with_env.column_index(ENV_RISK_RAW).is_some());
    assert!(with_env.column_index(OVERALL_AVG_RISK).is_none());
}

#[test]
fn missing_required_column_is_reported_with_aliases() {
    let dataset = Dataset::from_rows(
        ["Temperature", "Wind_Speed", "Rainfall"],
        vec![vec![Cell::from(25.0), Cell::from(2.0), Cell::from(10.0)]],
    );
    let err = score_dataset(&dataset, &ScoringConfig::default()).unwrap_err();
    match err {
        Error::MissingColumn { field, aliases } => {
            assert_eq!(field, "air quality");
            assert_eq!(aliases, vec!["AQI", "PM2.5"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_dataset_is_rejected() {
    let dataset = Dataset::new(COLUMNS);
    let err = score_dataset(&dataset, &ScoringConfig::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyDataset));
}
