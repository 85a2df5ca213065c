use molprop::models::params::from_pairs;
use molprop::{
    AdapterConfig, AdapterState, BackendKind, Error, Hyperparameters, Model, ModelAdapter,
    Partition, RawTable,
};
use smartcore::linalg::basic::arrays::Array;

const MOLECULES: [(&str, &str); 10] = [
    ("CCO", "-0.31"),
    ("CCCO", "0.25"),
    ("CCCCO", "0.88"),
    ("c1ccccc1", "2.13"),
    ("Cc1ccccc1", "2.73"),
    ("CC(=O)O", "-0.17"),
    ("CC(=O)Oc1ccccc1C(=O)O", "1.19"),
    ("ClC(Cl)Cl", "1.97"),
    ("CCN(CC)CC", "1.45"),
    ("C1CCCCC1", "3.44"),
];

fn table(rows: &[(&str, &str)]) -> RawTable {
    let rows: Vec<Vec<&str>> = rows.iter().map(|(s, y)| vec![*s, *y]).collect();
    RawTable::from_rows(&["smiles", "y"], &rows).unwrap()
}

fn splits() -> (RawTable, RawTable, RawTable) {
    (
        table(&MOLECULES[..6]),
        table(&MOLECULES[6..8]),
        table(&MOLECULES[8..]),
    )
}

fn small_params(kind: BackendKind) -> Hyperparameters {
    match kind {
        BackendKind::RandomForest => from_pairs(&[("n_estimators", "10"), ("n_jobs", "-1")]),
        BackendKind::GradientBoosting => from_pairs(&[("n_estimators", "10"), ("max_depth", "3")]),
        BackendKind::KNearestNeighbors => from_pairs(&[("n_neighbors", "3")]),
    }
}

#[test]
fn test_example_scenario() {
    let train = table(&[("CCO", "1.0"), ("CCO", "1.0"), ("CCO", "1.0")]);
    let valid = table(&[("CCO", "1.0")]);
    let test = table(&[("CCO", "1.0")]);

    let mut model = ModelAdapter::new("random-forest", &from_pairs(&[("n_estimators", "10")])).unwrap();
    let x_test = model.prepare_dataset(&train, &valid, &test).unwrap().test.x().clone();
    model.train().unwrap();

    let predictions = model.predict(&x_test).unwrap();
    assert_eq!(predictions.len(), 1);
    assert!((predictions[0] - 1.0).abs() < 1e-9);
}

#[test]
fn test_full_lifecycle_for_every_backend() {
    let (train, valid, test) = splits();

    for kind in BackendKind::ALL {
        let mut model = ModelAdapter::new(kind.as_str(), &small_params(kind)).unwrap();
        assert_eq!(model.backend_kind(), kind);

        let dataset = model.prepare_dataset(&train, &valid, &test).unwrap();
        for partition in [&dataset.train, &dataset.valid, &dataset.test] {
            assert_eq!(partition.x().shape().0, partition.y().len());
        }
        let x_test = dataset.test.x().clone();

        model.train().unwrap();
        assert_eq!(model.state(), AdapterState::Trained);

        let predictions = model.predict(&x_test).unwrap();
        assert_eq!(predictions.len(), x_test.shape().0, "backend {}", kind);
        assert!(predictions.iter().all(|p| p.is_finite()));

        let report = model.evaluate(Partition::Valid).unwrap();
        assert_eq!(report.num_samples, 2);
        assert!(report.get_metric("rmse").unwrap() >= 0.0);
    }
}

#[test]
fn test_predict_before_train_is_state_error_for_every_backend() {
    let (train, valid, test) = splits();

    for kind in BackendKind::ALL {
        let mut model = ModelAdapter::new(kind.as_str(), &small_params(kind)).unwrap();
        let x = model.prepare_dataset(&train, &valid, &test).unwrap().test.x().clone();
        assert!(matches!(model.predict(&x), Err(Error::State(_))), "backend {}", kind);
        assert!(matches!(model.evaluate(Partition::Test), Err(Error::State(_))));
    }
}

#[test]
fn test_prepare_dataset_is_idempotent() {
    let (train, valid, test) = splits();
    let mut model = ModelAdapter::new("knn", &Hyperparameters::new()).unwrap();

    let first = model.prepare_dataset(&train, &valid, &test).unwrap().clone();
    let second = model.prepare_dataset(&train, &valid, &test).unwrap().clone();
    assert_eq!(first, second);
}

#[test]
fn test_backends_are_substitutable() {
    let (train, valid, test) = splits();
    let mut shapes = Vec::new();

    for kind in BackendKind::ALL {
        let mut model = ModelAdapter::new(kind.as_str(), &small_params(kind)).unwrap();
        model.prepare_dataset(&train, &valid, &test).unwrap();
        model.train().unwrap();
        shapes.push(model.predict_partition(Partition::Train).unwrap().len());
    }

    assert!(shapes.iter().all(|&n| n == 6));
}

#[test]
fn test_configuration_errors() {
    assert!(matches!(
        ModelAdapter::new("support-vector", &Hyperparameters::new()),
        Err(Error::Configuration(_))
    ));
    assert!(matches!(
        ModelAdapter::new("random-forest", &from_pairs(&[("n_estimators", "ten")])),
        Err(Error::Configuration(_))
    ));
    assert!(matches!(
        ModelAdapter::new("knn", &from_pairs(&[("learning_rate", "0.1")])),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn test_featurization_errors_surface() {
    let (train, valid, _) = splits();
    let mut model = ModelAdapter::new("gbm", &Hyperparameters::new()).unwrap();

    let no_label = RawTable::from_rows(&["smiles"], &[vec!["CCO"]]).unwrap();
    assert!(matches!(
        model.prepare_dataset(&train, &valid, &no_label),
        Err(Error::Featurization(_))
    ));
    assert_eq!(model.state(), AdapterState::Configured);
}

#[test]
fn test_knn_with_too_few_training_rows_fails_atomically() {
    let tiny = table(&MOLECULES[..2]);
    let mut model = ModelAdapter::new("knn", &from_pairs(&[("k", "3")])).unwrap();
    model.prepare_dataset(&tiny, &tiny, &tiny).unwrap();

    assert!(matches!(model.train(), Err(Error::Backend(_))));
    assert_eq!(model.state(), AdapterState::Ready);
}

#[test]
fn test_from_config_with_files() {
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("train.csv");
    let mut csv = String::from("molecule,activity\n");
    for (smiles, y) in &MOLECULES {
        csv.push_str(&format!("\"{}\",{}\n", smiles, y));
    }
    std::fs::write(&csv_path, csv).unwrap();

    let json_path = dir.path().join("test.json");
    std::fs::write(&json_path, r#"[{"molecule": "CCCCCO", "activity": 1.51}]"#).unwrap();

    let config_path = dir.path().join("model.json");
    std::fs::write(
        &config_path,
        r#"{
            "backend": "gradient-boosting",
            "hyperparameters": {"n_estimators": 20, "learning_rate": 0.1, "subsample": 0.8},
            "molecule_column": "molecule",
            "label_column": "activity",
            "fingerprint": {"n_bits": 512, "radius": 1}
        }"#,
    )
    .unwrap();

    let config = AdapterConfig::from_path(&config_path).unwrap();
    let mut model = ModelAdapter::from_config(&config).unwrap();

    let train = RawTable::from_path(&csv_path).unwrap();
    let test = RawTable::from_path(&json_path).unwrap();
    let dataset = model.prepare_dataset(&train, &test, &test).unwrap();
    assert_eq!(dataset.train.num_samples(), 10);
    assert_eq!(dataset.test.num_features(), 512);

    model.train().unwrap();
    let report = model.evaluate(Partition::Train).unwrap();
    assert!(report.get_metric("r2_score").unwrap() > 0.0);
}
