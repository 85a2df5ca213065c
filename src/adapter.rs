//! Jednotné rozhranie featurize → prepare_dataset → train → predict.

use std::time::Instant;

use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use tracing::{debug, info};

use crate::config::{AdapterConfig, DEFAULT_LABEL_COLUMN, DEFAULT_MOLECULE_COLUMN};
use crate::data_loading::RawTable;
use crate::dataset::{Dataset, Example, Partition};
use crate::error::{Error, Result};
use crate::evaluation::{EvaluationReport, ModelEvaluator};
use crate::featurization::{Featurizer, SmilesFingerprint};
use crate::models::{Backend, BackendFactory, BackendKind, Estimator, Hyperparameters};

/// Kontrakt, ktorý spĺňa každý model
pub trait Model {
    /// Featurizuje tri surové tabuľky a uloží ich ako nový dataset
    fn prepare_dataset(
        &mut self,
        raw_train: &RawTable,
        raw_valid: &RawTable,
        raw_test: &RawTable,
    ) -> Result<&Dataset>;

    /// Natrénuje model na train partícii
    fn train(&mut self) -> Result<()>;

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>;

    fn featurize(&self, table: &RawTable) -> Result<(DenseMatrix<f64>, Vec<f64>)>;
}

/// Stav životného cyklu adaptéra
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    /// Backend je vytvorený, dataset chýba
    Configured,
    /// Dataset je pripravený, model nie je natrénovaný
    Ready,
    Trained,
}

/// Adaptér nad jedným regresným backendom
pub struct ModelAdapter {
    backend: Backend,
    featurizer: Box<dyn Featurizer>,
    molecule_column: String,
    label_column: String,
    dataset: Option<Dataset>,
    trained_features: Option<usize>,
}

impl ModelAdapter {
    /// Vytvorí adaptér s backendom podľa názvu a predvoleným fingerprintom
    pub fn new(backend_kind: &str, hyperparameters: &Hyperparameters) -> Result<Self> {
        let backend = BackendFactory::create(backend_kind, hyperparameters)?;
        Ok(Self::with_backend(backend, Box::new(SmilesFingerprint::default())))
    }

    pub fn with_backend(backend: Backend, featurizer: Box<dyn Featurizer>) -> Self {
        info!(
            backend = %backend.kind(),
            featurizer = featurizer.get_name(),
            "adaptér vytvorený"
        );
        Self {
            backend,
            featurizer,
            molecule_column: DEFAULT_MOLECULE_COLUMN.to_string(),
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
            dataset: None,
            trained_features: None,
        }
    }

    pub fn from_config(config: &AdapterConfig) -> Result<Self> {
        config.validate()?;
        let backend = BackendFactory::create_kind(config.backend_kind()?, &config.backend_hyperparameters()?)?;
        Ok(Self::with_backend(backend, Box::new(config.fingerprint))
            .with_columns(&config.molecule_column, &config.label_column))
    }

    /// Nastaví názvy stĺpcov s molekulou a labelom
    pub fn with_columns(mut self, molecule_column: &str, label_column: &str) -> Self {
        self.molecule_column = molecule_column.to_string();
        self.label_column = label_column.to_string();
        self.clear();
        self
    }

    /// Vymení featurizer, pripravený dataset sa zahodí
    pub fn with_featurizer(mut self, featurizer: Box<dyn Featurizer>) -> Self {
        self.featurizer = featurizer;
        self.clear();
        self
    }

    fn clear(&mut self) {
        self.dataset = None;
        self.trained_features = None;
        self.backend.reset();
    }

    pub fn state(&self) -> AdapterState {
        if self.backend.is_fitted() {
            AdapterState::Trained
        } else if self.dataset.is_some() {
            AdapterState::Ready
        } else {
            AdapterState::Configured
        }
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    fn featurize_partition(&self, table: &RawTable, partition: Partition) -> Result<Example> {
        let (x, y) = self.featurize(table)?;
        debug!(
            partition = partition.name(),
            rows = y.len(),
            features = x.shape().1,
            "partícia featurizovaná"
        );
        Example::new(x, y)
    }

    /// Predikcia pre uloženú partíciu
    pub fn predict_partition(&self, partition: Partition) -> Result<Vec<f64>> {
        let dataset = self
            .dataset
            .as_ref()
            .ok_or_else(|| Error::State("Dataset nie je pripravený".to_string()))?;
        self.predict(dataset.partition(partition).x())
    }

    /// Vyhodnotí model na uloženej partícii
    pub fn evaluate(&self, partition: Partition) -> Result<EvaluationReport> {
        let predictions = self.predict_partition(partition)?;
        let dataset = self
            .dataset
            .as_ref()
            .ok_or_else(|| Error::State("Dataset nie je pripravený".to_string()))?;
        ModelEvaluator::evaluate_regression(
            dataset.partition(partition).y(),
            &predictions,
            self.backend.get_name(),
            partition.name(),
        )
    }
}

impl Model for ModelAdapter {
    fn prepare_dataset(
        &mut self,
        raw_train: &RawTable,
        raw_valid: &RawTable,
        raw_test: &RawTable,
    ) -> Result<&Dataset> {
        // Najprv všetko featurizovať, až potom prepísať starý stav
        let train = self.featurize_partition(raw_train, Partition::Train)?;
        let valid = self.featurize_partition(raw_valid, Partition::Valid)?;
        let test = self.featurize_partition(raw_test, Partition::Test)?;

        info!(
            train = train.num_samples(),
            valid = valid.num_samples(),
            test = test.num_samples(),
            replaced = self.dataset.is_some(),
            "dataset pripravený"
        );

        self.backend.reset();
        self.trained_features = None;
        Ok(self.dataset.insert(Dataset::new(train, valid, test)))
    }

    fn train(&mut self) -> Result<()> {
        let dataset = self.dataset.as_ref().ok_or_else(|| {
            Error::State("Pred trénovaním treba zavolať prepare_dataset".to_string())
        })?;
        let train = &dataset.train;

        let started = Instant::now();
        self.trained_features = None;
        self.backend.fit(train.x(), train.y())?;
        self.trained_features = Some(train.num_features());

        info!(
            backend = %self.backend.kind(),
            samples = train.num_samples(),
            features = train.num_features(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "model natrénovaný"
        );
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let expected = match self.trained_features {
            Some(n) if self.backend.is_fitted() => n,
            _ => {
                return Err(Error::State(
                    "Model nie je natrénovaný, najprv zavolajte train".to_string(),
                ))
            }
        };

        let (rows, cols) = x.shape();
        if cols != expected {
            return Err(Error::Shape {
                expected,
                actual: cols,
            });
        }

        let predictions = self.backend.predict(x)?;
        if predictions.len() != rows {
            return Err(Error::Backend(format!(
                "Backend vrátil {} predikcií pre {} riadkov",
                predictions.len(),
                rows
            )));
        }
        debug!(rows, "predikcia hotová");
        Ok(predictions)
    }

    fn featurize(&self, table: &RawTable) -> Result<(DenseMatrix<f64>, Vec<f64>)> {
        Ok(self
            .featurizer
            .featurize(table, &self.molecule_column, &self.label_column)?)
    }
}

impl std::fmt::Debug for ModelAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("backend", &self.backend)
            .field("featurizer", &self.featurizer.get_name())
            .field("molecule_column", &self.molecule_column)
            .field("label_column", &self.label_column)
            .field("state", &self.state())
            .finish()
    }
}
