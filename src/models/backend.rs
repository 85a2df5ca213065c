use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::{Estimator, GradientBoostingWrapper, KnnWrapper, RandomForestWrapper};
use crate::error::{Error, Result};

/// Druh regresného backendu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BackendKind {
    RandomForest,
    GradientBoosting,
    KNearestNeighbors,
}

impl BackendKind {
    pub const ALL: [BackendKind; 3] = [
        BackendKind::RandomForest,
        BackendKind::GradientBoosting,
        BackendKind::KNearestNeighbors,
    ];

    /// Kanonický názov
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::RandomForest => "random-forest",
            BackendKind::GradientBoosting => "gradient-boosting",
            BackendKind::KNearestNeighbors => "k-nearest-neighbors",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        super::factory::lookup_kind(s)
            .ok_or_else(|| Error::Configuration(format!("Neznámy backend: {}", s)))
    }
}

impl TryFrom<String> for BackendKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<BackendKind> for String {
    fn from(kind: BackendKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Backend ako tagovaný variant, adaptér drží presne jeden
pub enum Backend {
    RandomForest(RandomForestWrapper),
    GradientBoosting(GradientBoostingWrapper),
    KNearestNeighbors(KnnWrapper),
}

impl Backend {
    /// Nový backend s predvolenými hyperparametrami
    pub fn new(kind: BackendKind) -> Self {
        match kind {
            BackendKind::RandomForest => Backend::RandomForest(RandomForestWrapper::new()),
            BackendKind::GradientBoosting => Backend::GradientBoosting(GradientBoostingWrapper::new()),
            BackendKind::KNearestNeighbors => Backend::KNearestNeighbors(KnnWrapper::new()),
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::RandomForest(_) => BackendKind::RandomForest,
            Backend::GradientBoosting(_) => BackendKind::GradientBoosting,
            Backend::KNearestNeighbors(_) => BackendKind::KNearestNeighbors,
        }
    }

    fn inner(&self) -> &dyn Estimator {
        match self {
            Backend::RandomForest(m) => m,
            Backend::GradientBoosting(m) => m,
            Backend::KNearestNeighbors(m) => m,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Estimator {
        match self {
            Backend::RandomForest(m) => m,
            Backend::GradientBoosting(m) => m,
            Backend::KNearestNeighbors(m) => m,
        }
    }
}

impl Estimator for Backend {
    fn get_name(&self) -> &str {
        self.inner().get_name()
    }

    fn get_supported_params(&self) -> Vec<&str> {
        self.inner().get_supported_params()
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner_mut().set_param(key, value)
    }

    fn fit(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<()> {
        self.inner_mut().fit(x, y)
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        self.inner().predict(x)
    }

    fn is_fitted(&self) -> bool {
        self.inner().is_fitted()
    }

    fn reset(&mut self) {
        self.inner_mut().reset()
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backend")
            .field("kind", &self.kind())
            .field("fitted", &self.is_fitted())
            .finish()
    }
}
