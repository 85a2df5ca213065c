use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::Result;

/// Spoločné rozhranie regresných backendov
pub trait Estimator
{
    fn get_name(&self) -> &str;

    fn get_supported_params(&self) -> Vec<&str>;

    fn set_param(&mut self, key: &str, value: &str) -> Result<()>;

    /// Natrénuje model, pri chybe zostane backend nenatrénovaný
    fn fit(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<()>;

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>;

    fn is_fitted(&self) -> bool;

    /// Zahodí natrénovaný stav, hyperparametre zostávajú
    fn reset(&mut self);
}

pub mod backend;
pub mod factory;
pub mod gradient_boosting;
pub mod knn;
pub mod params;
pub mod random_forest;

pub use backend::{Backend, BackendKind};
pub use factory::BackendFactory;
pub use gradient_boosting::GradientBoostingWrapper;
pub use knn::KnnWrapper;
pub use params::Hyperparameters;
pub use random_forest::RandomForestWrapper;
