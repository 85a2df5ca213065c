use smartcore::algorithm::neighbour::KNNAlgorithmName;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::distance::euclidian::Euclidian;
use smartcore::neighbors::knn_regressor::{KNNRegressor, KNNRegressorParameters};
use smartcore::neighbors::KNNWeightFunction;

use super::params::{parse_value, require, unknown_param};
use super::Estimator;
use crate::error::{Error, Result};

pub struct KnnWrapper
{
    model: Option<KNNRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>, Euclidian<f64>>>,
    k: usize,
    weight: KNNWeightFunction,
    algorithm: KNNAlgorithmName,
}

impl KnnWrapper
{
    pub fn new() -> Self
    {
        Self
        {
            model: None,
            k: 3,
            weight: KNNWeightFunction::Uniform,
            algorithm: KNNAlgorithmName::LinearSearch,
        }
    }

    pub fn k(&self) -> usize
    {
        self.k
    }
}

impl Default for KnnWrapper
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl Estimator for KnnWrapper
{
    fn get_name(&self) -> &str { "K-Nearest Neighbors" }

    fn get_supported_params(&self) -> Vec<&str>
    {
        vec!["n_neighbors", "k", "weights", "algorithm", "n_jobs"]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()>
    {
        match key {
            "n_neighbors" | "k" => {
                let new_k: usize = parse_value(key, value)?;
                // smartcore odmieta k <= 1
                require(key, new_k >= 2, "musí byť aspoň 2")?;
                self.k = new_k;
            }
            "weights" => {
                self.weight = match value.trim().to_lowercase().as_str() {
                    "uniform" => KNNWeightFunction::Uniform,
                    "distance" => KNNWeightFunction::Distance,
                    _ => return Err(Error::Configuration(
                        "Podporované váhy sú: uniform, distance".into(),
                    )),
                };
            }
            "algorithm" => {
                self.algorithm = match value.trim().to_lowercase().as_str() {
                    "linear_search" | "brute" | "auto" => KNNAlgorithmName::LinearSearch,
                    "cover_tree" | "ball_tree" | "kd_tree" => KNNAlgorithmName::CoverTree,
                    _ => return Err(Error::Configuration(
                        "Podporované algoritmy sú: linear_search, cover_tree".into(),
                    )),
                };
            }
            "n_jobs" => {
                let _: i64 = parse_value(key, value)?;
                tracing::debug!(value, "n_jobs sa ignoruje");
            }
            _ => return Err(unknown_param(key, self.get_name())),
        }
        Ok(())
    }

    fn fit(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<()>
    {
        self.model = None;

        let samples = x.shape().0;
        if self.k > samples {
            return Err(Error::Backend(format!(
                "KNN potrebuje aspoň k={} vzoriek, dostal {}",
                self.k, samples
            )));
        }

        let params = KNNRegressorParameters::default()
            .with_k(self.k)
            .with_weight(self.weight.clone())
            .with_algorithm(self.algorithm.clone());

        let model = KNNRegressor::fit(x, &y.to_vec(), params)
            .map_err(|e| Error::Backend(format!("KNN fit zlyhal: {}", e)))?;
        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>
    {
        let model = self.model.as_ref()
            .ok_or_else(|| Error::State("KNN nie je natrénovaný".to_string()))?;
        Ok(model.predict(x)?)
    }

    fn is_fitted(&self) -> bool
    {
        self.model.is_some()
    }

    fn reset(&mut self)
    {
        self.model = None;
    }
}
