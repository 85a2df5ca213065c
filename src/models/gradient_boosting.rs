use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_regressor::{DecisionTreeRegressor, DecisionTreeRegressorParameters};

use super::params::{parse_value, require, unknown_param};
use super::Estimator;
use crate::error::{Error, Result};

type RegressionTree = DecisionTreeRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Natrénovaný boosting ansámbel
struct BoostedTrees
{
    base_score: f64,
    learning_rate: f64,
    trees: Vec<RegressionTree>,
}

impl BoostedTrees
{
    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>
    {
        let mut preds = vec![self.base_score; x.shape().0];
        for tree in &self.trees
        {
            let step = tree.predict(x)?;
            for (p, s) in preds.iter_mut().zip(step)
            {
                *p += self.learning_rate * s;
            }
        }
        Ok(preds)
    }
}

/// Gradient boosting so štvorcovou stratou
///
/// Každý strom sa fituje na reziduá aktuálnej predikcie (prípadne na náhodnej
/// podmnožine riadkov), predikcia je priemer labelov plus vážený súčet stromov.
pub struct GradientBoostingWrapper
{
    model: Option<BoostedTrees>,
    n_estimators: usize,
    learning_rate: f64,
    max_depth: u16,
    min_samples_split: usize,
    min_samples_leaf: usize,
    subsample: f64,
    seed: u64,
}

impl GradientBoostingWrapper
{
    pub fn new() -> Self
    {
        Self
        {  //Default podľa XGBoost
            model: None,
            n_estimators: 100,
            learning_rate: 0.3,
            max_depth: 6,
            min_samples_split: 2,
            min_samples_leaf: 1,
            subsample: 1.0,
            seed: 0,
        }
    }

    pub fn n_estimators(&self) -> usize
    {
        self.n_estimators
    }

    pub fn learning_rate(&self) -> f64
    {
        self.learning_rate
    }

    fn tree_params(&self) -> DecisionTreeRegressorParameters
    {
        DecisionTreeRegressorParameters::default()
            .with_max_depth(self.max_depth)
            .with_min_samples_split(self.min_samples_split)
            .with_min_samples_leaf(self.min_samples_leaf)
    }
}

impl Default for GradientBoostingWrapper
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl Estimator for GradientBoostingWrapper
{
    fn get_name(&self) -> &str
    {
        "Gradient Boosting"
    }

    fn get_supported_params(&self) -> Vec<&str>
    {
        vec![
            "n_estimators",
            "learning_rate",
            "max_depth",
            "min_samples_split",
            "min_samples_leaf",
            "subsample",
            "random_state",
            "n_jobs",
        ]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()>
    {
        match key
        {
            "n_estimators" =>
            {
                let n: usize = parse_value(key, value)?;
                require(key, n >= 1, "musí byť aspoň 1")?;
                self.n_estimators = n;
            }
            "learning_rate" | "eta" =>
            {
                let rate: f64 = parse_value(key, value)?;
                require(key, rate > 0.0 && rate <= 1.0, "musí byť v intervale (0, 1]")?;
                self.learning_rate = rate;
            }
            "max_depth" =>
            {
                let depth: u16 = parse_value(key, value)?;
                require(key, depth >= 1, "musí byť aspoň 1")?;
                self.max_depth = depth;
            }
            "min_samples_split" =>
            {
                let n: usize = parse_value(key, value)?;
                require(key, n >= 2, "musí byť aspoň 2")?;
                self.min_samples_split = n;
            }
            "min_samples_leaf" =>
            {
                let n: usize = parse_value(key, value)?;
                require(key, n >= 1, "musí byť aspoň 1")?;
                self.min_samples_leaf = n;
            }
            "subsample" =>
            {
                let ratio: f64 = parse_value(key, value)?;
                require(key, ratio > 0.0 && ratio <= 1.0, "musí byť v intervale (0, 1]")?;
                self.subsample = ratio;
            }
            "random_state" | "seed" => self.seed = parse_value(key, value)?,
            "n_jobs" | "nthread" =>
            {
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

        let (samples, features) = x.shape();
        if samples == 0 || samples != y.len()
        {
            return Err(Error::Shape { expected: samples, actual: y.len() });
        }

        let sample_size = ((samples as f64 * self.subsample).round() as usize).clamp(1, samples);
        // Riadky sa kopírujú len pre podvzorkovanie
        let rows: Vec<Vec<f64>> = if sample_size < samples
        {
            (0..samples)
                .map(|i| (0..features).map(|j| *x.get((i, j))).collect())
                .collect()
        }
        else
        {
            Vec::new()
        };
        let mut rng = StdRng::seed_from_u64(self.seed);

        let base_score = y.iter().sum::<f64>() / samples as f64;
        let mut preds = vec![base_score; samples];
        let mut trees = Vec::with_capacity(self.n_estimators);

        for round in 0..self.n_estimators
        {
            let residuals: Vec<f64> = y.iter().zip(&preds).map(|(t, p)| t - p).collect();

            let fitted = if sample_size < samples
            {
                let picked = index::sample(&mut rng, samples, sample_size).into_vec();
                let sub_x: Vec<Vec<f64>> = picked.iter().map(|&i| rows[i].clone()).collect();
                let sub_r: Vec<f64> = picked.iter().map(|&i| residuals[i]).collect();
                let sub_x = DenseMatrix::from_2d_vec(&sub_x)?;
                DecisionTreeRegressor::fit(&sub_x, &sub_r, self.tree_params())
            }
            else
            {
                DecisionTreeRegressor::fit(x, &residuals, self.tree_params())
            };
            let tree = fitted
                .map_err(|e| Error::Backend(format!("Strom {} sa nepodarilo natrénovať: {}", round, e)))?;

            for (p, s) in preds.iter_mut().zip(tree.predict(x)?)
            {
                *p += self.learning_rate * s;
            }
            trees.push(tree);
        }

        let train_mse = y.iter().zip(&preds).map(|(t, p)| (t - p).powi(2)).sum::<f64>() / samples as f64;
        tracing::debug!(rounds = trees.len(), train_mse, "gradient boosting natrénovaný");

        self.model = Some(BoostedTrees {
            base_score,
            learning_rate: self.learning_rate,
            trees,
        });
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>
    {
        self.model.as_ref()
            .ok_or_else(|| Error::State("Gradient Boosting nie je natrénovaný".to_string()))?
            .predict(x)
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
