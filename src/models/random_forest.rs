use smartcore::ensemble::random_forest_regressor::{RandomForestRegressor, RandomForestRegressorParameters};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::params::{parse_optional, parse_value, require, unknown_param};
use super::Estimator;
use crate::error::{Error, Result};

pub struct RandomForestWrapper
{
    model: Option<RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>>,
    n_estimators: usize,
    max_depth: Option<u16>,
    min_samples_split: usize,
    min_samples_leaf: usize,
    max_features: Option<usize>,
    seed: u64,
}

impl RandomForestWrapper
{
    pub fn new() -> Self
    {
        Self
        {  //Default
            model: None,
            n_estimators: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: None,
            seed: 0,
        }
    }

    pub fn n_estimators(&self) -> usize
    {
        self.n_estimators
    }
}

impl Default for RandomForestWrapper
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl Estimator for RandomForestWrapper
{
    fn get_name(&self) -> &str
    {
        "Random Forest"
    }

    fn get_supported_params(&self) -> Vec<&str>
    {
        vec![
            "n_estimators",
            "max_depth",
            "min_samples_split",
            "min_samples_leaf",
            "max_features",
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
            "max_depth" =>
            {
                let depth: Option<u16> = parse_optional(key, value)?;
                require(key, depth != Some(0), "musí byť aspoň 1")?;
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
            "max_features" =>
            {
                let m: Option<usize> = parse_optional(key, value)?;
                require(key, m != Some(0), "musí byť aspoň 1")?;
                self.max_features = m;
            }
            "random_state" => self.seed = parse_value(key, value)?,
            // Paralelizmus je vnútorná vec backendu
            "n_jobs" =>
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

        let mut params = RandomForestRegressorParameters::default()
            .with_n_trees(self.n_estimators)
            .with_min_samples_split(self.min_samples_split)
            .with_min_samples_leaf(self.min_samples_leaf)
            .with_seed(self.seed);
        if let Some(depth) = self.max_depth
        {
            params = params.with_max_depth(depth);
        }
        if let Some(m) = self.max_features
        {
            // Viac príznakov, ako matica má, backend nezvládne
            params = params.with_m(m.min(x.shape().1));
        }

        let model = RandomForestRegressor::fit(x, &y.to_vec(), params)
            .map_err(|e| Error::Backend(format!("Random Forest fit zlyhal: {}", e)))?;
        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>
    {
        let model = self.model.as_ref()
            .ok_or_else(|| Error::State("Random Forest nie je natrénovaný".to_string()))?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_params() {
        let mut rf = RandomForestWrapper::new();
        rf.set_param("n_estimators", "10").unwrap();
        rf.set_param("max_depth", "none").unwrap();
        rf.set_param("n_jobs", "-1").unwrap();
        assert_eq!(rf.n_estimators(), 10);
        assert!(rf.set_param("n_estimators", "0").is_err());
        assert!(rf.set_param("criterion", "mse").is_err());
    }

    #[test]
    fn test_fit_predict() {
        let x = DenseMatrix::from_2d_vec(&vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![2.0, 1.0],
            vec![2.0, 2.0],
        ])
        .unwrap();
        let y = vec![0.0, 1.0, 1.0, 2.0, 3.0, 4.0];

        let mut rf = RandomForestWrapper::new();
        rf.set_param("n_estimators", "20").unwrap();
        rf.set_param("max_features", "2").unwrap();
        assert!(rf.predict(&x).is_err());

        rf.fit(&x, &y).unwrap();
        assert!(rf.is_fitted());
        let preds = rf.predict(&x).unwrap();
        assert_eq!(preds.len(), 6);
        assert!(preds.iter().all(|p| (0.0..=4.0).contains(p)));

        rf.reset();
        assert!(!rf.is_fitted());
    }
}
