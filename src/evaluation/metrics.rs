use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub metrics: HashMap<String, f64>,
    pub model_name: String,
    pub partition: String,
    pub num_samples: usize,
}

impl EvaluationReport {
    pub fn new(model_name: String, partition: String, num_samples: usize) -> Self {
        Self {
            metrics: HashMap::new(),
            model_name,
            partition,
            num_samples,
        }
    }

    pub fn add_metric(&mut self, name: String, value: f64) {
        self.metrics.insert(name, value);
    }

    pub fn get_metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    pub fn get_all_metrics(&self) -> &HashMap<String, f64> {
        &self.metrics
    }
}
