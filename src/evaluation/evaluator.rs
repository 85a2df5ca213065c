use super::metrics::EvaluationReport;
use crate::error::{Error, Result};
use smartcore::metrics::{mean_absolute_error, mean_squared_error, r2};

pub struct ModelEvaluator;

impl ModelEvaluator {
    /// Vypočíta metriky pre regresné modely
    pub fn evaluate_regression(
        y_true: &[f64],
        y_pred: &[f64],
        model_name: &str,
        partition: &str,
    ) -> Result<EvaluationReport> {
        if y_true.len() != y_pred.len() {
            return Err(Error::Shape {
                expected: y_true.len(),
                actual: y_pred.len(),
            });
        }
        if y_true.is_empty() {
            return Err(Error::State("Nie je čo vyhodnotiť, partícia je prázdna".to_string()));
        }

        let mut report = EvaluationReport::new(
            model_name.to_string(),
            partition.to_string(),
            y_true.len(),
        );

        let y_true_vec: Vec<f64> = y_true.to_vec();
        let y_pred_vec: Vec<f64> = y_pred.to_vec();

        let mse = mean_squared_error(&y_true_vec, &y_pred_vec);
        let mae = mean_absolute_error(&y_true_vec, &y_pred_vec);

        report.add_metric("mse".to_string(), mse);
        report.add_metric("mae".to_string(), mae);

        // RMSE - v rovnakých jednotkách ako y
        report.add_metric("rmse".to_string(), mse.sqrt());

        // R² nie je definované pre konštantné y
        if Self::variance(&y_true_vec) > 0.0 {
            report.add_metric("r2_score".to_string(), r2(&y_true_vec, &y_pred_vec));
        }

        let median_ae = Self::calculate_median_absolute_error(&y_true_vec, &y_pred_vec);
        report.add_metric("median_absolute_error".to_string(), median_ae);

        if let Some(corr) = Self::calculate_pearson_correlation(&y_true_vec, &y_pred_vec) {
            report.add_metric("pearson_correlation".to_string(), corr);
        }

        tracing::debug!(
            model = model_name,
            partition,
            samples = y_true.len(),
            rmse = mse.sqrt(),
            "vyhodnotenie hotové"
        );

        Ok(report)
    }

    // ============= Pomocné funkcie =============

    fn variance(values: &[f64]) -> f64 {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
    }

    fn calculate_median_absolute_error(y_true: &[f64], y_pred: &[f64]) -> f64 {
        let mut errors: Vec<f64> = y_true.iter().zip(y_pred.iter())
            .map(|(t, p)| (t - p).abs())
            .collect();

        errors.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = errors.len();
        if n % 2 == 0 {
            (errors[n / 2 - 1] + errors[n / 2]) / 2.0
        } else {
            errors[n / 2]
        }
    }

    /// None, ak má niektorý vektor nulový rozptyl
    fn calculate_pearson_correlation(y_true: &[f64], y_pred: &[f64]) -> Option<f64> {
        let n = y_true.len() as f64;
        let mean_true = y_true.iter().sum::<f64>() / n;
        let mean_pred = y_pred.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut sum_sq_true = 0.0;
        let mut sum_sq_pred = 0.0;

        for (t, p) in y_true.iter().zip(y_pred.iter()) {
            let dt = t - mean_true;
            let dp = p - mean_pred;
            numerator += dt * dp;
            sum_sq_true += dt * dt;
            sum_sq_pred += dp * dp;
        }

        let denom = (sum_sq_true * sum_sq_pred).sqrt();
        if denom == 0.0 {
            return None;
        }
        Some(numerator / denom)
    }
}
