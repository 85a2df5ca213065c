use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Backend, BackendKind, Estimator, Hyperparameters};
use crate::error::Result;

// Všetky akceptované názvy backendov, porovnáva sa bez ohľadu na veľkosť písmen
static KIND_ALIASES: Lazy<HashMap<&'static str, BackendKind>> = Lazy::new(|| {
    let mut aliases = HashMap::new();
    for name in ["random-forest", "random_forest", "randomforest", "rf"] {
        aliases.insert(name, BackendKind::RandomForest);
    }
    for name in ["gradient-boosting", "gradient_boosting", "xgboost", "xgb", "gbm"] {
        aliases.insert(name, BackendKind::GradientBoosting);
    }
    for name in ["k-nearest-neighbors", "k_nearest_neighbors", "knn", "kneighbors"] {
        aliases.insert(name, BackendKind::KNearestNeighbors);
    }
    aliases
});

pub(crate) fn lookup_kind(name: &str) -> Option<BackendKind> {
    KIND_ALIASES.get(name.trim().to_lowercase().as_str()).copied()
}

/// Factory pre vytváranie backendov podľa názvu
pub struct BackendFactory;

impl BackendFactory {
    /// Vytvorí backend a nastaví mu hyperparametre tak, ako prišli
    pub fn create(kind: &str, hyperparameters: &Hyperparameters) -> Result<Backend> {
        Self::create_kind(kind.parse()?, hyperparameters)
    }

    pub fn create_kind(kind: BackendKind, hyperparameters: &Hyperparameters) -> Result<Backend> {
        let mut backend = Backend::new(kind);
        for (key, value) in hyperparameters {
            backend.set_param(key, value)?;
        }
        tracing::debug!(backend = %kind, params = hyperparameters.len(), "backend vytvorený");
        Ok(backend)
    }

    /// Vráti zoznam všetkých dostupných backendov
    pub fn available_backends() -> Vec<&'static str> {
        BackendKind::ALL.iter().map(|k| k.as_str()).collect()
    }

    /// Vráti popis backendu
    pub fn get_backend_description(kind: &str) -> Option<&'static str> {
        match lookup_kind(kind)? {
            BackendKind::RandomForest => Some("Random Forest - priemer bootstrapovaných regresných stromov"),
            BackendKind::GradientBoosting => Some("Gradient Boosting - postupne fitované stromy na reziduá"),
            BackendKind::KNearestNeighbors => Some("K-Nearest Neighbors - priemer labelov najbližších susedov"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::params::from_pairs;

    #[test]
    fn test_create_with_params() {
        let backend = BackendFactory::create("random-forest", &from_pairs(&[("n_estimators", "10")])).unwrap();
        match backend {
            Backend::RandomForest(rf) => assert_eq!(rf.n_estimators(), 10),
            other => panic!("unexpected backend {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_is_configuration_error() {
        let err = BackendFactory::create("svr", &Hyperparameters::new()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_rejected_param_is_configuration_error() {
        let err = BackendFactory::create("knn", &from_pairs(&[("n_neighbors", "many")])).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = BackendFactory::create("xgboost", &from_pairs(&[("n_neighbors", "5")])).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_catalog() {
        assert_eq!(
            BackendFactory::available_backends(),
            vec!["random-forest", "gradient-boosting", "k-nearest-neighbors"]
        );
        assert!(BackendFactory::get_backend_description("KNN").is_some());
        assert!(BackendFactory::get_backend_description("svm").is_none());
    }
}
