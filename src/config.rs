use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::featurization::SmilesFingerprint;
use crate::models::params::{self, Hyperparameters};
use crate::models::BackendKind;

pub const DEFAULT_MOLECULE_COLUMN: &str = "smiles";
pub const DEFAULT_LABEL_COLUMN: &str = "y";

fn default_molecule_column() -> String {
    DEFAULT_MOLECULE_COLUMN.to_string()
}

fn default_label_column() -> String {
    DEFAULT_LABEL_COLUMN.to_string()
}

/// Konfigurácia adaptéra, typicky načítaná z JSON súboru
///
/// ```json
/// {"backend": "random-forest", "hyperparameters": {"n_estimators": 10}}
/// ```
///
/// Názov backendu sa drží ako text a overí sa pri načítaní, aby neznámy
/// backend skončil ako chyba konfigurácie a nie ako chyba JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    pub backend: String,
    #[serde(default)]
    pub hyperparameters: Map<String, Value>,
    #[serde(default = "default_molecule_column")]
    pub molecule_column: String,
    #[serde(default = "default_label_column")]
    pub label_column: String,
    #[serde(default)]
    pub fingerprint: SmilesFingerprint,
}

impl AdapterConfig {
    pub fn new(backend: BackendKind) -> Self {
        Self {
            backend: backend.as_str().to_string(),
            hyperparameters: Map::new(),
            molecule_column: default_molecule_column(),
            label_column: default_label_column(),
            fingerprint: SmilesFingerprint::default(),
        }
    }

    /// Nastaví hyperparameter (builder štýl)
    pub fn hyperparameter(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.hyperparameters.insert(key.to_string(), value.into());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Typ backendu podľa názvu alebo aliasu
    pub fn backend_kind(&self) -> Result<BackendKind> {
        self.backend.parse()
    }

    /// Overí backend a nastavenia fingerprintu
    pub fn validate(&self) -> Result<()> {
        self.backend_kind()?;
        self.fingerprint.validate()
    }

    /// Hyperparametre v tvare, ktorý prijíma backend
    pub fn backend_hyperparameters(&self) -> Result<Hyperparameters> {
        params::from_json_map(&self.hyperparameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_defaults_applied() {
        let config = AdapterConfig::from_json_str(r#"{"backend": "knn"}"#).unwrap();
        assert_eq!(config.backend_kind().unwrap(), BackendKind::KNearestNeighbors);
        assert_eq!(config.molecule_column, "smiles");
        assert_eq!(config.label_column, "y");
        assert_eq!(config.fingerprint, SmilesFingerprint::default());
        assert!(config.backend_hyperparameters().unwrap().is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = AdapterConfig::from_json_str(
            r#"{
                "backend": "xgboost",
                "hyperparameters": {"n_estimators": 25, "learning_rate": 0.1},
                "molecule_column": "SMILES",
                "label_column": "pIC50",
                "fingerprint": {"n_bits": 1024}
            }"#,
        )
        .unwrap();
        assert_eq!(config.backend_kind().unwrap(), BackendKind::GradientBoosting);
        assert_eq!(config.label_column, "pIC50");
        assert_eq!(config.fingerprint.n_bits, 1024);
        assert_eq!(config.fingerprint.radius, 2);

        let params = config.backend_hyperparameters().unwrap();
        assert_eq!(params["n_estimators"], "25");
        assert_eq!(params["learning_rate"], "0.1");
    }

    #[test]
    fn test_unknown_backend_fails() {
        let err = AdapterConfig::from_json_str(r#"{"backend": "svm"}"#).unwrap_err();
        assert!(matches!(err, Error::Configuration(ref msg) if msg.contains("svm")));

        // zlý JSON zostáva chybou JSON
        let err = AdapterConfig::from_json_str(r#"{"backend": 3}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_zero_bits_rejected_on_load() {
        let err = AdapterConfig::from_json_str(r#"{"backend": "rf", "fingerprint": {"n_bits": 0}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_validate_builder_config() {
        let mut config = AdapterConfig::new(BackendKind::KNearestNeighbors);
        assert!(config.validate().is_ok());
        assert_eq!(config.backend, "knn");

        config.backend = "gaussian-process".to_string();
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"backend": "random-forest", "hyperparameters": {{"n_estimators": 10}}}}"#).unwrap();

        let config = AdapterConfig::from_path(file.path()).unwrap();
        assert_eq!(config, AdapterConfig::new(BackendKind::RandomForest).hyperparameter("n_estimators", 10));
    }
}
