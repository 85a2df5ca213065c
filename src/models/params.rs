use std::collections::BTreeMap;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{Error, Result};

/// Hyperparametre modelu v tvare názov -> hodnota, backend si ich parsuje sám
pub type Hyperparameters = BTreeMap<String, String>;

/// Pohodlné zostavenie hyperparametrov z dvojíc
pub fn from_pairs(pairs: &[(&str, &str)]) -> Hyperparameters {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Konvertuje JSON objekt (napr. z konfiguračného súboru) na hyperparametre
pub fn from_json_map(map: &serde_json::Map<String, Value>) -> Result<Hyperparameters> {
    map.iter()
        .map(|(key, value)| {
            let value_str = match value {
                Value::Number(n) => n.to_string(),
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Null => "none".to_string(),
                _ => {
                    return Err(Error::Configuration(format!(
                        "Hyperparameter '{}' musí byť skalár",
                        key
                    )))
                }
            };
            Ok((key.clone(), value_str))
        })
        .collect()
}

/// Parsuje hodnotu hyperparametra, chyba je vždy `Error::Configuration`
pub(crate) fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        Error::Configuration(format!("Neplatná hodnota '{}' pre parameter '{}'", value, key))
    })
}

/// Ako `parse_value`, ale "none"/"null" znamená bez obmedzenia
pub(crate) fn parse_optional<T: FromStr>(key: &str, value: &str) -> Result<Option<T>> {
    match value.trim().to_lowercase().as_str() {
        "none" | "null" => Ok(None),
        _ => parse_value(key, value).map(Some),
    }
}

pub(crate) fn require(key: &str, ok: bool, constraint: &str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::Configuration(format!("Parameter '{}' {}", key, constraint)))
    }
}

pub(crate) fn unknown_param(key: &str, model: &str) -> Error {
    Error::Configuration(format!("Neznámy parameter '{}' pre model {}", key, model))
}
