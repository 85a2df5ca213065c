//! Chybové typy knižnice.

use thiserror::Error;

/// Chyby, ktoré vracia featurizácia surovej tabuľky.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeaturizationError {
    #[error("Stĺpec '{column}' sa nenachádza v tabuľke. Dostupné stĺpce: {available:?}")]
    MissingColumn { column: String, available: Vec<String> },

    #[error("Tabuľka neobsahuje žiadne riadky")]
    EmptyTable,

    #[error("Neplatná molekula '{value}' v riadku {row}: {reason}")]
    InvalidMolecule { row: usize, value: String, reason: String },

    #[error("Hodnota '{value}' v riadku {row} nie je číslo")]
    InvalidLabel { row: usize, value: String },
}

/// Hlavný chybový typ knižnice.
#[derive(Error, Debug)]
pub enum Error {
    /// Neznámy backend alebo odmietnutý hyperparameter.
    #[error("Chyba konfigurácie: {0}")]
    Configuration(String),

    /// Operácia zavolaná v nesprávnom stave (napr. predict pred train).
    #[error("Nesprávny stav: {0}")]
    State(String),

    #[error("Chyba featurizácie: {0}")]
    Featurization(#[from] FeaturizationError),

    /// Nesúlad rozmerov matice a očakávaného tvaru.
    #[error("Nesúlad rozmerov: očakávaných {expected}, dostali sme {actual}")]
    Shape { expected: usize, actual: usize },

    /// Zlyhanie podkladovej knižnice pri fit/predict.
    #[error("Chyba backendu: {0}")]
    Backend(String),

    #[error("Chyba pri načítaní tabuľky: {0}")]
    Table(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<smartcore::error::Failed> for Error {
    fn from(failed: smartcore::error::Failed) -> Self {
        Error::Backend(failed.to_string())
    }
}
