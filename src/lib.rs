//! Tenká vrstva nad regresnými modelmi pre predikciu vlastností molekúl.
//!
//! ```no_run
//! use molprop::{Model, ModelAdapter, RawTable};
//! use molprop::models::params::from_pairs;
//!
//! # fn main() -> molprop::Result<()> {
//! let train = RawTable::from_path("train.csv")?;
//! let valid = RawTable::from_path("valid.csv")?;
//! let test = RawTable::from_path("test.csv")?;
//!
//! let mut model = ModelAdapter::new("random-forest", &from_pairs(&[("n_estimators", "10")]))?;
//! let x_test = model.prepare_dataset(&train, &valid, &test)?.test.x().clone();
//! model.train()?;
//! let predictions = model.predict(&x_test)?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod data_loading;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod featurization;
pub mod models;

pub use adapter::{AdapterState, Model, ModelAdapter};
pub use config::AdapterConfig;
pub use data_loading::{RawTable, TableLoader, TableLoaderFactory};
pub use dataset::{Dataset, Example, Partition};
pub use error::{Error, FeaturizationError, Result};
pub use evaluation::EvaluationReport;
pub use featurization::{Featurizer, SmilesFingerprint};
pub use models::{Backend, BackendFactory, BackendKind, Estimator, Hyperparameters};
