use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::data_loading::RawTable;
use crate::error::FeaturizationError;

pub mod fingerprint;
pub mod smiles;

pub use fingerprint::SmilesFingerprint;

/// Konverzia surovej tabuľky (molekula + label) na numerické polia
///
/// Implementácia musí byť deterministická pre rovnakú tabuľku a názvy stĺpcov.
pub trait Featurizer {
    fn get_name(&self) -> &str;

    fn featurize(
        &self,
        table: &RawTable,
        molecule_column: &str,
        label_column: &str,
    ) -> Result<(DenseMatrix<f64>, Vec<f64>), FeaturizationError>;
}
