use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use xxhash_rust::xxh3::xxh3_64;

use super::smiles::{self, MoleculeGraph};
use super::Featurizer;
use crate::data_loading::RawTable;
use crate::error::{Error, FeaturizationError, Result as CrateResult};

/// Kruhový (Morgan) fingerprint z SMILES zápisu
///
/// Každý atóm dostane počiatočný identifikátor zo symbolu a stupňa, ktorý sa
/// potom `radius`-krát rozšíri o identifikátory susedov. Všetky identifikátory
/// zo všetkých iterácií sa zahashujú do bitového vektora dĺžky `n_bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmilesFingerprint {
    pub n_bits: usize,
    pub radius: usize,
}

impl SmilesFingerprint {
    pub fn new(n_bits: usize, radius: usize) -> Self {
        Self { n_bits, radius }
    }

    /// Ako `new`, ale nulová šírka vektora je chyba konfigurácie
    pub fn try_new(n_bits: usize, radius: usize) -> CrateResult<Self> {
        let fingerprint = Self::new(n_bits, radius);
        fingerprint.validate()?;
        Ok(fingerprint)
    }

    pub fn validate(&self) -> CrateResult<()> {
        if self.n_bits == 0 {
            return Err(Error::Configuration("Fingerprint: n_bits musí byť kladné".to_string()));
        }
        Ok(())
    }

    /// Fingerprint jednej molekuly ako vektor 0/1
    pub fn fingerprint(&self, smiles: &str) -> Result<Vec<f64>, String> {
        if self.n_bits == 0 {
            return Err("n_bits musí byť kladné".to_string());
        }
        let graph = smiles::parse(smiles)?;
        let mut bits = vec![0.0; self.n_bits];
        for id in self.environment_ids(&graph) {
            bits[(id % self.n_bits as u64) as usize] = 1.0;
        }
        Ok(bits)
    }

    fn environment_ids(&self, graph: &MoleculeGraph) -> Vec<u64> {
        let mut ids: Vec<u64> = (0..graph.num_atoms())
            .map(|i| {
                let invariant = format!("{}|{}", graph.atom(i), graph.neighbors(i).len());
                xxh3_64(invariant.as_bytes())
            })
            .collect();
        let mut all_ids = ids.clone();

        for _ in 0..self.radius {
            let next: Vec<u64> = (0..graph.num_atoms())
                .map(|i| {
                    let mut neighborhood: Vec<(char, u64)> = graph
                        .neighbors(i)
                        .iter()
                        .map(|&(n, bond)| (bond, ids[n]))
                        .collect();
                    neighborhood.sort_unstable();

                    let mut bytes = ids[i].to_le_bytes().to_vec();
                    for (bond, id) in neighborhood {
                        bytes.push(bond as u8);
                        bytes.extend_from_slice(&id.to_le_bytes());
                    }
                    xxh3_64(&bytes)
                })
                .collect();
            all_ids.extend_from_slice(&next);
            ids = next;
        }

        all_ids
    }
}

impl Default for SmilesFingerprint {
    fn default() -> Self {
        Self {
            n_bits: 2048,
            radius: 2,
        }
    }
}

/// Konvertuje label na f64, desatinná čiarka je povolená
fn parse_label(val: &str, row: usize) -> Result<f64, FeaturizationError> {
    let trimmed = val.trim();
    trimmed
        .parse::<f64>()
        .or_else(|_| trimmed.replace(',', ".").parse::<f64>())
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FeaturizationError::InvalidLabel {
            row,
            value: val.to_string(),
        })
}

impl Featurizer for SmilesFingerprint {
    fn get_name(&self) -> &str {
        "Morgan Fingerprint"
    }

    fn featurize(
        &self,
        table: &RawTable,
        molecule_column: &str,
        label_column: &str,
    ) -> Result<(DenseMatrix<f64>, Vec<f64>), FeaturizationError> {
        for column in [molecule_column, label_column] {
            if !table.has_column(column) {
                return Err(FeaturizationError::MissingColumn {
                    column: column.to_string(),
                    available: table.headers.clone(),
                });
            }
        }
        if table.is_empty() {
            return Err(FeaturizationError::EmptyTable);
        }

        let mut x_rows = Vec::with_capacity(table.num_rows());
        let mut y_data = Vec::with_capacity(table.num_rows());

        for (row, record) in table.records.iter().enumerate() {
            let missing = |column: &str| FeaturizationError::MissingColumn {
                column: column.to_string(),
                available: table.headers.clone(),
            };
            let smiles = record.get(molecule_column).ok_or_else(|| missing(molecule_column))?;
            let label = record.get(label_column).ok_or_else(|| missing(label_column))?;

            let bits = self
                .fingerprint(smiles)
                .map_err(|reason| FeaturizationError::InvalidMolecule {
                    row,
                    value: smiles.clone(),
                    reason,
                })?;
            x_rows.push(bits);
            y_data.push(parse_label(label, row)?);
        }

        let x = DenseMatrix::from_2d_vec(&x_rows).map_err(|_| FeaturizationError::EmptyTable)?;
        Ok((x, y_data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::linalg::basic::arrays::Array;

    fn table(rows: &[Vec<&str>]) -> RawTable {
        RawTable::from_rows(&["smiles", "y"], rows).unwrap()
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let fp = SmilesFingerprint::default();
        let a = fp.fingerprint("CC(=O)Oc1ccccc1C(=O)O").unwrap();
        let b = fp.fingerprint("CC(=O)Oc1ccccc1C(=O)O").unwrap();
        assert_eq!(a.len(), 2048);
        assert_eq!(a, b);
        assert!(a.iter().any(|&v| v == 1.0));
        assert!(a.iter().all(|&v| v == 0.0 || v == 1.0));
    }

    #[test]
    fn test_different_molecules_differ() {
        let fp = SmilesFingerprint::default();
        assert_ne!(fp.fingerprint("CCO").unwrap(), fp.fingerprint("c1ccccc1").unwrap());
    }

    #[test]
    fn test_radius_zero_only_sets_atom_bits() {
        let fp = SmilesFingerprint::new(4096, 0);
        let bits = fp.fingerprint("CCC").unwrap();
        // dva typy atómov: koncový C (stupeň 1) a stredný C (stupeň 2)
        let set = bits.iter().filter(|&&v| v == 1.0).count();
        assert!(set <= 2 && set >= 1);
    }

    #[test]
    fn test_featurize_table() {
        let fp = SmilesFingerprint::new(64, 1);
        let (x, y) = fp
            .featurize(&table(&[vec!["CCO", "1.0"], vec!["CCN", "2,5"]]), "smiles", "y")
            .unwrap();
        assert_eq!(x.shape(), (2, 64));
        assert_eq!(y, vec![1.0, 2.5]);
    }

    #[test]
    fn test_missing_column() {
        let fp = SmilesFingerprint::default();
        let err = fp.featurize(&table(&[vec!["CCO", "1.0"]]), "mol", "y").unwrap_err();
        assert!(matches!(err, FeaturizationError::MissingColumn { ref column, .. } if column == "mol"));
    }

    #[test]
    fn test_invalid_molecule_reports_row() {
        let fp = SmilesFingerprint::default();
        let err = fp
            .featurize(&table(&[vec!["CCO", "1.0"], vec!["C1CC", "2.0"]]), "smiles", "y")
            .unwrap_err();
        assert!(matches!(err, FeaturizationError::InvalidMolecule { row: 1, .. }));
    }

    #[test]
    fn test_invalid_label() {
        let fp = SmilesFingerprint::default();
        let err = fp.featurize(&table(&[vec!["CCO", "abc"]]), "smiles", "y").unwrap_err();
        assert!(matches!(err, FeaturizationError::InvalidLabel { row: 0, .. }));

        let err = fp.featurize(&table(&[vec!["CCO", "NaN"]]), "smiles", "y").unwrap_err();
        assert!(matches!(err, FeaturizationError::InvalidLabel { .. }));
    }

    #[test]
    fn test_zero_bits_is_configuration_error() {
        assert!(matches!(SmilesFingerprint::try_new(0, 2), Err(Error::Configuration(_))));
        assert!(SmilesFingerprint::new(0, 2).validate().is_err());
        assert_eq!(SmilesFingerprint::try_new(16, 0).unwrap().n_bits, 16);
        assert!(SmilesFingerprint::default().validate().is_ok());
    }

    #[test]
    fn test_empty_table() {
        let fp = SmilesFingerprint::default();
        let err = fp.featurize(&table(&[]), "smiles", "y").unwrap_err();
        assert_eq!(err, FeaturizationError::EmptyTable);
    }
}
