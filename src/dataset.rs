use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{Error, Result};

/// Jedna partícia datasetu - matica príznakov a vektor labelov zarovnané po riadkoch
#[derive(Debug, Clone)]
pub struct Example {
    x: DenseMatrix<f64>,
    y: Vec<f64>,
}

impl Example {
    /// Vytvorí partíciu, počet riadkov `x` musí sedieť s dĺžkou `y`
    pub fn new(x: DenseMatrix<f64>, y: Vec<f64>) -> Result<Self> {
        let rows = x.shape().0;
        if rows != y.len() {
            return Err(Error::Shape {
                expected: rows,
                actual: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &DenseMatrix<f64> {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn num_samples(&self) -> usize {
        self.y.len()
    }

    pub fn num_features(&self) -> usize {
        self.x.shape().1
    }
}

impl PartialEq for Example {
    fn eq(&self, other: &Self) -> bool {
        let (rows, cols) = self.x.shape();
        if (rows, cols) != other.x.shape() || self.y != other.y {
            return false;
        }
        (0..rows).all(|i| (0..cols).all(|j| self.x.get((i, j)) == other.x.get((i, j))))
    }
}

/// Ktorá partícia datasetu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Train,
    Valid,
    Test,
}

impl Partition {
    pub fn name(&self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Valid => "valid",
            Partition::Test => "test",
        }
    }
}

/// Nemenná trojica partícií train/valid/test
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub train: Example,
    pub valid: Example,
    pub test: Example,
}

impl Dataset {
    pub fn new(train: Example, valid: Example, test: Example) -> Self {
        Self { train, valid, test }
    }

    pub fn partition(&self, partition: Partition) -> &Example {
        match partition {
            Partition::Train => &self.train,
            Partition::Valid => &self.valid,
            Partition::Test => &self.test,
        }
    }
}
