//! Integer count matrices for observed or simulated "yes" responses.

use serde::{Deserialize, Serialize};

use crate::constants::{MATRIX_SHAPE, N_INSTRUCTIONS, N_WORD_TYPES};
use crate::error::{GqemError, Result};
use crate::model::{Instruction, WordType};

/// Row-major integer matrix. Shape is not fixed by the type so that
/// mismatched input can be reported rather than made unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct CountMatrix {
    rows: Vec<Vec<i64>>,
}

impl CountMatrix {
    /// Build from rows. Ragged rows are rejected with `ShapeMismatch`
    /// against the width of the first row.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != width) {
            return Err(GqemError::ShapeMismatch {
                expected: (rows.len(), width),
                found: (rows.len(), bad.len()),
            });
        }
        Ok(Self { rows })
    }

    /// A 4×3 matrix with every cell set to `value`.
    pub fn filled(value: i64) -> Self {
        Self {
            rows: vec![vec![value; N_WORD_TYPES]; N_INSTRUCTIONS],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Cell lookup by condition. Panics only if the matrix is not 4×3,
    /// which [`CountMatrix::ensure_model_shape`] rules out.
    pub fn at(&self, instruction: Instruction, word_type: WordType) -> i64 {
        self.rows[instruction.index()][word_type.index()]
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub fn ensure_model_shape(&self) -> Result<()> {
        let found = self.shape();
        if found != MATRIX_SHAPE {
            return Err(GqemError::ShapeMismatch {
                expected: MATRIX_SHAPE,
                found,
            });
        }
        Ok(())
    }

    pub fn total(&self) -> i64 {
        self.rows.iter().flatten().sum()
    }
}

impl TryFrom<Vec<Vec<i64>>> for CountMatrix {
    type Error = GqemError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<CountMatrix> for Vec<Vec<i64>> {
    fn from(m: CountMatrix) -> Self {
        m.rows
    }
}

impl From<[[i64; N_WORD_TYPES]; N_INSTRUCTIONS]> for CountMatrix {
    fn from(values: [[i64; N_WORD_TYPES]; N_INSTRUCTIONS]) -> Self {
        Self {
            rows: values.iter().map(|r| r.to_vec()).collect(),
        }
    }
}

/// Trial counts: one value broadcast to every cell, or a per-cell matrix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Trials {
    Uniform(i64),
    PerCell(CountMatrix),
}

impl Trials {
    /// Resolve to a 4×3 matrix of non-negative trial counts.
    pub fn resolve(&self) -> Result<[[i64; N_WORD_TYPES]; N_INSTRUCTIONS]> {
        let out = match self {
            Trials::Uniform(n) => [[*n; N_WORD_TYPES]; N_INSTRUCTIONS],
            Trials::PerCell(m) => {
                m.ensure_model_shape()?;
                std::array::from_fn(|i| std::array::from_fn(|j| m.rows[i][j]))
            }
        };
        for (i, row) in out.iter().enumerate() {
            for (j, &n) in row.iter().enumerate() {
                if n < 0 {
                    return Err(GqemError::DomainError {
                        row: i,
                        col: j,
                        count: n,
                        trials: n,
                    });
                }
            }
        }
        Ok(out)
    }

    /// Shape as seen by callers; a scalar broadcasts to 4×3.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Trials::Uniform(_) => MATRIX_SHAPE,
            Trials::PerCell(m) => m.shape(),
        }
    }
}

impl From<i64> for Trials {
    fn from(n: i64) -> Self {
        Trials::Uniform(n)
    }
}

impl From<CountMatrix> for Trials {
    fn from(m: CountMatrix) -> Self {
        Trials::PerCell(m)
    }
}

/// Check that `data` and `n` agree in shape, both are 4×3, and every count
/// lies in `[0, n]`. Returns the resolved trial matrix.
pub fn validate_counts(
    n: &Trials,
    data: &CountMatrix,
) -> Result<[[i64; N_WORD_TYPES]; N_INSTRUCTIONS]> {
    if let Trials::PerCell(m) = n
        && m.shape() != data.shape()
    {
        return Err(GqemError::ShapeMismatch {
            expected: m.shape(),
            found: data.shape(),
        });
    }
    data.ensure_model_shape()?;
    let trials = n.resolve()?;
    for (i, row) in data.rows.iter().enumerate() {
        for (j, &k) in row.iter().enumerate() {
            let nij = trials[i][j];
            if k < 0 || k > nij {
                return Err(GqemError::DomainError {
                    row: i,
                    col: j,
                    count: k,
                    trials: nij,
                });
            }
        }
    }
    Ok(trials)
}
