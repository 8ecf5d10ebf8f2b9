//! Presentation boundary: labeled matrices for table adapters and the
//! model geometry for plotting adapters. Nothing here renders; it only
//! hands plain data and the fixed labels across in serde form.

use serde::{Deserialize, Serialize};

use crate::constants::{INSTRUCTION_LABELS, WORD_TYPE_LABELS};
use crate::counts::CountMatrix;
use crate::error::Result;
use crate::geometry::{Basis, projection};
use crate::model::{Gqem, Instruction, WordType};
use crate::predict::Predictions;

/// A matrix with its row and column labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledMatrix<T> {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub values: Vec<Vec<T>>,
}

impl<T> LabeledMatrix<T> {
    fn with_model_labels(values: Vec<Vec<T>>) -> Self {
        Self {
            row_labels: INSTRUCTION_LABELS.iter().map(|s| s.to_string()).collect(),
            col_labels: WORD_TYPE_LABELS.iter().map(|s| s.to_string()).collect(),
            values,
        }
    }

    /// Look up a cell by its labels.
    pub fn cell(&self, row: &str, col: &str) -> Option<&T> {
        let i = self.row_labels.iter().position(|l| l == row)?;
        let j = self.col_labels.iter().position(|l| l == col)?;
        self.values.get(i)?.get(j)
    }
}

impl<T: Serialize> LabeledMatrix<T> {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Predictions {
    pub fn to_labeled(&self) -> LabeledMatrix<f64> {
        LabeledMatrix::with_model_labels(self.values.iter().map(|r| r.to_vec()).collect())
    }
}

impl CountMatrix {
    pub fn to_labeled(&self) -> LabeledMatrix<i64> {
        LabeledMatrix::with_model_labels(self.rows().to_vec())
    }
}

/// One named basis, as angle and eigenvectors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BasisReport {
    pub name: String,
    pub theta: f64,
    pub e: [f64; 2],
    pub e_perp: [f64; 2],
}

impl BasisReport {
    fn new(name: &str, basis: &Basis) -> Self {
        Self {
            name: name.to_string(),
            theta: basis.theta,
            e: basis.e.to_array(),
            e_perp: basis.e_perp.to_array(),
        }
    }
}

/// One probe state vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateReport {
    pub word_type: WordType,
    pub theta: f64,
    pub vector: [f64; 2],
}

/// Projection of one state onto the "yes" vector of one basis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub word_type: WordType,
    pub basis: String,
    pub projected: [f64; 2],
    pub probability: f64,
}

/// Everything a plotting adapter needs to draw the 3×3 grid of unit
/// circles: three bases, three states, and every state/basis projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryReport {
    pub bases: Vec<BasisReport>,
    pub states: Vec<StateReport>,
    pub projections: Vec<ProjectionReport>,
}

impl GeometryReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Gqem {
    /// Geometry of the model for plotting.
    pub fn geometry(&self) -> GeometryReport {
        let named = [
            (Instruction::Gist.label(), self.gist()),
            (Instruction::Verbatim.label(), self.verbatim()),
            (Instruction::Unrelated.label(), self.unrelated()),
        ];

        let bases = named
            .iter()
            .map(|(name, b)| BasisReport::new(name, b))
            .collect();

        let states = WordType::ALL
            .iter()
            .map(|&wt| StateReport {
                word_type: wt,
                theta: self.state_angle(wt),
                vector: self.state(wt).to_array(),
            })
            .collect();

        let mut projections = Vec::with_capacity(9);
        for wt in WordType::ALL {
            for (name, b) in &named {
                let (projected, probability) = projection(self.state_angle(wt), b.theta);
                projections.push(ProjectionReport {
                    word_type: wt,
                    basis: name.to_string(),
                    projected,
                    probability,
                });
            }
        }

        GeometryReport {
            bases,
            states,
            projections,
        }
    }
}
