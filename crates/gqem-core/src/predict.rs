//! Sequential-projection prediction engine.
//!
//! Each cell of the 4×3 matrix is the probability of a "yes" response for
//! one (instruction, word type) pair. Single-question instructions are a
//! single Born-rule projection. The compound gist+verbatim instruction asks
//! two incompatible questions in sequence:
//!
//! ```text
//! P(G ∪ V) = p₁ + (1 − p₁) · |⟨second | collapse_no(ψ, first)⟩|²
//! ```
//!
//! Because the gist and verbatim bases neither coincide nor are orthogonal,
//! the result depends on which question comes first, and P(G) + P(V) need
//! not equal P(G ∪ V).

use serde::{Deserialize, Serialize};

use crate::constants::{N_INSTRUCTIONS, N_WORD_TYPES};
use crate::geometry::{Basis, UnitVector, collapsed_state, overlap_probability};
use crate::model::{Gqem, Instruction, JudgmentOrder, WordType};

/// 4×3 matrix of "yes" probabilities.
/// Rows follow [`Instruction::ALL`], columns follow [`WordType::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    pub values: [[f64; N_WORD_TYPES]; N_INSTRUCTIONS],
}

impl Predictions {
    pub fn get(&self, instruction: Instruction, word_type: WordType) -> f64 {
        self.values[instruction.index()][word_type.index()]
    }

    pub fn row(&self, instruction: Instruction) -> [f64; N_WORD_TYPES] {
        self.values[instruction.index()]
    }

    pub fn column(&self, word_type: WordType) -> [f64; N_INSTRUCTIONS] {
        let j = word_type.index();
        std::array::from_fn(|i| self.values[i][j])
    }

    /// P(G) + P(V) − P(G ∪ V) per word type. Zero under classical
    /// probability with disjoint events; positive values are the
    /// law-of-total-probability violation the model produces.
    pub fn lotp_violation(&self) -> [f64; N_WORD_TYPES] {
        std::array::from_fn(|j| self.values[0][j] + self.values[1][j] - self.values[2][j])
    }

    /// P(G) + P(V) + P(U) per word type. Values above 1 are subadditive.
    pub fn additivity_sum(&self) -> [f64; N_WORD_TYPES] {
        std::array::from_fn(|j| self.values[0][j] + self.values[1][j] + self.values[3][j])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Instruction, WordType, f64)> + '_ {
        Instruction::ALL.into_iter().flat_map(move |ins| {
            WordType::ALL
                .into_iter()
                .map(move |wt| (ins, wt, self.get(ins, wt)))
        })
    }
}

/// Probability of "yes" when `first` is asked, and on its "no" branch the
/// collapsed state is asked `second`.
fn sequential_yes(psi: UnitVector, first: &Basis, second: &Basis) -> f64 {
    let p_first = overlap_probability(psi, first.e);
    let collapsed = collapsed_state(psi, first);
    (p_first + (1.0 - p_first) * overlap_probability(collapsed, second.e)).min(1.0)
}

/// Single-cell prediction.
pub fn predict(
    model: &Gqem,
    instruction: Instruction,
    word_type: WordType,
    order: JudgmentOrder,
) -> f64 {
    let psi = model.state(word_type);
    match instruction {
        Instruction::Gist => overlap_probability(psi, model.gist().e),
        Instruction::Verbatim => overlap_probability(psi, model.verbatim().e),
        Instruction::Unrelated => overlap_probability(psi, model.unrelated().e),
        Instruction::GistVerbatim => match order {
            JudgmentOrder::GistFirst => sequential_yes(psi, model.gist(), model.verbatim()),
            JudgmentOrder::VerbatimFirst => sequential_yes(psi, model.verbatim(), model.gist()),
        },
    }
}

/// Full prediction matrix with the compound judgment evaluated in `order`.
pub fn compute_predictions_with_order(model: &Gqem, order: JudgmentOrder) -> Predictions {
    let mut values = [[0.0; N_WORD_TYPES]; N_INSTRUCTIONS];
    for ins in Instruction::ALL {
        for wt in WordType::ALL {
            values[ins.index()][wt.index()] = predict(model, ins, wt, order);
        }
    }
    Predictions { values }
}

/// Full prediction matrix, gist question first.
pub fn compute_predictions(model: &Gqem) -> Predictions {
    compute_predictions_with_order(model, JudgmentOrder::GistFirst)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn reference_model() -> Gqem {
        Gqem::from_angles(-0.12, -1.54, -0.71, -0.86, 1.26).unwrap()
    }

    #[test]
    fn test_reference_matrix() {
        let preds = compute_predictions(&reference_model());
        let expected = [
            [0.690462, 0.545336, 0.0359636],
            [0.575113, 0.425675, 0.093524],
            [0.694898, 0.551852, 0.0497793],
            [0.455457, 0.604619, 0.887783],
        ];
        for (i, row) in expected.iter().enumerate() {
            for (j, &p) in row.iter().enumerate() {
                assert_abs_diff_eq!(preds.values[i][j], p, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_verbatim_is_cos_squared_of_state_angle() {
        let m = reference_model();
        let p = predict(&m, Instruction::Verbatim, WordType::Old, JudgmentOrder::GistFirst);
        assert_abs_diff_eq!(p, (-0.71f64).cos().powi(2), epsilon = 1e-12);
    }

    #[test]
    fn test_compound_at_least_first_question() {
        let m = reference_model();
        let preds = compute_predictions(&m);
        for j in 0..N_WORD_TYPES {
            assert!(preds.values[2][j] >= preds.values[0][j]);
        }
    }

    #[test]
    fn test_gist_equals_verbatim_collapses_compound() {
        let m = Gqem::from_angles(0.0, 0.4, 0.3, -1.2, 2.9).unwrap();
        let preds = compute_predictions(&m);
        for wt in WordType::ALL {
            let g = preds.get(Instruction::Gist, wt);
            assert_eq!(preds.get(Instruction::GistVerbatim, wt), g);
            assert_eq!(preds.get(Instruction::Verbatim, wt), g);
        }
    }

    #[test]
    fn test_order_matters_for_incompatible_bases() {
        let m = reference_model();
        let gf = compute_predictions_with_order(&m, JudgmentOrder::GistFirst);
        let vf = compute_predictions_with_order(&m, JudgmentOrder::VerbatimFirst);
        let diff = (gf.get(Instruction::GistVerbatim, WordType::Old)
            - vf.get(Instruction::GistVerbatim, WordType::Old))
        .abs();
        assert!(diff > 1e-3, "orders should disagree, diff = {diff}");
        // single-question rows are order independent
        assert_eq!(gf.row(Instruction::Gist), vf.row(Instruction::Gist));
        assert_eq!(gf.row(Instruction::Unrelated), vf.row(Instruction::Unrelated));
    }

    #[test]
    fn test_orthogonal_bases_are_order_independent() {
        let m = Gqem::from_angles(std::f64::consts::FRAC_PI_2, 0.0, 0.5, 1.0, -1.0).unwrap();
        let gf = compute_predictions_with_order(&m, JudgmentOrder::GistFirst);
        let vf = compute_predictions_with_order(&m, JudgmentOrder::VerbatimFirst);
        for wt in WordType::ALL {
            assert_abs_diff_eq!(
                gf.get(Instruction::GistVerbatim, wt),
                vf.get(Instruction::GistVerbatim, wt),
                epsilon = 1e-12
            );
            // with orthogonal bases one question always says yes
            assert_abs_diff_eq!(gf.get(Instruction::GistVerbatim, wt), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_lotp_violation_and_subadditivity() {
        let preds = compute_predictions(&reference_model());
        assert!(preds.lotp_violation()[WordType::Old.index()] > 0.0);
        assert!(preds.additivity_sum()[WordType::Old.index()] > 1.0);
    }

    #[test]
    fn test_iter_visits_every_cell_in_order() {
        let preds = compute_predictions(&reference_model());
        let cells: Vec<_> = preds.iter().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0].0, Instruction::Gist);
        assert_eq!(cells[0].1, WordType::Old);
        assert_eq!(cells[11].0, Instruction::Unrelated);
        assert_eq!(cells[11].1, WordType::Unrelated);
        assert_eq!(cells[5].2, preds.values[1][2]);
    }

    #[test]
    fn test_column_matches_values() {
        let preds = compute_predictions(&reference_model());
        let col = preds.column(WordType::Related);
        for i in 0..N_INSTRUCTIONS {
            assert_eq!(col[i], preds.values[i][1]);
        }
    }
}
