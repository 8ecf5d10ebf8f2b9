//! Generalized quantum episodic memory (GQEM) model of recognition memory.
//!
//! Judgment criteria (gist, verbatim, unrelated) are orthonormal bases in a
//! 2-D real space; each probe type (old, related, unrelated) sets a unit
//! state vector. "Yes" probabilities are Born-rule projections, and the
//! compound gist+verbatim judgment is two sequential projections with a
//! collapse in between. Because the bases are incompatible, the model
//! violates the law of total probability and is subadditive.
//!
//! On top of the 4×3 prediction matrix sit a binomial log-likelihood for
//! observed counts and a sampler for synthetic counts.
//!
//! Pure computation: no I/O, no shared state, no global RNG.

pub mod constants;
pub mod counts;
pub mod error;
pub mod geometry;
pub mod likelihood;
pub mod model;
pub mod predict;
pub mod report;
pub mod sample;

pub use constants::{EPSILON, INSTRUCTION_LABELS, MATRIX_SHAPE, WORD_TYPE_LABELS};
pub use counts::{CountMatrix, Trials, validate_counts};
pub use error::{GqemError, Result};
pub use geometry::{
    Basis, UnitVector, basis, collapsed_state, overlap_probability, projection, unit_vector,
};
pub use likelihood::{binomial_logpmf, ln_choose, log_likelihood, log_likelihood_with_order};
pub use model::{Gqem, GqemParams, Instruction, JudgmentOrder, WordType};
pub use predict::{Predictions, compute_predictions, compute_predictions_with_order, predict};
pub use report::{BasisReport, GeometryReport, LabeledMatrix, ProjectionReport, StateReport};
pub use sample::{sample, sample_with_order};
