//! Synthetic count generation.

use rand::Rng;
use rand_distr::{Binomial, Distribution};

use crate::constants::{N_INSTRUCTIONS, N_WORD_TYPES};
use crate::counts::{CountMatrix, Trials};
use crate::error::{GqemError, Result};
use crate::model::{Gqem, JudgmentOrder};
use crate::predict::compute_predictions_with_order;

/// Draw one binomial("yes" count) realization per cell, with the compound
/// judgment evaluated in `order`.
pub fn sample_with_order(
    model: &Gqem,
    n: &Trials,
    order: JudgmentOrder,
    rng: &mut impl Rng,
) -> Result<CountMatrix> {
    let trials = n.resolve()?;
    let preds = compute_predictions_with_order(model, order);

    let mut out = [[0i64; N_WORD_TYPES]; N_INSTRUCTIONS];
    for i in 0..N_INSTRUCTIONS {
        for j in 0..N_WORD_TYPES {
            let p = preds.values[i][j].clamp(0.0, 1.0);
            let dist = Binomial::new(trials[i][j] as u64, p)
                .map_err(|e| GqemError::Sampling(format!("cell [{i}, {j}], p = {p}: {e}")))?;
            out[i][j] = dist.sample(rng) as i64;
        }
    }

    let data = CountMatrix::from(out);
    tracing::debug!(total = data.total(), "sampled synthetic counts");
    Ok(data)
}

/// Draw one realization, gist question first. Each call advances `rng`,
/// so repeated calls give independent draws.
pub fn sample(model: &Gqem, n: &Trials, rng: &mut impl Rng) -> Result<CountMatrix> {
    sample_with_order(model, n, JudgmentOrder::GistFirst, rng)
}
