//! Binomial log-likelihood of count data under the model.
//!
//! Each of the 12 cells is an independent binomial observation with
//! success probability taken from the prediction matrix.

use crate::constants::STIRLING_CUTOFF;
use crate::counts::{CountMatrix, Trials, validate_counts};
use crate::error::Result;
use crate::model::{Gqem, JudgmentOrder};
use crate::predict::compute_predictions_with_order;

/// ln(n!). Exact summation below the cutoff, Stirling series above it
/// (absolute error under 1e-14 there).
pub fn ln_factorial(n: u64) -> f64 {
    if n < STIRLING_CUTOFF {
        return (2..=n).map(|i| (i as f64).ln()).sum();
    }
    let x = n as f64;
    let inv = 1.0 / x;
    let inv2 = inv * inv;
    let series = inv * (1.0 / 12.0 - inv2 * (1.0 / 360.0 - inv2 * (1.0 / 1260.0 - inv2 / 1680.0)));
    x * x.ln() - x + 0.5 * (std::f64::consts::TAU * x).ln() + series
}

/// ln C(n, k). `-∞` when k > n.
pub fn ln_choose(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    if k == 0 {
        return 0.0;
    }
    if k == 1 {
        return (n as f64).ln();
    }
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

/// k · ln(p), with 0 · ln(0) taken as 0.
fn xlogy(k: u64, p: f64) -> f64 {
    if k == 0 { 0.0 } else { k as f64 * p.ln() }
}

/// Binomial log probability mass: ln C(n,k) + k ln p + (n−k) ln(1−p).
///
/// Probabilities of exactly 0 or 1 give `-∞` when the observed count is on
/// the impossible side, and 0 otherwise.
pub fn binomial_logpmf(k: u64, n: u64, p: f64) -> f64 {
    debug_assert!(k <= n);
    ln_choose(n, k) + xlogy(k, p) + xlogy(n - k, 1.0 - p)
}

/// Log-likelihood of `data` given trial counts `n`, with the compound
/// judgment evaluated in `order`.
pub fn log_likelihood_with_order(
    model: &Gqem,
    n: &Trials,
    data: &CountMatrix,
    order: JudgmentOrder,
) -> Result<f64> {
    let trials = validate_counts(n, data)?;
    let preds = compute_predictions_with_order(model, order);

    let mut ll = 0.0;
    for (i, row) in data.rows().iter().enumerate() {
        for (j, &k) in row.iter().enumerate() {
            // validate_counts guarantees 0 ≤ k ≤ n
            ll += binomial_logpmf(k as u64, trials[i][j] as u64, preds.values[i][j]);
        }
    }

    tracing::debug!(log_likelihood = ll, total = data.total(), "computed log-likelihood");
    Ok(ll)
}

/// Log-likelihood of `data` given trial counts `n`, gist question first.
pub fn log_likelihood(model: &Gqem, n: &Trials, data: &CountMatrix) -> Result<f64> {
    log_likelihood_with_order(model, n, data, JudgmentOrder::GistFirst)
}
