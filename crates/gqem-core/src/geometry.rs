use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;

/// Unit vector in the 2-D real model space.
///
/// Constructed from an angle measured against the verbatim basis, which
/// is the fixed zero-angle reference.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct UnitVector {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for UnitVector {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

impl UnitVector {
    /// (cos θ, sin θ).
    pub fn from_angle(theta: f64) -> Self {
        let (y, x) = theta.sin_cos();
        Self { x, y }
    }

    /// 2-D dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Counter-clockwise quarter turn: (x, y) → (−y, x).
    ///
    /// Exactly orthogonal to `self`, unlike `from_angle(θ + π/2)` whose
    /// cosine of π/2 is not zero in floating point.
    pub fn perp(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Angle in radians, in (−π, π].
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Scale by a real factor. The result is a unit vector only for |s| = 1.
    pub fn scale(self, s: f64) -> [f64; 2] {
        [self.x * s, self.y * s]
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl std::ops::Neg for UnitVector {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Orthonormal basis {e, e⊥} representing one judgment criterion.
/// `e` is the "yes" eigenvector, `e_perp` the "no" eigenvector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    pub theta: f64,
    pub e: UnitVector,
    pub e_perp: UnitVector,
}

impl Basis {
    pub fn new(theta: f64) -> Self {
        let e = UnitVector::from_angle(theta);
        Self {
            theta,
            e,
            e_perp: e.perp(),
        }
    }
}

/// Unit vector at angle θ: (cos θ, sin θ).
pub fn unit_vector(theta: f64) -> UnitVector {
    UnitVector::from_angle(theta)
}

/// Orthonormal basis rotated by θ from the reference direction.
pub fn basis(theta: f64) -> Basis {
    Basis::new(theta)
}

/// Born-rule probability of a "yes" outcome when measuring `state` along
/// `basis_vector`: the squared dot product, cos² of the angle between them.
/// Range: [0, 1].
pub fn overlap_probability(state: UnitVector, basis_vector: UnitVector) -> f64 {
    let d = state.dot(basis_vector);
    (d * d).min(1.0)
}

/// Post-measurement state after a "no" outcome along `basis`.
///
/// The state collapses onto `e⊥`, signed to keep the half-plane of the
/// pre-measurement component along `e⊥`. A state with no `e⊥` component
/// has a zero-probability "no" branch; `e⊥` is returned unsigned then.
pub fn collapsed_state(state: UnitVector, basis: &Basis) -> UnitVector {
    if state.dot(basis.e_perp) < 0.0 {
        -basis.e_perp
    } else {
        basis.e_perp
    }
}

/// Orthogonal projection of the state at angle `theta_psi` onto the "yes"
/// vector of the basis at angle `theta_basis`.
///
/// Returns the projected (non-unit) vector and its squared length, which is
/// the overlap probability. Used by plotting adapters to draw projections.
pub fn projection(theta_psi: f64, theta_basis: f64) -> ([f64; 2], f64) {
    let state = unit_vector(theta_psi);
    let e = unit_vector(theta_basis);
    let amplitude = state.dot(e);
    (e.scale(amplitude), overlap_probability(state, e))
}
