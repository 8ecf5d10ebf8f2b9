use serde::{Deserialize, Serialize};

use crate::constants::{INSTRUCTION_LABELS, WORD_TYPE_LABELS};
use crate::error::{GqemError, Result};
use crate::geometry::{Basis, UnitVector, basis, unit_vector};

/// Instruction condition given to the subject. Row index of the matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    /// Respond "yes" to semantically related words.
    Gist,
    /// Respond "yes" to studied words.
    Verbatim,
    /// Respond "yes" to related or studied words.
    GistVerbatim,
    /// Respond "yes" to unrelated words.
    Unrelated,
}

impl Instruction {
    pub const ALL: [Instruction; 4] = [
        Instruction::Gist,
        Instruction::Verbatim,
        Instruction::GistVerbatim,
        Instruction::Unrelated,
    ];

    pub fn index(self) -> usize {
        match self {
            Instruction::Gist => 0,
            Instruction::Verbatim => 1,
            Instruction::GistVerbatim => 2,
            Instruction::Unrelated => 3,
        }
    }

    pub fn label(self) -> &'static str {
        INSTRUCTION_LABELS[self.index()]
    }
}

/// Probe word type. Column index of the matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    Old,
    Related,
    Unrelated,
}

impl WordType {
    pub const ALL: [WordType; 3] = [WordType::Old, WordType::Related, WordType::Unrelated];

    pub fn index(self) -> usize {
        match self {
            WordType::Old => 0,
            WordType::Related => 1,
            WordType::Unrelated => 2,
        }
    }

    pub fn label(self) -> &'static str {
        WORD_TYPE_LABELS[self.index()]
    }
}

/// Order in which the two incompatible questions of the gist+verbatim
/// judgment are answered. The first question's "no" branch is collapsed
/// before the second is asked, so the two orders generally disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgmentOrder {
    #[default]
    GistFirst,
    VerbatimFirst,
}

/// The five angle parameters, in radians, relative to the verbatim basis.
///
/// This is the whole configuration surface. Keys accept the snake_case
/// names or the Greek-letter names used in the literature.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GqemParams {
    /// Gist basis rotation.
    #[serde(alias = "θG")]
    pub theta_g: f64,
    /// Unrelated basis rotation.
    #[serde(alias = "θU", alias = "θN")]
    pub theta_u: f64,
    /// Old-probe state rotation.
    #[serde(alias = "θψO")]
    pub theta_psi_o: f64,
    /// Related-probe state rotation.
    #[serde(alias = "θψR")]
    pub theta_psi_r: f64,
    /// Unrelated-probe state rotation.
    #[serde(alias = "θψU")]
    pub theta_psi_u: f64,
}

impl GqemParams {
    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("theta_g", self.theta_g),
            ("theta_u", self.theta_u),
            ("theta_psi_o", self.theta_psi_o),
            ("theta_psi_r", self.theta_psi_r),
            ("theta_psi_u", self.theta_psi_u),
        ]
    }

    /// Check that every angle is finite.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.named() {
            if !value.is_finite() {
                return Err(GqemError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Generalized quantum episodic memory model.
///
/// Immutable once built. The bases and state vectors are derived from the
/// angles at construction; the verbatim basis is the zero-angle reference
/// and has no free parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gqem {
    params: GqemParams,
    gist: Basis,
    verbatim: Basis,
    unrelated: Basis,
    psi_old: UnitVector,
    psi_related: UnitVector,
    psi_unrelated: UnitVector,
}

impl Gqem {
    pub fn new(params: GqemParams) -> Result<Self> {
        params.validate()?;
        tracing::trace!(?params, "building GQEM model");
        Ok(Self {
            params,
            gist: basis(params.theta_g),
            verbatim: basis(0.0),
            unrelated: basis(params.theta_u),
            psi_old: unit_vector(params.theta_psi_o),
            psi_related: unit_vector(params.theta_psi_r),
            psi_unrelated: unit_vector(params.theta_psi_u),
        })
    }

    /// Build from the five angles, in declaration order.
    pub fn from_angles(
        theta_g: f64,
        theta_u: f64,
        theta_psi_o: f64,
        theta_psi_r: f64,
        theta_psi_u: f64,
    ) -> Result<Self> {
        Self::new(GqemParams {
            theta_g,
            theta_u,
            theta_psi_o,
            theta_psi_r,
            theta_psi_u,
        })
    }

    /// Parse a TOML parameter document and build the model.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let params: GqemParams = toml::from_str(s)?;
        Self::new(params)
    }

    pub fn params(&self) -> &GqemParams {
        &self.params
    }

    pub fn gist(&self) -> &Basis {
        &self.gist
    }

    pub fn verbatim(&self) -> &Basis {
        &self.verbatim
    }

    pub fn unrelated(&self) -> &Basis {
        &self.unrelated
    }

    /// Basis probed by a single-question instruction.
    /// `GistVerbatim` is compound and has no single basis.
    pub fn basis_for(&self, instruction: Instruction) -> Option<&Basis> {
        match instruction {
            Instruction::Gist => Some(&self.gist),
            Instruction::Verbatim => Some(&self.verbatim),
            Instruction::Unrelated => Some(&self.unrelated),
            Instruction::GistVerbatim => None,
        }
    }

    /// Initial state vector triggered by a probe of the given type.
    pub fn state(&self, word_type: WordType) -> UnitVector {
        match word_type {
            WordType::Old => self.psi_old,
            WordType::Related => self.psi_related,
            WordType::Unrelated => self.psi_unrelated,
        }
    }

    /// Angle of the state vector for a probe type.
    pub fn state_angle(&self, word_type: WordType) -> f64 {
        match word_type {
            WordType::Old => self.params.theta_psi_o,
            WordType::Related => self.params.theta_psi_r,
            WordType::Unrelated => self.params.theta_psi_u,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GqemParams {
        GqemParams {
            theta_g: -0.12,
            theta_u: -1.54,
            theta_psi_o: -0.71,
            theta_psi_r: -0.86,
            theta_psi_u: 1.26,
        }
    }

    #[test]
    fn test_new_derives_geometry() {
        let m = Gqem::new(params()).unwrap();
        assert_eq!(m.verbatim().theta, 0.0);
        assert_eq!(m.gist().theta, -0.12);
        assert_eq!(m.unrelated().theta, -1.54);
        assert_eq!(m.state(WordType::Old), unit_vector(-0.71));
        assert_eq!(m.state(WordType::Unrelated), unit_vector(1.26));
    }

    #[test]
    fn test_rejects_nan() {
        let mut p = params();
        p.theta_psi_r = f64::NAN;
        match Gqem::new(p) {
            Err(GqemError::InvalidParameter { name, .. }) => assert_eq!(name, "theta_psi_r"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_infinity() {
        let err = Gqem::from_angles(f64::INFINITY, 0.0, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            GqemError::InvalidParameter {
                name: "theta_g",
                ..
            }
        ));
    }

    #[test]
    fn test_large_angles_are_accepted() {
        assert!(Gqem::from_angles(100.0, -50.0, 7.0, 2.0 * std::f64::consts::TAU, -9.0).is_ok());
    }

    #[test]
    fn test_from_toml_snake_case() {
        let m = Gqem::from_toml_str(
            "theta_g = -0.5\ntheta_u = 2.0\ntheta_psi_o = 0.9\ntheta_psi_r = 0.15\ntheta_psi_u = -1.5\n",
        )
        .unwrap();
        assert_eq!(m.params().theta_u, 2.0);
        assert_eq!(m.state_angle(WordType::Related), 0.15);
    }

    #[test]
    fn test_from_toml_greek_aliases() {
        let m = Gqem::from_toml_str(
            "\"θG\" = -0.12\n\"θN\" = -1.54\n\"θψO\" = -0.71\n\"θψR\" = -0.86\n\"θψU\" = 1.26\n",
        )
        .unwrap();
        assert_eq!(*m.params(), params());
    }

    #[test]
    fn test_from_toml_missing_key() {
        let err = Gqem::from_toml_str("theta_g = 0.0\ntheta_u = 0.0\n").unwrap_err();
        assert!(matches!(err, GqemError::Config(_)));
    }

    #[test]
    fn test_from_toml_rejects_nan() {
        let err = Gqem::from_toml_str(
            "theta_g = nan\ntheta_u = 0.0\ntheta_psi_o = 0.0\ntheta_psi_r = 0.0\ntheta_psi_u = 0.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, GqemError::InvalidParameter { .. }));
    }

    #[test]
    fn test_basis_for_compound_is_none() {
        let m = Gqem::new(params()).unwrap();
        assert!(m.basis_for(Instruction::GistVerbatim).is_none());
        assert_eq!(m.basis_for(Instruction::Gist), Some(m.gist()));
    }

    #[test]
    fn test_labels_follow_indices() {
        let rows: Vec<&str> = Instruction::ALL.iter().map(|i| i.label()).collect();
        assert_eq!(rows, ["gist", "verbatim", "gist+verbatim", "unrelated"]);
        let cols: Vec<&str> = WordType::ALL.iter().map(|w| w.label()).collect();
        assert_eq!(cols, ["old", "related", "unrelated"]);
    }
}
