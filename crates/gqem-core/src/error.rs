use std::fmt;

#[derive(Debug)]
pub enum GqemError {
    /// A model angle was NaN or infinite.
    InvalidParameter { name: &'static str, value: f64 },
    /// Two matrices (or a matrix and the fixed 4×3 layout) disagree in shape.
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A count fell outside `[0, n]`, or a trial count was negative.
    DomainError {
        row: usize,
        col: usize,
        count: i64,
        trials: i64,
    },
    /// The binomial sampler rejected a cell probability.
    Sampling(String),
    Config(toml::de::Error),
    Json(serde_json::Error),
}

impl fmt::Display for GqemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GqemError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter: {name} = {value} is not finite")
            }
            GqemError::ShapeMismatch { expected, found } => write!(
                f,
                "shape mismatch: expected {}×{}, found {}×{}",
                expected.0, expected.1, found.0, found.1
            ),
            GqemError::DomainError {
                row,
                col,
                count,
                trials,
            } => write!(
                f,
                "domain error at [{row}, {col}]: count {count} outside [0, {trials}]"
            ),
            GqemError::Sampling(msg) => write!(f, "sampling error: {msg}"),
            GqemError::Config(e) => write!(f, "config error: {e}"),
            GqemError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for GqemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GqemError::Config(e) => Some(e),
            GqemError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for GqemError {
    fn from(e: toml::de::Error) -> Self {
        GqemError::Config(e)
    }
}

impl From<serde_json::Error> for GqemError {
    fn from(e: serde_json::Error) -> Self {
        GqemError::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, GqemError>;
