/// Number of instruction conditions (matrix rows).
pub const N_INSTRUCTIONS: usize = 4;

/// Number of probe word types (matrix columns).
pub const N_WORD_TYPES: usize = 3;

/// Shape of every prediction and count matrix: (rows, cols).
pub const MATRIX_SHAPE: (usize, usize) = (N_INSTRUCTIONS, N_WORD_TYPES);

/// Row labels, in matrix order.
pub const INSTRUCTION_LABELS: [&str; N_INSTRUCTIONS] =
    ["gist", "verbatim", "gist+verbatim", "unrelated"];

/// Column labels, in matrix order.
pub const WORD_TYPE_LABELS: [&str; N_WORD_TYPES] = ["old", "related", "unrelated"];

/// Numerical epsilon for near-zero comparisons
pub const EPSILON: f64 = 1e-10;

/// Below this, ln(n!) is summed exactly; at or above it the Stirling series is used.
pub const STIRLING_CUTOFF: u64 = 32;
