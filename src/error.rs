use thiserror::Error;

/// Reasons a grid cannot be generated from the given input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("grid dimensions must be positive (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },

    #[error("grid of {width}x{height} cells is too large to allocate")]
    TooLarge { width: usize, height: usize },

    /// The filler comes from the second character, so one-character words leave nothing to chain.
    #[error("word must have at least 2 characters (got {len})")]
    WordTooShort { len: usize },

    #[error("cannot seed {target} filler cells into a grid of {cells} cells")]
    Capacity { target: usize, cells: usize },
}
