use thiserror::Error;

/// Reasons a solve request line cannot be turned into a grid and a target length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("input is empty")]
    EmptyInput,

    #[error("expected {expected} grid cells, found {found}")]
    MissingCells { expected: usize, found: usize },

    #[error("expected {expected} grid cells, found {found}")]
    ExtraCells { expected: usize, found: usize },

    /// Grid cells are single characters; anything longer is rejected.
    #[error("grid cell '{token}' must be a single character")]
    MultiCharacterCell { token: String },

    #[error("grid rows must all have the same length as the number of rows")]
    NonSquareGrid,

    #[error("target length is missing")]
    MissingTargetLength,

    #[error("target length '{token}' is not a number")]
    InvalidTargetLength { token: String },

    #[error("target length {value} is out of range [{min}, {max}]")]
    TargetLengthOutOfRange { value: i64, min: usize, max: usize },
}

impl SolveError {
    /// True when the input was well-formed but the target length falls outside the
    /// accepted window.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, SolveError::TargetLengthOutOfRange { .. })
    }
}
