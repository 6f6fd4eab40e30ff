use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Found words sharing one length, in lexicographic order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LengthGroup {
    pub length: usize,
    pub words: Vec<String>,
}
