pub mod puzzle;

pub use puzzle::{LengthGroup, Position};
