// Word search engine: grid, traversal, results, and request parsing

pub mod grid;
pub mod request;
pub mod results;
pub mod solver;
pub mod validator;

pub use grid::{Grid, GridGenerator};
pub use request::{MalformedInputPolicy, SolveRequest};
pub use results::ResultSet;
pub use validator::PathValidator;
