use std::str::FromStr;

use crate::{
    dictionary::Oracle,
    error::SolveError,
    game::{
        grid::Grid,
        results::ResultSet,
        solver::{self, MAX_TARGET_LENGTH, MIN_WORD_LENGTH},
    },
};

/// What to do with a request line that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedInputPolicy {
    /// Surface the `SolveError`
    #[default]
    Reject,
    /// Answer with an empty result, as if no words were found
    Empty,
}

impl FromStr for MalformedInputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "empty" => Ok(Self::Empty),
            other => Err(format!("unknown malformed input policy '{}'", other)),
        }
    }
}

/// A parsed solve request: the grid plus a target length in
/// `[MIN_WORD_LENGTH, MAX_TARGET_LENGTH]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub grid: Grid,
    pub target_length: usize,
}

impl SolveRequest {
    /// Parse `grid_size²` single-character cell tokens in row-major order followed by
    /// the target length. Tokens after the target length are ignored.
    pub fn parse(line: &str, grid_size: usize) -> Result<Self, SolveError> {
        let mut tokens = line.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return Err(SolveError::EmptyInput);
        }

        let grid = take_cells(&mut tokens, grid_size)?;
        let token = tokens.next().ok_or(SolveError::MissingTargetLength)?;
        let target_length = parse_target_length(token)?;

        Ok(Self {
            grid,
            target_length,
        })
    }

    /// Build a request from separate grid and target length fields. The grid must hold
    /// exactly `grid_size²` cells, so the target length can never be taken from it.
    pub fn from_fields(grid: &str, target_length: &str, grid_size: usize) -> Result<Self, SolveError> {
        let mut tokens = grid.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return Err(SolveError::EmptyInput);
        }

        let grid = take_cells(&mut tokens, grid_size)?;
        let extra = tokens.count();
        if extra > 0 {
            let expected = grid_size * grid_size;
            return Err(SolveError::ExtraCells {
                expected,
                found: expected + extra,
            });
        }

        let target_length = match target_length.trim() {
            "" => return Err(SolveError::MissingTargetLength),
            token => parse_target_length(token)?,
        };

        Ok(Self {
            grid,
            target_length,
        })
    }

    pub fn solve<O: Oracle + ?Sized>(&self, oracle: &O) -> ResultSet {
        solver::search(&self.grid, oracle, self.target_length)
    }
}

/// Consume `grid_size²` single-character cell tokens
fn take_cells<'a, I>(tokens: &mut I, grid_size: usize) -> Result<Grid, SolveError>
where
    I: Iterator<Item = &'a str>,
{
    let expected = grid_size * grid_size;
    let mut cells = Vec::with_capacity(expected);
    while cells.len() < expected {
        let Some(token) = tokens.next() else {
            return Err(SolveError::MissingCells {
                expected,
                found: cells.len(),
            });
        };
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(cell), None) => cells.push(cell),
            _ => {
                return Err(SolveError::MultiCharacterCell {
                    token: token.to_string(),
                })
            }
        }
    }
    Grid::from_cells(grid_size, cells)
}

/// Validate a target length token against `[MIN_WORD_LENGTH, MAX_TARGET_LENGTH]`
pub fn parse_target_length(token: &str) -> Result<usize, SolveError> {
    let value = match token.parse::<i64>() {
        Ok(value) => value,
        // Integers too wide for i64 are still numbers, just far out of range
        Err(_) if is_integer(token) => {
            if token.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        }
        Err(_) => {
            return Err(SolveError::InvalidTargetLength {
                token: token.to_string(),
            })
        }
    };
    validate_target_length(value)
}

fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_target_length(value: i64) -> Result<usize, SolveError> {
    usize::try_from(value)
        .ok()
        .filter(|len| (MIN_WORD_LENGTH..=MAX_TARGET_LENGTH).contains(len))
        .ok_or(SolveError::TargetLengthOutOfRange {
            value,
            min: MIN_WORD_LENGTH,
            max: MAX_TARGET_LENGTH,
        })
}

/// Parse and solve one request line, applying `policy` to malformed input
pub fn solve_line<O: Oracle + ?Sized>(
    line: &str,
    grid_size: usize,
    oracle: &O,
    policy: MalformedInputPolicy,
) -> Result<ResultSet, SolveError> {
    solve_with_policy(SolveRequest::parse(line, grid_size), oracle, policy)
}

/// Solve a request given as separate grid and target length fields
pub fn solve_fields<O: Oracle + ?Sized>(
    grid: &str,
    target_length: &str,
    grid_size: usize,
    oracle: &O,
    policy: MalformedInputPolicy,
) -> Result<ResultSet, SolveError> {
    solve_with_policy(
        SolveRequest::from_fields(grid, target_length, grid_size),
        oracle,
        policy,
    )
}

fn solve_with_policy<O: Oracle + ?Sized>(
    request: Result<SolveRequest, SolveError>,
    oracle: &O,
    policy: MalformedInputPolicy,
) -> Result<ResultSet, SolveError> {
    match request {
        Ok(request) => Ok(request.solve(oracle)),
        Err(e) => {
            tracing::warn!("Rejected solve request: {}", e);
            match policy {
                MalformedInputPolicy::Reject => Err(e),
                MalformedInputPolicy::Empty => Ok(ResultSet::new()),
            }
        }
    }
}
