use rand::Rng;

use crate::{error::SolveError, models::Position, utils::letters::cumulative_distribution};

/// King's-move offsets, diagonals first.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
];

/// Square letter grid, stored row-major. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from `size * size` characters in row-major order
    pub fn from_cells(size: usize, cells: Vec<char>) -> Result<Self, SolveError> {
        let expected = size * size;
        if cells.len() != expected {
            return Err(SolveError::MissingCells {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Build a grid from rows, rejecting anything that is not square
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, SolveError> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(SolveError::NonSquareGrid);
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn empty() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
        }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Character at (row, col). Panics when out of bounds.
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[self.index(Position::new(row, col))]
    }

    pub fn letter(&self, pos: Position) -> char {
        self.cells[self.index(pos)]
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Row-major index of a position, also used for visited masks
    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    /// In-bounds king's-move neighbors of `pos`
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |(dr, dc)| {
            let row = pos.row.checked_add_signed(*dr)?;
            let col = pos.col.checked_add_signed(*dc)?;
            let next = Position::new(row, col);
            self.contains(next).then_some(next)
        })
    }

    pub fn rows(&self) -> Vec<Vec<char>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    /// Cells as one line of space-separated tokens, the same shape `SolveRequest::parse` reads
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a new `size` x `size` grid with weighted letter distribution
    pub fn generate(size: usize) -> Grid {
        let mut rng = rand::rng();
        let cumulative_dist = cumulative_distribution();
        let total = cumulative_dist.last().map(|(_, c)| *c).unwrap_or(0.0);

        let cells = (0..size * size)
            .map(|_| Self::random_letter(&cumulative_dist, total, &mut rng))
            .collect();

        Grid { size, cells }
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'e' // Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::from_rows(vec![
            vec!['c', 'o', 'i', 'b'],
            vec!['q', 'u', 'm', 'h'],
            vec!['m', 'i', 'e', 'y'],
            vec!['p', 'l', 'y', 'c'],
        ])
        .unwrap()
    }

    #[test]
    fn test_grid_generation() {
        let grid = GridGenerator::generate(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cell_count(), 16);
        assert!(grid.rows().iter().all(|row| row.len() == 4));
        assert!(grid.positions().all(|p| grid.letter(p).is_ascii_lowercase()));
    }

    #[test]
    fn test_at_reads_row_major() {
        let grid = sample_grid();
        assert_eq!(grid.at(0, 0), 'c');
        assert_eq!(grid.at(1, 2), 'm');
        assert_eq!(grid.at(3, 3), 'c');
        assert_eq!(grid.to_line(), "c o i b q u m h m i e y p l y c");
    }

    #[test]
    fn test_from_rows_rejects_ragged_grid() {
        let result = Grid::from_rows(vec![vec!['a', 'b'], vec!['c']]);
        assert_eq!(result, Err(SolveError::NonSquareGrid));

        let result = Grid::from_rows(vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]);
        assert_eq!(result, Err(SolveError::NonSquareGrid));
    }

    #[test]
    fn test_from_cells_checks_count() {
        let result = Grid::from_cells(2, vec!['a', 'b', 'c']);
        assert_eq!(
            result,
            Err(SolveError::MissingCells {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_neighbors_corner_edge_interior() {
        let grid = sample_grid();
        assert_eq!(grid.neighbors(Position::new(0, 0)).count(), 3);
        assert_eq!(grid.neighbors(Position::new(0, 1)).count(), 5);
        assert_eq!(grid.neighbors(Position::new(1, 1)).count(), 8);

        // Every neighbor differs by at most one in each direction
        let center = Position::new(2, 1);
        for n in grid.neighbors(center) {
            assert!(n != center);
            assert!(n.row.abs_diff(center.row) <= 1);
            assert!(n.col.abs_diff(center.col) <= 1);
        }
    }

    #[test]
    fn test_single_cell_and_empty_grid() {
        let grid = Grid::from_rows(vec![vec!['x']]).unwrap();
        assert_eq!(grid.neighbors(Position::new(0, 0)).count(), 0);

        let empty = Grid::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.positions().count(), 0);
        assert!(empty.rows().is_empty());
    }
}
