use std::collections::HashSet;

use crate::{game::grid::Grid, models::Position};

pub struct PathValidator;

impl PathValidator {
    /// Validate that positions form a simple king's-move path on the grid
    pub fn is_valid_path(grid: &Grid, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !Self::are_adjacent(&window[0], &window[1]) {
                return false;
            }
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        if unique_positions.len() != positions.len() {
            return false;
        }

        positions.iter().all(|pos| grid.contains(*pos))
    }

    /// Check if two positions are adjacent (including diagonals)
    pub fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
        let row_diff = pos1.row.abs_diff(pos2.row);
        let col_diff = pos1.col.abs_diff(pos2.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }

    /// Extract word from grid positions
    pub fn extract_word(grid: &Grid, positions: &[Position]) -> String {
        positions.iter().map(|pos| grid.letter(*pos)).collect()
    }
}

/// Trace one simple path spelling `word`, trying starting cells in row-major order
pub fn find_path(grid: &Grid, word: &str) -> Option<Vec<Position>> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return None;
    }

    let mut visited = vec![false; grid.cell_count()];
    let mut path = Vec::with_capacity(letters.len());

    let found = grid
        .positions()
        .any(|start| trace(grid, &letters, start, &mut visited, &mut path));
    found.then_some(path)
}

/// One traced path for `word` as "(row,col)" steps, checked before it is returned
pub fn explain(grid: &Grid, word: &str) -> Option<String> {
    let path = find_path(grid, word)?;
    if !PathValidator::is_valid_path(grid, &path) {
        return None;
    }
    let steps: Vec<String> = path
        .iter()
        .map(|p| format!("({},{})", p.row, p.col))
        .collect();
    Some(steps.join(" "))
}

fn trace(
    grid: &Grid,
    letters: &[char],
    pos: Position,
    visited: &mut [bool],
    path: &mut Vec<Position>,
) -> bool {
    if grid.letter(pos) != letters[path.len()] {
        return false;
    }

    path.push(pos);
    if path.len() == letters.len() {
        return true;
    }

    let index = grid.index(pos);
    visited[index] = true;
    for next in grid.neighbors(pos) {
        if !visited[grid.index(next)] && trace(grid, letters, next, visited, path) {
            return true;
        }
    }
    visited[index] = false;

    path.pop();
    false
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
    fn test_adjacent_positions() {
        let pos1 = Position { row: 0, col: 0 };
        let pos2 = Position { row: 0, col: 1 };
        let pos3 = Position { row: 1, col: 1 };
        let pos4 = Position { row: 2, col: 2 };

        assert!(PathValidator::are_adjacent(&pos1, &pos2));
        assert!(PathValidator::are_adjacent(&pos2, &pos3));
        assert!(!PathValidator::are_adjacent(&pos1, &pos4));
        assert!(!PathValidator::are_adjacent(&pos1, &pos1));
    }

    #[test]
    fn test_path_validation() {
        let grid = sample_grid();
        let path = vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 1),
            Position::new(2, 1),
        ];
        assert!(PathValidator::is_valid_path(&grid, &path));
        assert_eq!(PathValidator::extract_word(&grid, &path), "coui");

        // Revisiting a cell
        let repeated = vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 0)];
        assert!(!PathValidator::is_valid_path(&grid, &repeated));

        // Jumping two rows
        let jump = vec![Position::new(0, 1), Position::new(2, 1)];
        assert!(!PathValidator::is_valid_path(&grid, &jump));

        // Leaving the grid
        let outside = vec![Position::new(3, 3), Position::new(4, 4)];
        assert!(!PathValidator::is_valid_path(&grid, &outside));

        assert!(!PathValidator::is_valid_path(&grid, &[]));
    }

    #[test]
    fn test_find_path() {
        let grid = sample_grid();
        let path = find_path(&grid, "limey").unwrap();
        assert_eq!(path.len(), 5);
        assert!(PathValidator::is_valid_path(&grid, &path));
        assert_eq!(PathValidator::extract_word(&grid, &path), "limey");

        assert_eq!(find_path(&grid, "coil"), None);
        assert_eq!(find_path(&grid, "coco"), None);
        assert_eq!(find_path(&grid, ""), None);
    }

    #[test]
    fn test_explain() {
        let grid = sample_grid();
        assert_eq!(
            explain(&grid, "coui").as_deref(),
            Some("(0,0) (0,1) (1,1) (0,2)")
        );
        assert_eq!(explain(&grid, "coil"), None);
    }

    #[test]
    fn test_find_path_backtracks() {
        // The first 'a' leads to a dead end; the word starts from the second
        let grid = Grid::from_rows(vec![
            vec!['a', 'x', 'x'],
            vec!['x', 'x', 'x'],
            vec!['a', 'b', 'c'],
        ])
        .unwrap();
        let path = find_path(&grid, "abc").unwrap();
        assert_eq!(
            path,
            vec![Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)]
        );
    }
}
