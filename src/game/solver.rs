use crate::{
    dictionary::Oracle,
    game::{grid::Grid, results::ResultSet},
    models::Position,
};

/// Shortest path that is checked against the dictionary
pub const MIN_WORD_LENGTH: usize = 4;

/// Longest target length accepted from callers
pub const MAX_TARGET_LENGTH: usize = 16;

/// Find every dictionary word spelled by a simple king's-move path of at most
/// `target_length` cells.
///
/// Each cell starts an independent depth-first walk with a fresh visited mask. Every
/// prefix of at least `MIN_WORD_LENGTH` characters is looked up, so shorter words are
/// reported alongside full-length ones. A `target_length` below `MIN_WORD_LENGTH` or an
/// empty grid yields no words.
pub fn search<O: Oracle + ?Sized>(grid: &Grid, oracle: &O, target_length: usize) -> ResultSet {
    let mut walker = Walker {
        grid,
        oracle,
        target_length,
        visited: Vec::new(),
        path: String::with_capacity(target_length.min(grid.cell_count())),
        found: ResultSet::new(),
        paths: 0,
        lookups: 0,
    };

    if target_length < MIN_WORD_LENGTH || grid.is_empty() {
        tracing::debug!(
            "Skipping search: grid size {}, target length {}",
            grid.size(),
            target_length
        );
        return walker.found;
    }

    for start in grid.positions() {
        walker.visited = vec![false; grid.cell_count()];
        walker.path.clear();
        walker.walk(start, 1);
    }

    tracing::debug!(
        "Searched {} paths with {} dictionary lookups, found {} words",
        walker.paths,
        walker.lookups,
        walker.found.len()
    );

    walker.found
}

struct Walker<'a, O: ?Sized> {
    grid: &'a Grid,
    oracle: &'a O,
    target_length: usize,
    /// Cells on the current path
    visited: Vec<bool>,
    path: String,
    found: ResultSet,
    paths: u64,
    lookups: u64,
}

impl<O: Oracle + ?Sized> Walker<'_, O> {
    /// Extend the path with `pos`, which becomes its `depth`-th cell.
    fn walk(&mut self, pos: Position, depth: usize) {
        self.path.push(self.grid.letter(pos));
        self.paths += 1;

        if depth >= MIN_WORD_LENGTH {
            self.lookups += 1;
            if self.oracle.contains(&self.path) {
                self.found.insert(&self.path);
            }
        }

        if depth < self.target_length {
            let index = self.grid.index(pos);
            self.visited[index] = true;

            let grid = self.grid;
            for next in grid.neighbors(pos) {
                if !self.visited[grid.index(next)] {
                    self.walk(next, depth + 1);
                }
            }

            self.visited[index] = false;
        }

        self.path.pop();
    }
}
