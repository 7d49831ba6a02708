//! This module contains the logic for solving Sudoku.
//!
//! The [BacktrackingSolver] performs an exhaustive depth-first search over
//! the empty cells of a grid. It is deliberately simple: no constraint
//! propagation and no cell-ordering heuristic, which makes it exponential in
//! the worst case but more than fast enough for human-playable clue
//! densities, and, more importantly, fully deterministic.

use crate::{CELL_COUNT, SIZE, SudokuGrid, constraint};

/// The outcome of a solver run. A grid either has at least one completion,
/// in which case the first one found is returned, or none at all.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that a complete, rule-valid assignment was found, which is
    /// wrapped in this instance. All cells that were filled in the input are
    /// unchanged in the wrapped grid.
    Solved(SudokuGrid),

    /// Indicates that the grid cannot be completed at all.
    Unsolvable
}

impl Solution {

    /// Indicates whether this solution is the [Solution::Solved] variant.
    pub fn is_solved(&self) -> bool {
        matches!(self, Solution::Solved(_))
    }
}

/// A [Solution]-producing solver which recursively tests all legal digits
/// for each empty cell, visiting cells in row-major order and candidates in
/// ascending numeric order. The first complete assignment encountered is
/// returned, so repeated calls on identical input yield identical output.
///
/// The solver operates on its own copy of the grid; the input is never
/// modified, in particular not on failure.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    // The search runs over the flat cell index, so advancing to the next
    // cell is a single increment and backtracking resets exactly one slot.
    fn solve_rec(grid: &mut SudokuGrid, cell_index: usize) -> bool {
        if cell_index == CELL_COUNT {
            return true;
        }

        let row = cell_index / SIZE;
        let column = cell_index % SIZE;

        if grid.value(row, column).unwrap().is_some() {
            return BacktrackingSolver::solve_rec(grid, cell_index + 1);
        }

        for digit in 1..=(SIZE as u8) {
            if constraint::check_digit(grid, row, column, digit) {
                grid.set_digit(row, column, digit);

                if BacktrackingSolver::solve_rec(grid, cell_index + 1) {
                    return true;
                }

                grid.clear_digit(row, column);
            }
        }

        false
    }

    /// Solves, or attempts to solve, the provided grid. All empty cells of
    /// the returned grid are filled such that every row, column, and box
    /// contains each digit exactly once together with the digits that were
    /// already present; no already filled cell is altered. Conflict flags of
    /// the returned grid are freshly recomputed.
    ///
    /// If the grid has no completion, [Solution::Unsolvable] is returned and
    /// the input grid is left exactly as it was passed in.
    pub fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut work = grid.clone();

        if BacktrackingSolver::solve_rec(&mut work, 0) {
            constraint::annotate_conflicts_in_place(&mut work);
            Solution::Solved(work)
        }
        else {
            Solution::Unsolvable
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    // Classic puzzle taken from the World Puzzle Federation Sudoku GP 2020
    // Round 8 (Puzzle 2):
    // https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf

    const CLASSIC_PUZZLE: &str = "\
         , , , ,8,1, , , ,\
         , ,2, , ,7,8, , ,\
         ,5,3, , , ,1,7, ,\
        3,7, , , , , , , ,\
        6, , , , , , , ,3,\
         , , , , , , ,2,4,\
         ,6,9, , , ,2,3, ,\
         , ,5,9, , ,4, , ,\
         , , ,6,5, , , , ";

    const CLASSIC_SOLUTION: &str = "\
        7,4,6,2,8,1,3,5,9,\
        9,1,2,5,3,7,8,4,6,\
        8,5,3,4,9,6,1,7,2,\
        3,7,4,1,2,5,6,9,8,\
        6,2,8,7,4,9,5,1,3,\
        5,9,1,3,6,8,7,2,4,\
        1,6,9,8,7,4,2,3,5,\
        2,8,5,9,1,3,4,6,7,\
        4,3,7,6,5,2,9,8,1";

    fn unsolvable_grid() -> SudokuGrid {
        // Cell (0, 8) has no candidate: 1 to 8 are in its row, 9 in its
        // column.
        let mut grid = SudokuGrid::new();

        for column in 0..8 {
            grid.set_digit(0, column, column as u8 + 1);
        }

        grid.set_digit(1, 8, 9);
        grid
    }

    #[test]
    fn solves_classic_puzzle() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let expected = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();

        assert_eq!(Solution::Solved(expected),
            BacktrackingSolver.solve(&puzzle));
    }

    #[test]
    fn solves_empty_grid() {
        let solution = BacktrackingSolver.solve(&SudokuGrid::new());

        if let Solution::Solved(grid) = solution {
            assert!(grid.is_full());
            assert!(!grid.cells().iter().any(|c| c.has_conflict()));
        }
        else {
            panic!("empty grid marked as unsolvable");
        }
    }

    #[test]
    fn solved_output_has_all_digits_in_every_house() {
        use crate::util::DigitSet;

        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let grid = match BacktrackingSolver.solve(&puzzle) {
            Solution::Solved(grid) => grid,
            Solution::Unsolvable => panic!("solvable puzzle rejected")
        };

        for house in 0..SIZE {
            for positions in &[
                constraint::row_positions(house),
                constraint::column_positions(house),
                constraint::box_positions(house)
            ] {
                let mut set = DigitSet::new();

                for &(row, column) in positions.iter() {
                    set.insert(grid.value(row, column).unwrap().unwrap());
                }

                assert!(set.is_full());
            }
        }
    }

    #[test]
    fn preserves_filled_cells() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let grid = match BacktrackingSolver.solve(&puzzle) {
            Solution::Solved(grid) => grid,
            Solution::Unsolvable => panic!("solvable puzzle rejected")
        };

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(digit) = puzzle.value(row, column).unwrap() {
                    assert_eq!(Some(digit),
                        grid.value(row, column).unwrap());
                }
            }
        }
    }

    #[test]
    fn deterministic_on_identical_input() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();

        assert_eq!(BacktrackingSolver.solve(&puzzle),
            BacktrackingSolver.solve(&puzzle));

        // determinism also holds for ambiguous inputs
        let empty = SudokuGrid::new();
        assert_eq!(BacktrackingSolver.solve(&empty),
            BacktrackingSolver.solve(&empty));
    }

    #[test]
    fn unsolvable_grid_reported() {
        assert_eq!(Solution::Unsolvable,
            BacktrackingSolver.solve(&unsolvable_grid()));
    }

    #[test]
    fn failure_leaves_input_unchanged() {
        let grid = unsolvable_grid();
        let before = grid.clone();
        let solution = BacktrackingSolver.solve(&grid);

        assert_eq!(Solution::Unsolvable, solution);
        assert_eq!(before, grid);
    }

    #[test]
    fn full_grid_returned_as_is() {
        let full = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();

        assert_eq!(Solution::Solved(full.clone()),
            BacktrackingSolver.solve(&full));
    }
}
