//! This module contains the hint engine, which reveals exactly one
//! additional cell of the current grid.
//!
//! Hints are computed against the *current* partially filled grid: the
//! engine picks a random empty cell and fills in the smallest digit that is
//! legal there according to the hard-mode check in
//! [constraint](crate::constraint). It does not verify that the hinted
//! digit extends to a full solution, so if the player has already made a
//! move that is inconsistent with every completion, a hint may be
//! misleading. This is a documented limitation, not an error.

use crate::{SIZE, SudokuGrid, constraint};

use rand::Rng;
use rand::rngs::ThreadRng;

/// A hint engine reveals one additional cell of a grid at a time. It uses a
/// random number generator to decide which empty cell is revealed; the
/// generator is injected so that hints can be made reproducible.
pub struct HintEngine<R: Rng> {
    rng: R
}

impl HintEngine<ThreadRng> {

    /// Creates a new hint engine that uses a [ThreadRng] to choose the
    /// revealed cells.
    pub fn new_default() -> HintEngine<ThreadRng> {
        HintEngine::new(rand::thread_rng())
    }
}

impl<R: Rng> HintEngine<R> {

    /// Creates a new hint engine that uses the given random number
    /// generator to choose the revealed cells.
    pub fn new(rng: R) -> HintEngine<R> {
        HintEngine {
            rng
        }
    }

    /// Returns a copy of the given grid in which one previously empty cell,
    /// chosen uniformly at random, is filled with the smallest digit that
    /// is legal against the current occupied cells. The filled cell remains
    /// user-editable; this grid is not changed.
    ///
    /// `None` is returned if no hint is available: either the grid is
    /// already full, or the chosen cell admits no legal digit at all (which
    /// can only happen if the grid already contains contradictory entries).
    pub fn hint(&mut self, grid: &SudokuGrid) -> Option<SudokuGrid> {
        let empty_positions = grid.empty_positions();

        if empty_positions.is_empty() {
            return None;
        }

        let (row, column) =
            empty_positions[self.rng.gen_range(0..empty_positions.len())];

        for digit in 1..=(SIZE as u8) {
            if constraint::check_digit(grid, row, column, digit) {
                let mut result = grid.clone();
                result.set_digit(row, column, digit);
                constraint::annotate_conflicts_in_place(&mut result);
                return Some(result);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::validator::{Verdict, validate};

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EXAMPLE_SOLUTION: &str = "\
        5,3,4,6,7,8,9,1,2,\
        6,7,2,1,9,5,3,4,8,\
        1,9,8,3,4,2,5,6,7,\
        8,5,9,7,6,1,4,2,3,\
        4,2,6,8,5,3,7,9,1,\
        7,1,3,9,2,4,8,5,6,\
        9,6,1,5,3,7,2,8,4,\
        2,8,7,4,1,9,6,3,5,\
        3,4,5,2,8,6,1,7,9";

    fn seeded_engine(seed: u64) -> HintEngine<ChaCha8Rng> {
        HintEngine::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn full_grid_yields_no_hint() {
        let grid = SudokuGrid::parse(EXAMPLE_SOLUTION).unwrap();
        let mut engine = seeded_engine(1);

        assert_eq!(None, engine.hint(&grid));
    }

    #[test]
    fn single_missing_cell_completed_correctly() {
        let grid = SudokuGrid::parse(EXAMPLE_SOLUTION).unwrap()
            .with_cleared(4, 4).unwrap();
        let mut engine = seeded_engine(2);
        let hinted = engine.hint(&grid).unwrap();

        // only (4, 4) was empty, so the hint must restore the 5 there
        assert_eq!(Some(5), hinted.value(4, 4).unwrap());
        assert_eq!(Verdict::Valid, validate(&hinted));
    }

    #[test]
    fn hint_fills_exactly_one_cell() {
        let grid = SudokuGrid::parse(EXAMPLE_SOLUTION).unwrap()
            .with_cleared(0, 0).unwrap()
            .with_cleared(3, 7).unwrap()
            .with_cleared(8, 2).unwrap();
        let mut engine = seeded_engine(3);
        let hinted = engine.hint(&grid).unwrap();

        assert_eq!(grid.count_clues() + 1, hinted.count_clues());
    }

    #[test]
    fn hint_leaves_original_unchanged() {
        let grid = SudokuGrid::new();
        let mut engine = seeded_engine(4);
        let hinted = engine.hint(&grid).unwrap();

        assert!(grid.is_empty());
        assert_eq!(1, hinted.count_clues());
    }

    #[test]
    fn hinted_cell_stays_editable() {
        let grid = SudokuGrid::new();
        let mut engine = seeded_engine(5);
        let hinted = engine.hint(&grid).unwrap();
        let (row, column) = grid.empty_positions().into_iter()
            .find(|&(row, column)|
                hinted.value(row, column).unwrap().is_some())
            .unwrap();

        assert!(!hinted.cell(row, column).unwrap().is_given());
    }

    #[test]
    fn hint_is_locally_legal() {
        let grid = SudokuGrid::parse(EXAMPLE_SOLUTION).unwrap()
            .with_cleared(6, 3).unwrap()
            .with_cleared(2, 8).unwrap();
        let mut engine = seeded_engine(6);
        let hinted = engine.hint(&grid).unwrap();

        assert!(!hinted.cells().iter().any(|c| c.has_conflict()));
    }

    #[test]
    fn same_seed_same_hint() {
        let grid = SudokuGrid::parse(EXAMPLE_SOLUTION).unwrap()
            .with_cleared(0, 0).unwrap()
            .with_cleared(5, 5).unwrap();

        let hinted_a = seeded_engine(7).hint(&grid).unwrap();
        let hinted_b = seeded_engine(7).hint(&grid).unwrap();

        assert_eq!(hinted_a, hinted_b);
    }

    #[test]
    fn dead_cell_yields_no_hint() {
        // the single empty cell (0, 8) admits no digit: 1 to 8 are in its
        // row and 9 in its column
        let mut grid = SudokuGrid::new();

        for column in 0..8 {
            grid.set_digit(0, column, column as u8 + 1);
        }

        grid.set_digit(1, 8, 9);

        for column in 0..SIZE {
            for row in 2..SIZE {
                grid.set_digit(row, column, 1);
            }
        }

        for column in 0..8 {
            grid.set_digit(1, column, 1);
        }

        let mut engine = seeded_engine(8);

        assert_eq!(None, engine.hint(&grid));
    }
}
