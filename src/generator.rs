//! This module contains the logic for generating random Sudoku puzzles.
//!
//! Generation is a two-step pipeline: a [Generator] first fills an empty
//! grid with a complete, rule-valid assignment, then clears randomly chosen
//! cells until only the clue count of the requested [Difficulty] remains.
//! The cells that survive are marked as givens. Because the puzzle is a
//! sub-assignment of a valid full solution, it is solvable by construction
//! (though not necessarily uniquely).
//!
//! The random number generator is injected, so a seeded generator produces
//! the same puzzle every time, which tests rely on. For most cases,
//! sensible defaults are provided by [Generator::new_default].

use crate::{CELL_COUNT, SIZE, SudokuGrid};
use crate::constraint;
use crate::error::{SudokuError, SudokuResult};

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// The difficulty tier of a generated puzzle, which determines how many
/// clues the puzzle starts with: 40 for easy, 30 for medium, and 20 for
/// hard.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {

    /// 40 clues remain in the puzzle.
    Easy,

    /// 30 clues remain in the puzzle. This is the default tier.
    Medium,

    /// 20 clues remain in the puzzle.
    Hard
}

impl Difficulty {

    /// Parses a difficulty selector token. The literal tokens `easy`,
    /// `medium`, and `hard` map to their tiers; any other value falls back
    /// to [Difficulty::Medium].
    pub fn from_token(token: &str) -> Difficulty {
        match token {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium
        }
    }

    /// The number of filled cells a puzzle of this tier starts with.
    pub fn target_clues(self) -> usize {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Medium => 30,
            Difficulty::Hard => 20
        }
    }
}

impl Default for Difficulty {
    fn default() -> Difficulty {
        Difficulty::Medium
    }
}

fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// A generator randomly generates playable Sudoku puzzles. It uses a random
/// number generator both to diversify the full solution its puzzles are
/// derived from and to decide which cells are cleared.
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, cell_index: usize) -> bool {
        if cell_index == CELL_COUNT {
            return true;
        }

        let row = cell_index / SIZE;
        let column = cell_index % SIZE;

        if grid.value(row, column).unwrap().is_some() {
            return self.fill_rec(grid, cell_index + 1);
        }

        for digit in shuffle(&mut self.rng, 1..=(SIZE as u8)) {
            if constraint::check_digit(grid, row, column, digit) {
                grid.set_digit(row, column, digit);

                if self.fill_rec(grid, cell_index + 1) {
                    return true;
                }

                grid.clear_digit(row, column);
            }
        }

        false
    }

    /// Returns a copy of the given grid in which every empty cell is filled
    /// with a random digit such that every row, column, and box contains
    /// each digit exactly once together with the digits already present.
    /// This grid is not changed.
    ///
    /// Unlike the [solver](crate::solver), which visits candidates in
    /// ascending order and is therefore deterministic, the fill shuffles
    /// the candidate order at every cell, so repeated calls produce
    /// different completions.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableGrid` If the digits already present
    /// cannot be completed to any valid full grid.
    pub fn fill(&mut self, grid: &SudokuGrid) -> SudokuResult<SudokuGrid> {
        let mut work = grid.clone();

        if self.fill_rec(&mut work, 0) {
            Ok(work)
        }
        else {
            Err(SudokuError::UnsatisfiableGrid)
        }
    }

    /// Generates a new playable puzzle of the given [Difficulty].
    ///
    /// A complete random solution is generated first; random cells are then
    /// cleared, retrying on already-empty cells, until exactly
    /// `81 - difficulty.target_clues()` cells have been removed. All
    /// remaining cells are marked as givens, all cleared cells are
    /// user-editable, and no cell carries a conflict flag.
    ///
    /// The produced puzzle is solvable by construction. Uniqueness of the
    /// solution is *not* guaranteed.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableGrid` If filling the initial grid
    /// fails. An empty grid always has a completion, so this does not occur
    /// in practice.
    pub fn generate(&mut self, difficulty: Difficulty)
            -> SudokuResult<SudokuGrid> {
        let mut puzzle = self.fill(&SudokuGrid::new())?;
        let cells_to_remove = CELL_COUNT - difficulty.target_clues();
        let mut removed = 0;

        while removed < cells_to_remove {
            let cell_index = self.rng.gen_range(0..CELL_COUNT);
            let row = cell_index / SIZE;
            let column = cell_index % SIZE;

            if puzzle.value(row, column).unwrap().is_some() {
                puzzle.clear_digit(row, column);
                removed += 1;
            }
        }

        puzzle.mark_filled_as_given();
        Ok(puzzle)
    }
}
