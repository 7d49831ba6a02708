//! This module contains the strict final-state check for a claimed
//! solution.
//!
//! In contrast to the per-cell conflict annotation in
//! [constraint](crate::constraint), which gives incremental feedback while
//! the puzzle is being filled, [validate] delivers an all-or-nothing
//! judgment: every row, every column, and every box must contain each digit
//! from 1 to 9 exactly once. The first violation found is reported together
//! with a locator that names the offending house and the cause, so a caller
//! can tell the user precisely where the solution went wrong.

use crate::{SIZE, SudokuGrid, constraint, index};
use crate::util::DigitSet;

use std::fmt::{self, Display, Formatter};

/// One of the 27 houses of the grid: a row, a column, or a box. Rows and
/// columns are indexed 0 to 8 from the top-left; boxes are indexed 0 to 8 in
/// row-major order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum House {

    /// The row with the wrapped index.
    Row(usize),

    /// The column with the wrapped index.
    Column(usize),

    /// The box with the wrapped index.
    Box(usize)
}

impl Display for House {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            House::Row(i) => write!(f, "row {}", i + 1),
            House::Column(i) => write!(f, "column {}", i + 1),
            House::Box(i) => write!(f, "box {}", i + 1)
        }
    }
}

/// The reason a house failed validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cause {

    /// The house contains the wrapped digit more than once.
    Duplicate(u8),

    /// The house contains at least one empty cell.
    Empty
}

/// A single rule violation: the first offending [House] in scan order
/// together with its [Cause]. Its `Display` implementation produces a
/// human-readable locator such as `duplicate digit 5 in row 3`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Violation {

    /// The house in which the violation was found.
    pub house: House,

    /// What is wrong in that house.
    pub cause: Cause
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.cause {
            Cause::Duplicate(digit) =>
                write!(f, "duplicate digit {} in {}", digit, self.house),
            Cause::Empty =>
                write!(f, "empty cell in {}", self.house)
        }
    }
}

/// The result of validating a claimed solution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {

    /// The grid is a correct, complete solution.
    Valid,

    /// The grid is not a correct solution; the wrapped [Violation] locates
    /// the first offending house.
    Invalid(Violation)
}

impl Verdict {

    /// Indicates whether this verdict is [Verdict::Valid].
    pub fn is_valid(&self) -> bool {
        *self == Verdict::Valid
    }
}

fn check_house(grid: &SudokuGrid, house: House,
        positions: &[(usize, usize); SIZE]) -> Option<Violation> {
    let mut seen = DigitSet::new();

    for &(row, column) in positions {
        match grid.cells()[index(row, column)].value() {
            Some(digit) =>
                if !seen.insert(digit) {
                    return Some(Violation {
                        house,
                        cause: Cause::Duplicate(digit)
                    });
                },
            None =>
                return Some(Violation {
                    house,
                    cause: Cause::Empty
                })
        }
    }

    None
}

/// Verifies that the given grid is a correct, complete Sudoku solution:
/// no empty cells and each digit from 1 to 9 exactly once in every row,
/// column, and box.
///
/// Houses are scanned in a fixed order: row 0, column 0, row 1, column 1,
/// and so on, followed by boxes 0 to 8. The first violation found decides
/// the verdict, so a grid with several mistakes reports the one earliest in
/// that order. A valid grid yields [Verdict::Valid].
///
/// This function never fails; an ill-formed solution is an expected outcome
/// of the check-solution action, not an error.
pub fn validate(grid: &SudokuGrid) -> Verdict {
    for i in 0..SIZE {
        if let Some(violation) =
                check_house(grid, House::Row(i), &constraint::row_positions(i)) {
            return Verdict::Invalid(violation);
        }

        if let Some(violation) = check_house(grid, House::Column(i),
                &constraint::column_positions(i)) {
            return Verdict::Invalid(violation);
        }
    }

    for i in 0..SIZE {
        if let Some(violation) =
                check_house(grid, House::Box(i), &constraint::box_positions(i)) {
            return Verdict::Invalid(violation);
        }
    }

    Verdict::Valid
}
