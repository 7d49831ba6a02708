// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a complete engine for classic 9x9 Sudoku. It
//! supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Conflict detection for live feedback (soft mode) and a legality
//! predicate used to prune search (hard mode)
//! * Solving Sudoku using a deterministic backtracking algorithm
//! * Validating a claimed solution with a precise failure locator
//! * Generating puzzles of a chosen difficulty by filling a grid and
//! removing cells
//! * Revealing a single additional cell as a hint
//! * Converting recognized text from an external image-recognition
//! collaborator into a grid
//!
//! The engine is purely functional at its boundary: every operation takes a
//! grid by reference and returns a fresh [SudokuGrid] (or a typed failure),
//! so a caller holding the "current" grid never observes a partially updated
//! state.
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Conflict detection
//!
//! After every user edit, [constraint::annotate_conflicts] recomputes the
//! `conflict` flag of every cell. All cells participating in a duplicate are
//! flagged, not just the most recently edited one. The pure edit operations
//! [SudokuGrid::with_value] and [SudokuGrid::with_cleared] already do this
//! for their result.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//!
//! let grid = SudokuGrid::new()
//!     .with_value(0, 0, 5).unwrap()
//!     .with_value(0, 1, 5).unwrap();
//!
//! assert!(grid.cell(0, 0).unwrap().has_conflict());
//! assert!(grid.cell(0, 1).unwrap().has_conflict());
//! assert!(!grid.cell(0, 2).unwrap().has_conflict());
//! ```
//!
//! # Solving
//!
//! [BacktrackingSolver](solver::BacktrackingSolver) fills all empty cells of
//! a grid, if possible, without touching any filled cell. It is fully
//! deterministic: the same input always yields the same
//! [Solution](solver::Solution).
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//! use sudoku_engine::solver::{BacktrackingSolver, Solution};
//!
//! let puzzle = SudokuGrid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//!
//! match BacktrackingSolver.solve(&puzzle) {
//!     Solution::Solved(grid) => assert!(grid.is_full()),
//!     Solution::Unsolvable => panic!("expected a solution")
//! }
//! ```
//!
//! # Generating puzzles
//!
//! [Generator](generator::Generator) produces a playable puzzle for a
//! [Difficulty](generator::Difficulty) tier by filling an empty grid and
//! then clearing random cells until the tier's clue count remains. The
//! remaining cells are marked as givens. The random number generator is
//! injected, so a seeded generator is fully reproducible.
//!
//! ```
//! use sudoku_engine::generator::{Difficulty, Generator};
//!
//! let mut generator = Generator::new_default();
//! let puzzle = generator.generate(Difficulty::Easy).unwrap();
//!
//! assert_eq!(40, puzzle.count_clues());
//! ```
//!
//! # Hints and validation
//!
//! [HintEngine](hint::HintEngine) reveals one additional cell of the current
//! grid, while [validate](validator::validate) delivers the final verdict on
//! a claimed solution, including which row, column, or box is wrong and why.

pub mod constraint;
pub mod error;
pub mod generator;
pub mod hint;
pub mod ingest;
pub mod solver;
pub mod util;
pub mod validator;

use error::{
    GridParseError,
    GridParseResult,
    SudokuError,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a grid.
pub const SIZE: usize = 9;

/// The number of rows and columns of one box (3x3 sub-grid).
pub const BOX_SIZE: usize = 3;

/// The total number of cells in a grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// One position of a [SudokuGrid]. Besides the digit itself, a cell tracks
/// whether it was fixed at generation time (a "given", which is not
/// user-editable) and whether it currently participates in a duplicate in
/// its row, column, or box.
///
/// The `conflict` flag is derived state: it is recomputed from the digit
/// assignments whenever the grid changes and is deliberately excluded from
/// grid equality.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Cell {
    value: Option<u8>,
    given: bool,
    conflict: bool
}

impl Cell {

    pub(crate) fn empty() -> Cell {
        Cell {
            value: None,
            given: false,
            conflict: false
        }
    }

    pub(crate) fn filled(digit: u8) -> Cell {
        Cell {
            value: Some(digit),
            given: false,
            conflict: false
        }
    }

    /// Gets the digit in this cell, or `None` if it is empty.
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// Indicates whether this cell was fixed at generation time and is
    /// therefore not user-editable.
    pub fn is_given(&self) -> bool {
        self.given
    }

    /// Indicates whether this cell's digit duplicates another digit in its
    /// row, column, or box, as of the last conflict annotation.
    pub fn has_conflict(&self) -> bool {
        self.conflict
    }
}

/// A 9x9 Sudoku grid. Each of its 81 [Cell]s may or may not be occupied by a
/// digit from 1 to 9. The grid is the unit of state of the engine: all
/// public mutation methods are pure, that is, they return a new, independent
/// grid and leave this one untouched.
///
/// Two grids are equal if their digits and given-flags agree; the derived
/// conflict annotation does not participate in equality.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct SudokuGrid {
    cells: Vec<Cell>
}

pub(crate) fn index(row: usize, column: usize) -> usize {
    row * SIZE + column
}

fn to_char(cell: Option<u8>) -> char {
    if let Some(digit) = cell {
        (b'0' + digit) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for column in 0..SIZE {
        if column == 0 {
            result.push(start);
        }
        else if column % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(column));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, row: usize) -> String {
    line('║', '║', '│',
        |column| to_char(grid.cells[index(row, column)].value), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for row in 0..SIZE {
            if row == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if row % BOX_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Cell) -> String {
    if let Some(digit) = cell.value {
        digit.to_string()
    }
    else {
        String::from("")
    }
}

impl SudokuGrid {

    /// Creates a new, empty grid in which every cell is user-editable.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![Cell::empty(); CELL_COUNT]
        }
    }

    /// Parses a code encoding a grid. The code is a comma-separated list of
    /// exactly 81 entries, each either empty or a digit from 1 to 9. The
    /// entries are assigned left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting.
    ///
    /// All cells of the parsed grid are user-editable; callers that want
    /// puzzle semantics can rely on the [generator](crate::generator) and
    /// [ingest](crate::ingest) modules, which mark givens themselves.
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(GridParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let digit = entry.parse::<u8>()?;

            if digit == 0 || digit as usize > SIZE {
                return Err(GridParseError::InvalidDigit);
            }

            grid.cells[i] = Cell::filled(digit);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_engine::SudokuGrid;
    ///
    /// let grid = SudokuGrid::new()
    ///     .with_value(1, 1, 4).unwrap()
    ///     .with_value(2, 1, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets a reference to the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn cell(&self, row: usize, column: usize) -> SudokuResult<&Cell> {
        if row >= SIZE || column >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(&self.cells[index(row, column)])
        }
    }

    /// Gets the digit in the cell at the specified position, or `None` if
    /// that cell is empty.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn value(&self, row: usize, column: usize)
            -> SudokuResult<Option<u8>> {
        Ok(self.cell(row, column)?.value)
    }

    /// Indicates whether the cell at the specified position holds the given
    /// digit. This will return `false` if there is a different digit in that
    /// cell or it is empty.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_digit(&self, row: usize, column: usize, digit: u8)
            -> SudokuResult<bool> {
        Ok(self.value(row, column)? == Some(digit))
    }

    /// Returns a new grid in which the cell at the specified position holds
    /// the given digit. This grid is not changed. Conflict flags of the
    /// entire returned grid are recomputed, so all cells participating in a
    /// duplicate are flagged.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the specified
    /// range.
    /// * `SudokuError::CellNotEditable` If the specified cell is a given.
    pub fn with_value(&self, row: usize, column: usize, digit: u8)
            -> SudokuResult<SudokuGrid> {
        if row >= SIZE || column >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if digit == 0 || digit as usize > SIZE {
            return Err(SudokuError::InvalidDigit);
        }

        if self.cells[index(row, column)].given {
            return Err(SudokuError::CellNotEditable);
        }

        let mut result = self.clone();
        result.cells[index(row, column)].value = Some(digit);
        constraint::annotate_conflicts_in_place(&mut result);
        Ok(result)
    }

    /// Returns a new grid in which the cell at the specified position is
    /// empty. This grid is not changed. Conflict flags of the entire
    /// returned grid are recomputed.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are not in
    /// the range `[0, 9[`.
    /// * `SudokuError::CellNotEditable` If the specified cell is a given.
    pub fn with_cleared(&self, row: usize, column: usize)
            -> SudokuResult<SudokuGrid> {
        if row >= SIZE || column >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if self.cells[index(row, column)].given {
            return Err(SudokuError::CellNotEditable);
        }

        let mut result = self.clone();
        result.cells[index(row, column)].value = None;
        constraint::annotate_conflicts_in_place(&mut result);
        Ok(result)
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.value.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with
    /// a digit. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.value.is_some())
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.value.is_none())
    }

    /// Gets the positions of all empty cells as `(row, column)` pairs, in
    /// row-major order.
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        self.cells.iter()
            .enumerate()
            .filter(|(_, c)| c.value.is_none())
            .map(|(i, _)| (i / SIZE, i % SIZE))
            .collect()
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub(crate) fn set_digit(&mut self, row: usize, column: usize, digit: u8) {
        self.cells[index(row, column)].value = Some(digit);
    }

    pub(crate) fn clear_digit(&mut self, row: usize, column: usize) {
        self.cells[index(row, column)].value = None;
    }

    // Marks every filled cell as a given and every empty cell as
    // user-editable.
    pub(crate) fn mark_filled_as_given(&mut self) {
        for cell in &mut self.cells {
            cell.given = cell.value.is_some();
        }
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl PartialEq for SudokuGrid {
    fn eq(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(a, b)| a.value == b.value && a.given == b.given)
    }
}

impl Eq for SudokuGrid { }

impl TryFrom<Vec<Cell>> for SudokuGrid {
    type Error = SudokuError;

    fn try_from(cells: Vec<Cell>) -> Result<SudokuGrid, SudokuError> {
        if cells.len() != CELL_COUNT {
            return Err(SudokuError::WrongCellCount);
        }

        for cell in &cells {
            if let Some(digit) = cell.value {
                if digit == 0 || digit as usize > SIZE {
                    return Err(SudokuError::InvalidDigit);
                }
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }
}

impl From<SudokuGrid> for Vec<Cell> {
    fn from(grid: SudokuGrid) -> Vec<Cell> {
        grid.cells
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let mut code = String::from("1,,,2,");
        code.push_str(",".repeat(76).as_str());
        code.push('9');
        let grid = SudokuGrid::parse(code.as_str()).unwrap();

        assert_eq!(Some(1), grid.value(0, 0).unwrap());
        assert_eq!(None, grid.value(0, 1).unwrap());
        assert_eq!(None, grid.value(0, 2).unwrap());
        assert_eq!(Some(2), grid.value(0, 3).unwrap());
        assert_eq!(Some(9), grid.value(8, 8).unwrap());
        assert_eq!(3, grid.count_clues());
    }

    #[test]
    fn parse_ignores_whitespace() {
        let mut code = String::from(" 1 , , 3 ");
        code.push_str(",".repeat(78).as_str());
        let grid = SudokuGrid::parse(code.as_str()).unwrap();

        assert_eq!(Some(1), grid.value(0, 0).unwrap());
        assert_eq!(None, grid.value(0, 1).unwrap());
        assert_eq!(Some(3), grid.value(0, 2).unwrap());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            SudokuGrid::parse("1,2,3"));

        let code = ",".repeat(81);
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn parse_number_format_error() {
        let mut code = String::from("a");
        code.push_str(",".repeat(80).as_str());
        assert_eq!(Err(GridParseError::NumberFormatError),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_digit() {
        let mut code = String::from("0");
        code.push_str(",".repeat(80).as_str());
        assert_eq!(Err(GridParseError::InvalidDigit),
            SudokuGrid::parse(code.as_str()));

        let mut code = String::from("10");
        code.push_str(",".repeat(80).as_str());
        assert_eq!(Err(GridParseError::InvalidDigit),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let grid = SudokuGrid::new()
            .with_value(0, 0, 1).unwrap()
            .with_value(4, 4, 5).unwrap()
            .with_value(8, 8, 9).unwrap();
        let parsed =
            SudokuGrid::parse(grid.to_parseable_string().as_str()).unwrap();

        assert_eq!(grid, parsed);
    }

    #[test]
    fn with_value_leaves_original_unchanged() {
        let grid = SudokuGrid::new();
        let edited = grid.with_value(3, 4, 7).unwrap();

        assert_eq!(None, grid.value(3, 4).unwrap());
        assert_eq!(Some(7), edited.value(3, 4).unwrap());
    }

    #[test]
    fn with_value_rejects_invalid_input() {
        let grid = SudokuGrid::new();

        assert_eq!(SudokuError::OutOfBounds,
            grid.with_value(9, 0, 1).unwrap_err());
        assert_eq!(SudokuError::OutOfBounds,
            grid.with_value(0, 9, 1).unwrap_err());
        assert_eq!(SudokuError::InvalidDigit,
            grid.with_value(0, 0, 0).unwrap_err());
        assert_eq!(SudokuError::InvalidDigit,
            grid.with_value(0, 0, 10).unwrap_err());
    }

    #[test]
    fn with_value_rejects_given_cell() {
        let mut grid = SudokuGrid::new();
        grid.set_digit(2, 2, 4);
        grid.mark_filled_as_given();

        assert_eq!(SudokuError::CellNotEditable,
            grid.with_value(2, 2, 5).unwrap_err());
        assert_eq!(SudokuError::CellNotEditable,
            grid.with_cleared(2, 2).unwrap_err());
    }

    #[test]
    fn with_cleared_removes_digit() {
        let grid = SudokuGrid::new().with_value(5, 5, 5).unwrap();
        let cleared = grid.with_cleared(5, 5).unwrap();

        assert_eq!(Some(5), grid.value(5, 5).unwrap());
        assert_eq!(None, cleared.value(5, 5).unwrap());
    }

    #[test]
    fn equality_ignores_conflict_flags() {
        let with_conflicts = SudokuGrid::new()
            .with_value(0, 0, 5).unwrap()
            .with_value(0, 1, 5).unwrap();
        let mut without_conflicts = SudokuGrid::new();
        without_conflicts.set_digit(0, 0, 5);
        without_conflicts.set_digit(0, 1, 5);

        assert!(with_conflicts.cell(0, 0).unwrap().has_conflict());
        assert!(!without_conflicts.cell(0, 0).unwrap().has_conflict());
        assert_eq!(with_conflicts, without_conflicts);
    }

    #[test]
    fn equality_respects_given_flags() {
        let mut locked = SudokuGrid::new();
        locked.set_digit(0, 0, 5);
        let mut unlocked = locked.clone();
        locked.mark_filled_as_given();

        assert_ne!(locked, unlocked);
        unlocked.mark_filled_as_given();
        assert_eq!(locked, unlocked);
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::new();
        let partial = SudokuGrid::new().with_value(1, 2, 3).unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(1, partial.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
    }

    #[test]
    fn empty_positions_row_major() {
        let mut grid = SudokuGrid::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                if (row, column) != (4, 7) && (row, column) != (6, 1) {
                    grid.set_digit(row, column, 1);
                }
            }
        }

        assert_eq!(vec![(4, 7), (6, 1)], grid.empty_positions());
    }

    #[test]
    fn serde_round_trip() {
        let grid = SudokuGrid::new()
            .with_value(0, 0, 1).unwrap()
            .with_value(7, 3, 8).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: SudokuGrid = serde_json::from_str(&json).unwrap();

        assert_eq!(grid, deserialized);
    }

    #[test]
    fn serde_rejects_wrong_cell_count() {
        let json = serde_json::to_string(
            &vec![Cell::empty(); CELL_COUNT - 1]).unwrap();
        let result = serde_json::from_str::<SudokuGrid>(&json);

        assert!(result.is_err());
    }
}
